//! Database repository for the three collections.
//!
//! Mirrors document-store semantics: full scans, fetch by `_id` (missing is `None`),
//! exact-match lookups, and single inserts. Nothing is updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{new_document_id, NewStation, NewTrip, NewWater, Station, Trip, Water};

const WATER_COLUMNS: &str = "id, name, type";
const STATION_COLUMNS: &str = "id, name, usgs_id, longitude, latitude, water_id";
const TRIP_COLUMNS: &str = "id, date, stream_id, user_id, weather, description, fish";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== WATER OPERATIONS ====================

    /// List all waters in insertion order.
    pub async fn list_waters(&self) -> Result<Vec<Water>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM waters ORDER BY rowid",
            WATER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(water_from_row).collect())
    }

    /// Get a water by ID.
    pub async fn get_water(&self, id: &str) -> Result<Option<Water>, AppError> {
        let row = sqlx::query(&format!("SELECT {} FROM waters WHERE id = ?", WATER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(water_from_row))
    }

    pub async fn create_water(&self, new: &NewWater) -> Result<Water, AppError> {
        let id = new_document_id();

        sqlx::query("INSERT INTO waters (id, name, type, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&new.name)
            .bind(&new.kind)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        tracing::debug!(water_id = %id, "Created water");

        Ok(Water {
            id,
            name: new.name.clone(),
            kind: new.kind.clone(),
        })
    }

    // ==================== STATION OPERATIONS ====================

    /// List all stations in insertion order.
    pub async fn list_stations(&self) -> Result<Vec<Station>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM stations ORDER BY rowid",
            STATION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(station_from_row).collect())
    }

    /// First station recorded for a water, if any.
    pub async fn find_station_by_water(&self, water_id: &str) -> Result<Option<Station>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM stations WHERE water_id = ? ORDER BY rowid LIMIT 1",
            STATION_COLUMNS
        ))
        .bind(water_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(station_from_row))
    }

    /// Every station owned by a water.
    pub async fn stations_for_water(&self, water_id: &str) -> Result<Vec<Station>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM stations WHERE water_id = ? ORDER BY rowid",
            STATION_COLUMNS
        ))
        .bind(water_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(station_from_row).collect())
    }

    pub async fn create_station(&self, new: &NewStation) -> Result<Station, AppError> {
        let id = new_document_id();

        sqlx::query(
            "INSERT INTO stations (id, name, usgs_id, longitude, latitude, water_id, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&new.name)
        .bind(&new.usgs_id)
        .bind(new.longitude)
        .bind(new.latitude)
        .bind(&new.water_id)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        tracing::debug!(station_id = %id, usgs_id = ?new.usgs_id, "Created station");

        Ok(Station {
            id,
            name: new.name.clone(),
            usgs_id: new.usgs_id.clone(),
            longitude: new.longitude,
            latitude: new.latitude,
            water_id: new.water_id.clone(),
        })
    }

    // ==================== TRIP OPERATIONS ====================

    /// List all trips in insertion order.
    pub async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        let rows = sqlx::query(&format!("SELECT {} FROM trips ORDER BY rowid", TRIP_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(trip_from_row).collect())
    }

    /// Get a trip by ID.
    pub async fn get_trip(&self, id: &str) -> Result<Option<Trip>, AppError> {
        let row = sqlx::query(&format!("SELECT {} FROM trips WHERE id = ?", TRIP_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(trip_from_row))
    }

    pub async fn create_trip(&self, new: &NewTrip) -> Result<Trip, AppError> {
        let id = new_document_id();

        sqlx::query(
            "INSERT INTO trips (id, date, stream_id, user_id, weather, description, fish, created_at) VALUES (?, ?, ?, ?, ?, ?, NULL, ?)"
        )
        .bind(&id)
        .bind(new.date.map(|d| d.timestamp_millis()))
        .bind(&new.stream_id)
        .bind(&new.user_id)
        .bind(&new.weather)
        .bind(&new.description)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        tracing::debug!(trip_id = %id, stream_id = ?new.stream_id, "Created trip");

        Ok(Trip {
            id,
            date: new.date,
            stream_id: new.stream_id.clone(),
            user_id: new.user_id.clone(),
            weather: new.weather.clone(),
            description: new.description.clone(),
            fish: None,
        })
    }
}

// ==================== ROW MAPPERS ====================

fn water_from_row(row: &sqlx::sqlite::SqliteRow) -> Water {
    Water {
        id: row.get("id"),
        name: row.get("name"),
        kind: row.get("type"),
    }
}

fn station_from_row(row: &sqlx::sqlite::SqliteRow) -> Station {
    Station {
        id: row.get("id"),
        name: row.get("name"),
        usgs_id: row.get("usgs_id"),
        longitude: row.get("longitude"),
        latitude: row.get("latitude"),
        water_id: row.get("water_id"),
    }
}

fn trip_from_row(row: &sqlx::sqlite::SqliteRow) -> Trip {
    let date_ms: Option<i64> = row.get("date");
    Trip {
        id: row.get("id"),
        date: date_ms.and_then(DateTime::<Utc>::from_timestamp_millis),
        stream_id: row.get("stream_id"),
        user_id: row.get("user_id"),
        weather: row.get("weather"),
        description: row.get("description"),
        fish: row.get("fish"),
    }
}
