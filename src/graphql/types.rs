//! GraphQL object types.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use super::scalars::Date;
use crate::db::Repository;
use crate::models;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Water {
    #[graphql(name = "_id")]
    pub id: ID,
    pub name: Option<String>,
    #[graphql(name = "type")]
    pub kind: Option<String>,
}

#[ComplexObject]
impl Water {
    /// Stations recorded on this water.
    async fn stations(&self, ctx: &Context<'_>) -> Result<Vec<Station>> {
        let repo = ctx.data::<Arc<Repository>>()?;
        let stations = repo.stations_for_water(&self.id).await?;
        Ok(stations.into_iter().map(Station::from).collect())
    }
}

impl From<models::Water> for Water {
    fn from(water: models::Water) -> Self {
        Self {
            id: ID(water.id),
            name: water.name,
            kind: water.kind,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Station {
    #[graphql(name = "_id")]
    pub id: ID,
    pub name: Option<String>,
    pub usgs_id: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub water_id: Option<ID>,
}

impl From<models::Station> for Station {
    fn from(station: models::Station) -> Self {
        Self {
            id: ID(station.id),
            name: station.name,
            usgs_id: station.usgs_id,
            longitude: station.longitude,
            latitude: station.latitude,
            water_id: station.water_id.map(ID),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Trip {
    #[graphql(name = "_id")]
    pub id: ID,
    pub date: Option<Date>,
    pub stream_id: Option<ID>,
    pub weather: Option<String>,
    pub description: Option<String>,
    pub fish: Option<String>,
}

impl From<models::Trip> for Trip {
    fn from(trip: models::Trip) -> Self {
        Self {
            id: ID(trip.id),
            date: trip.date.map(Date::from),
            stream_id: trip.stream_id.map(ID),
            weather: trip.weather,
            description: trip.description,
            fish: trip.fish,
        }
    }
}

/// A single catch. Part of the schema, not yet returned by any field.
#[derive(Debug, Clone, SimpleObject)]
pub struct Fish {
    #[graphql(name = "_id")]
    pub id: ID,
    pub species: Option<String>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub caught_on: Option<String>,
}
