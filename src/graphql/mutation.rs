use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use super::scalars::{Coordinate, Date};
use super::types::{Station, Trip, Water};
use crate::db::Repository;
use crate::models::{NewStation, NewTrip, NewWater};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_water(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        #[graphql(name = "type")] kind: Option<String>,
    ) -> Result<Water> {
        let repo = ctx.data::<Arc<Repository>>()?;
        let water = repo.create_water(&NewWater { name, kind }).await?;
        Ok(Water::from(water))
    }

    /// Coordinates may be sent as numbers or numeric strings; they are stored as numbers.
    async fn create_station(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        usgs_id: Option<String>,
        #[graphql(desc = "Decimal degrees, number or numeric string")] longitude: Option<Coordinate>,
        #[graphql(desc = "Decimal degrees, number or numeric string")] latitude: Option<Coordinate>,
        water_id: Option<ID>,
    ) -> Result<Station> {
        let repo = ctx.data::<Arc<Repository>>()?;
        let station = repo
            .create_station(&NewStation {
                name,
                usgs_id,
                longitude: longitude.map(|c| c.0),
                latitude: latitude.map(|c| c.0),
                water_id: water_id.map(|id| id.0),
            })
            .await?;
        Ok(Station::from(station))
    }

    async fn create_trip(
        &self,
        ctx: &Context<'_>,
        date: Option<Date>,
        weather: Option<String>,
        description: Option<String>,
        stream_id: Option<ID>,
        user_id: Option<ID>,
    ) -> Result<Trip> {
        let repo = ctx.data::<Arc<Repository>>()?;
        let trip = repo
            .create_trip(&NewTrip {
                date: date.and_then(|d| d.0),
                stream_id: stream_id.map(|id| id.0),
                user_id: user_id.map(|id| id.0),
                weather,
                description,
            })
            .await?;
        Ok(Trip::from(trip))
    }
}
