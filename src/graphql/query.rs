use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use super::types::{Station, Trip, Water};
use crate::db::Repository;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn waters(&self, ctx: &Context<'_>) -> Result<Vec<Water>> {
        let repo = ctx.data::<Arc<Repository>>()?;
        Ok(repo.list_waters().await?.into_iter().map(Water::from).collect())
    }

    /// Null when the id is omitted or no water has it.
    async fn water(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Water>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = ctx.data::<Arc<Repository>>()?;
        Ok(repo.get_water(&id).await?.map(Water::from))
    }

    async fn stations(&self, ctx: &Context<'_>) -> Result<Vec<Station>> {
        let repo = ctx.data::<Arc<Repository>>()?;
        Ok(repo
            .list_stations()
            .await?
            .into_iter()
            .map(Station::from)
            .collect())
    }

    /// The first station recorded for a water. Use `Water.stations` for all of them.
    async fn station(&self, ctx: &Context<'_>, water_id: Option<ID>) -> Result<Option<Station>> {
        let Some(water_id) = water_id else {
            return Ok(None);
        };
        let repo = ctx.data::<Arc<Repository>>()?;
        Ok(repo.find_station_by_water(&water_id).await?.map(Station::from))
    }

    async fn trips(&self, ctx: &Context<'_>) -> Result<Vec<Trip>> {
        let repo = ctx.data::<Arc<Repository>>()?;
        Ok(repo.list_trips().await?.into_iter().map(Trip::from).collect())
    }

    async fn trip(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Trip>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let repo = ctx.data::<Arc<Repository>>()?;
        Ok(repo.get_trip(&id).await?.map(Trip::from))
    }
}
