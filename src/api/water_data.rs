//! USGS water-data endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiResult;
use crate::errors::AppError;
use crate::providers::usgs::{self, SiteConditions, SiteSummary};
use crate::AppState;

/// GET /waterData/site/:siteId - Name and readings for one site, last three days.
pub async fn site_conditions(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> ApiResult<SiteConditions> {
    let response = state.providers.site_series(&site_id).await?;

    usgs::site_conditions(&response)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No active series for site {}", site_id)))
}

/// County query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyQuery {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub county_name: String,
}

/// GET /waterData/county - Lake and stream sites in a county, one per site name.
///
/// An unknown county is not an error: the body is `null`.
pub async fn county_sites(
    State(state): State<AppState>,
    Query(params): Query<CountyQuery>,
) -> ApiResult<Option<Vec<SiteSummary>>> {
    let Some(county_code) = state.fips.county_code(&params.state, &params.county_name) else {
        tracing::info!(
            state = %params.state,
            county = %params.county_name,
            "No FIPS code for county"
        );
        return Ok(Json(None));
    };
    tracing::debug!(%county_code, "Resolved county");

    let response = state.providers.county_series(county_code).await?;
    let sites = usgs::dedup_by_site_name(response.value.time_series);

    Ok(Json(Some(usgs::site_summaries(&sites))))
}
