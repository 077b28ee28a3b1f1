//! Location search: weather plus nearby stations.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use super::ApiResult;
use crate::errors::AppError;
use crate::geo::coerce_coordinate;
use crate::providers::Conditions;
use crate::AppState;

/// `{ "search": { ... } }` request envelope.
#[derive(Debug, Deserialize)]
pub struct SearchRequest<T> {
    pub search: T,
}

#[derive(Debug, Deserialize)]
pub struct ZipSearch {
    #[serde(default)]
    pub zip: Value,
}

#[derive(Debug, Deserialize)]
pub struct CoordsSearch {
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lon: Value,
}

/// ZIP codes arrive as strings or bare numbers.
fn zip_text(zip: &Value) -> Option<String> {
    let text = match zip {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// POST /search/zip - Geocode a ZIP code, then fetch conditions there.
pub async fn search_zip(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest<ZipSearch>>,
) -> ApiResult<Conditions> {
    let zip = zip_text(&request.search.zip)
        .ok_or_else(|| AppError::Validation("search.zip is required".to_string()))?;

    let point = state
        .providers
        .geocode(&zip)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No coordinates for ZIP {}", zip)))?;
    tracing::debug!(%zip, latitude = point.latitude, longitude = point.longitude, "Geocoded ZIP");

    let conditions = state
        .providers
        .conditions_at(point.latitude, point.longitude)
        .await?;
    Ok(Json(conditions))
}

/// POST /search/coords - Conditions at client-supplied coordinates.
pub async fn search_coords(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest<CoordsSearch>>,
) -> ApiResult<Conditions> {
    let lat = coerce_coordinate(&request.search.lat)
        .ok_or_else(|| AppError::Validation("search.lat must be a number".to_string()))?;
    let lon = coerce_coordinate(&request.search.lon)
        .ok_or_else(|| AppError::Validation("search.lon must be a number".to_string()))?;

    let conditions = state.providers.conditions_at(lat, lon).await?;
    Ok(Json(conditions))
}
