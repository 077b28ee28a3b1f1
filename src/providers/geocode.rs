//! positionstack forward geocoding, used to turn a ZIP code into a point.

use serde::Serialize;
use serde_json::Value;

use super::Providers;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// First candidate in `data[]` that carries both coordinates.
pub fn first_match(body: &Value) -> Option<Coordinates> {
    body.get("data")?.as_array()?.iter().find_map(|candidate| {
        Some(Coordinates {
            latitude: candidate.get("latitude")?.as_f64()?,
            longitude: candidate.get("longitude")?.as_f64()?,
        })
    })
}

impl Providers {
    /// Resolve free text (a ZIP code) to a point. `None` when nothing matched.
    pub async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, AppError> {
        let mut params = vec![("query", query)];
        if let Some(key) = &self.geo_api_key {
            params.push(("access_key", key.as_str()));
        }

        let body: Value = self
            .http
            .get(&self.geocode_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(first_match(&body))
    }
}
