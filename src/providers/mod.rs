//! Clients for the three upstream JSON providers.
//!
//! Each provider module separates the HTTP call from a pure transform of the
//! response, so the reshaping can be tested without the network.

pub mod geocode;
pub mod usgs;
pub mod weather;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::errors::AppError;
use crate::geo::BoundingBox;

/// Endpoints, keys, and the shared HTTP client.
#[derive(Debug, Clone)]
pub struct Providers {
    http: Client,
    usgs_iv_url: String,
    weather_url: String,
    geocode_url: String,
    weather_api_key: Option<String>,
    geo_api_key: Option<String>,
    bbox_offset: f64,
}

/// Weather plus nearby stations for one point.
#[derive(Debug, Clone, Serialize)]
pub struct Conditions {
    pub weather: Value,
    pub sites: Value,
}

impl Providers {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(concat!("creel-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            usgs_iv_url: config.usgs_iv_url.clone(),
            weather_url: config.weather_url.clone(),
            geocode_url: config.geocode_url.clone(),
            weather_api_key: config.weather_api_key.clone(),
            geo_api_key: config.geo_api_key.clone(),
            bbox_offset: config.bbox_offset,
        })
    }

    /// Weather and nearby stations, fetched concurrently. Either failure fails the whole call.
    pub async fn conditions_at(&self, latitude: f64, longitude: f64) -> Result<Conditions, AppError> {
        let bbox = BoundingBox::around(latitude, longitude, self.bbox_offset);
        let (weather, sites) = tokio::try_join!(
            self.weather(latitude, longitude),
            self.sites_in_box(&bbox)
        )?;
        Ok(Conditions { weather, sites })
    }
}
