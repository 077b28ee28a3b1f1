//! OpenWeather One Call: current conditions and forecast, imperial units.

use serde_json::Value;

use super::Providers;
use crate::errors::AppError;

impl Providers {
    /// Current weather and forecast for a point. The body is passed through as-is.
    pub async fn weather(&self, latitude: f64, longitude: f64) -> Result<Value, AppError> {
        let mut params = vec![
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("exclude", "minutely".to_string()),
            ("units", "imperial".to_string()),
        ];
        if let Some(key) = &self.weather_api_key {
            params.push(("appid", key.clone()));
        }

        let body = self
            .http
            .get(&self.weather_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body)
    }
}
