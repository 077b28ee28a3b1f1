//! Configuration module for the Creel backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_USGS_IV_URL: &str = "http://waterservices.usgs.gov/nwis/iv/";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";
pub const DEFAULT_GEOCODE_URL: &str = "http://api.positionstack.com/v1/forward";

/// Half-width of the station search box, in degrees.
pub const DEFAULT_BBOX_OFFSET: f64 = 0.25;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (required in production)
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// positionstack access key
    pub geo_api_key: Option<String>,
    /// OpenWeather appid
    pub weather_api_key: Option<String>,
    /// USGS instantaneous values endpoint
    pub usgs_iv_url: String,
    pub weather_url: String,
    pub geocode_url: String,
    /// Degrees added to / subtracted from a coordinate to build the station search box
    pub bbox_offset: f64,
    /// Optional replacement for the embedded FIPS table
    pub fips_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("CREEL_API_PSK").ok();

        let db_path = env::var("CREEL_DB_PATH")
            .unwrap_or_else(|_| "./data/creel.sqlite".to_string())
            .into();

        let bind_addr = env::var("CREEL_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid CREEL_BIND_ADDR: {}", e)))?;

        let log_level = env::var("CREEL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let bbox_offset = match env::var("CREEL_BBOX_OFFSET") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::Internal(format!("Invalid CREEL_BBOX_OFFSET: {}", e)))?,
            Err(_) => DEFAULT_BBOX_OFFSET,
        };

        Ok(Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            geo_api_key: env::var("GEO_API_KEY").ok(),
            weather_api_key: env::var("WEATHER_API_KEY").ok(),
            usgs_iv_url: env::var("CREEL_USGS_IV_URL")
                .unwrap_or_else(|_| DEFAULT_USGS_IV_URL.to_string()),
            weather_url: env::var("CREEL_WEATHER_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string()),
            geocode_url: env::var("CREEL_GEOCODE_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODE_URL.to_string()),
            bbox_offset,
            fips_path: env::var("CREEL_FIPS_PATH").ok().map(PathBuf::from),
        })
    }
}
