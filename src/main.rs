//! Creel backend
//!
//! GraphQL over the fishing log (waters, stations, trips) plus REST routes that
//! combine USGS stream data, weather, and geocoding for the client.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod fips;
mod geo;
mod graphql;
mod models;
mod providers;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use fips::FipsTable;
use graphql::CreelSchema;
use providers::Providers;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub providers: Arc<Providers>,
    pub fips: Arc<FipsTable>,
    pub schema: CreelSchema,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        repo: Arc<Repository>,
        fips: FipsTable,
        config: Config,
    ) -> Result<Self, errors::AppError> {
        let providers = Providers::from_config(&config)?;
        Ok(Self {
            schema: graphql::build_schema(repo),
            providers: Arc::new(providers),
            fips: Arc::new(fips),
            config: Arc::new(config),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Creel backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (CREEL_API_PSK). Authentication is disabled!");
    }
    if config.geo_api_key.is_none() {
        tracing::warn!("GEO_API_KEY is not set; ZIP searches will be rejected by the geocoder");
    }
    if config.weather_api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY is not set; weather lookups will fail");
    }

    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    let fips = match &config.fips_path {
        Some(path) => FipsTable::load(path).await?,
        None => FipsTable::embedded()?,
    };
    tracing::info!("FIPS table loaded with {} counties", fips.county_count());

    let bind_addr = config.bind_addr;
    let state = AppState::new(repo, fips, config)?;

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        // GraphQL
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        // USGS water data
        .route("/waterData/site/{site_id}", get(api::site_conditions))
        .route("/waterData/county", get(api::county_sites))
        // Location search
        .route("/search/zip", post(api::search_zip))
        .route("/search/coords", post(api::search_coords))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
