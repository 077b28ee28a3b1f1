//! REST API module.
//!
//! Aggregation routes over the USGS, weather, and geocoding providers. Bodies are
//! the reshaped provider payloads; failures use the [`AppError`] envelope.
//!
//! [`AppError`]: crate::errors::AppError

mod search;
mod water_data;

pub use search::*;
pub use water_data::*;

use axum::Json;

/// Handler result: a JSON body or an error envelope.
pub type ApiResult<T> = Result<Json<T>, crate::errors::AppError>;
