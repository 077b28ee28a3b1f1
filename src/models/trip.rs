//! Trip model: one logged fishing outing.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Trip {
    pub id: String,
    pub date: Option<DateTime<Utc>>,
    /// Station the trip was fished from
    pub stream_id: Option<String>,
    pub user_id: Option<String>,
    pub weather: Option<String>,
    pub description: Option<String>,
    /// Free-text catch summary
    pub fish: Option<String>,
}

/// Fields accepted by `createTrip`.
#[derive(Debug, Clone, Default)]
pub struct NewTrip {
    pub date: Option<DateTime<Utc>>,
    pub stream_id: Option<String>,
    pub user_id: Option<String>,
    pub weather: Option<String>,
    pub description: Option<String>,
}
