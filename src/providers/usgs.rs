//! USGS NWIS Instantaneous Values (IV) service.
//!
//! The IV service returns WaterML rendered as JSON:
//! `value.timeSeries[]`, one entry per (site, parameter) pair, each carrying
//! `sourceInfo` (site name, codes, location), `variable`, and `values[].value[]`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Providers;
use crate::errors::AppError;
use crate::geo::BoundingBox;

/// Trailing window requested for a single site.
pub const SITE_PERIOD: &str = "P3D";
/// Discharge, cubic feet per second.
pub const PARAM_DISCHARGE: &str = "00060";
/// Lakes and streams.
pub const COUNTY_SITE_TYPES: &str = "LK,ST";

// ---------------------------------------------------------------------------
// WaterML JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct IvResponse {
    pub value: IvValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IvValue {
    #[serde(rename = "timeSeries", default)]
    pub time_series: Vec<TimeSeries>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeries {
    #[serde(rename = "sourceInfo")]
    pub source_info: SourceInfo,
    #[serde(default)]
    pub variable: Option<Variable>,
    #[serde(default)]
    pub values: Vec<ValueBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceInfo {
    #[serde(rename = "siteName")]
    pub site_name: String,
    #[serde(rename = "siteCode", default)]
    pub site_code: Vec<Code>,
    #[serde(rename = "geoLocation", default)]
    pub geo_location: Option<GeoLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Code {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocation {
    #[serde(rename = "geogLocation")]
    pub geog_location: GeogLocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeogLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    #[serde(rename = "variableCode", default)]
    pub variable_code: Vec<Code>,
    #[serde(rename = "variableName", default)]
    pub variable_name: Option<String>,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(rename = "noDataValue", default)]
    pub no_data_value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Unit {
    #[serde(rename = "unitCode")]
    pub unit_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueBlock {
    #[serde(default)]
    pub value: Vec<ValueEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueEntry {
    /// USGS sends readings as strings
    pub value: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
}

// ---------------------------------------------------------------------------
// Client-facing shapes
// ---------------------------------------------------------------------------

/// One parameter's readings at a site, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesValues {
    pub parameter_code: Option<String>,
    pub variable_name: Option<String>,
    pub unit: Option<String>,
    pub values: Vec<Reading>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub date_time: String,
    pub value: f64,
}

/// Body of `GET /waterData/site/{siteId}`.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConditions {
    pub name: String,
    pub values: Vec<SeriesValues>,
}

/// One entry of `GET /waterData/county`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub site_id: Option<String>,
    pub site_name: String,
    pub site_long: Option<f64>,
    pub site_lat: Option<f64>,
}

// ---------------------------------------------------------------------------
// Pure transforms
// ---------------------------------------------------------------------------

/// Flatten each time series into its readings, dropping unparsable values and
/// the series' no-data sentinel.
pub fn normalize_series(series: &[TimeSeries]) -> Vec<SeriesValues> {
    series
        .iter()
        .map(|ts| {
            let variable = ts.variable.as_ref();
            let no_data = variable.and_then(|v| v.no_data_value);

            let values = ts
                .values
                .iter()
                .flat_map(|block| block.value.iter())
                .filter_map(|entry| {
                    let value: f64 = entry.value.trim().parse().ok()?;
                    if no_data.is_some_and(|nd| (value - nd).abs() < f64::EPSILON) {
                        return None;
                    }
                    Some(Reading {
                        date_time: entry.date_time.clone(),
                        value,
                    })
                })
                .collect();

            SeriesValues {
                parameter_code: variable
                    .and_then(|v| v.variable_code.first())
                    .map(|c| c.value.clone()),
                variable_name: variable.and_then(|v| v.variable_name.clone()),
                unit: variable
                    .and_then(|v| v.unit.as_ref())
                    .map(|u| u.unit_code.clone()),
                values,
            }
        })
        .collect()
}

/// Name plus normalized readings. `None` when USGS returned no series at all.
pub fn site_conditions(response: &IvResponse) -> Option<SiteConditions> {
    let first = response.value.time_series.first()?;
    Some(SiteConditions {
        name: first.source_info.site_name.clone(),
        values: normalize_series(&response.value.time_series),
    })
}

/// Keep the first series seen for each site name, preserving order.
pub fn dedup_by_site_name(series: Vec<TimeSeries>) -> Vec<TimeSeries> {
    let mut seen = HashSet::new();
    series
        .into_iter()
        .filter(|ts| seen.insert(ts.source_info.site_name.clone()))
        .collect()
}

pub fn site_summaries(series: &[TimeSeries]) -> Vec<SiteSummary> {
    series
        .iter()
        .map(|ts| {
            let location = ts.source_info.geo_location.as_ref().map(|g| &g.geog_location);
            SiteSummary {
                site_id: ts.source_info.site_code.first().map(|c| c.value.clone()),
                site_name: ts.source_info.site_name.clone(),
                site_long: location.map(|l| l.longitude),
                site_lat: location.map(|l| l.latitude),
            }
        })
        .collect()
}

/// The raw `value.timeSeries` array, passed through untouched.
pub fn raw_time_series(body: Value) -> Result<Value, AppError> {
    match body {
        Value::Object(mut root) => root
            .get_mut("value")
            .and_then(|v| v.get_mut("timeSeries"))
            .map(Value::take)
            .ok_or_else(|| AppError::Upstream("USGS response has no value.timeSeries".to_string())),
        _ => Err(AppError::Upstream("USGS response is not an object".to_string())),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

impl Providers {
    /// Active series for one site over the trailing three days.
    pub async fn site_series(&self, site_id: &str) -> Result<IvResponse, AppError> {
        self.iv_query(&[
            ("format", "json"),
            ("sites", site_id),
            ("siteStatus", "active"),
            ("period", SITE_PERIOD),
        ])
        .await
    }

    /// Active lake and stream sites in a county.
    pub async fn county_series(&self, county_code: &str) -> Result<IvResponse, AppError> {
        self.iv_query(&[
            ("format", "json"),
            ("countyCd", county_code),
            ("siteType", COUNTY_SITE_TYPES),
            ("siteStatus", "active"),
        ])
        .await
    }

    /// Discharge series for every site in the box, as USGS sent them.
    pub async fn sites_in_box(&self, bbox: &BoundingBox) -> Result<Value, AppError> {
        let body: Value = self
            .http
            .get(&self.usgs_iv_url)
            .query(&[
                ("format", "json"),
                ("bBox", bbox.to_usgs_param().as_str()),
                ("parameterCd", PARAM_DISCHARGE),
                ("siteStatus", "all"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        raw_time_series(body)
    }

    async fn iv_query(&self, params: &[(&str, &str)]) -> Result<IvResponse, AppError> {
        tracing::debug!(?params, "USGS IV request");
        let response = self
            .http
            .get(&self.usgs_iv_url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}
