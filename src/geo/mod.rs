//! Coordinates and bounding boxes for nearby-station searches.

use serde_json::Value;

/// Read a coordinate given either as a JSON number or as a numeric string.
pub fn coerce_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_coordinate(s),
        _ => None,
    }
}

/// Parse a textual coordinate such as `"-83.0035"`. Non-finite values are rejected.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A rectangular region in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Square box extending `offset` degrees in every direction from the point.
    pub fn around(latitude: f64, longitude: f64, offset: f64) -> Self {
        Self {
            west: longitude - offset,
            east: longitude + offset,
            north: latitude + offset,
            south: latitude - offset,
        }
    }

    /// `west,south,east,north`, the order the USGS `bBox` parameter expects.
    /// USGS rejects more than seven decimal places.
    pub fn to_usgs_param(&self) -> String {
        format!(
            "{:.6},{:.6},{:.6},{:.6}",
            self.west, self.south, self.east, self.north
        )
    }
}
