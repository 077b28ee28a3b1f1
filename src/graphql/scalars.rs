//! Custom scalars.

use async_graphql::{InputValueError, InputValueResult, Number, Scalar, ScalarType, Value};
use chrono::{DateTime, Utc};

use crate::geo::parse_coordinate;

/// A point in time carried as epoch milliseconds.
///
/// Only integer input is understood. Anything else parses to an empty date,
/// which the store keeps as null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub Option<DateTime<Utc>>);

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        let parsed = match &value {
            Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        };
        Ok(Date(parsed))
    }

    fn to_value(&self) -> Value {
        match self.0 {
            Some(date) => Value::Number(date.timestamp_millis().into()),
            None => Value::Null,
        }
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(date: DateTime<Utc>) -> Self {
        Date(Some(date))
    }
}

/// Longitude or latitude in decimal degrees, accepted as a number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate(pub f64);

/// Decimal degrees. Input may be a number or a numeric string such as "-83.0035";
/// output is always a number.
#[Scalar(name = "Coordinate")]
impl ScalarType for Coordinate {
    fn parse(value: Value) -> InputValueResult<Self> {
        let parsed = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_coordinate(s),
            _ => None,
        };
        parsed
            .map(Coordinate)
            .ok_or_else(|| InputValueError::expected_type(value))
    }

    fn to_value(&self) -> Value {
        Number::from_f64(self.0)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
