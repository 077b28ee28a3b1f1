//! County FIPS lookup.
//!
//! Maps a state abbreviation plus county name to the five-digit county code the
//! USGS `countyCd` filter expects.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::errors::AppError;

const EMBEDDED_TABLE: &str = include_str!("../../data/fips_by_state.json");

/// State abbreviation -> (county name -> county code).
#[derive(Debug, Clone, Default)]
pub struct FipsTable {
    states: HashMap<String, BTreeMap<String, String>>,
}

impl FipsTable {
    /// The table shipped with the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_TABLE)
    }

    /// Load a replacement table, same shape as the embedded one.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("Cannot read FIPS table {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let parsed: HashMap<String, BTreeMap<String, String>> = serde_json::from_str(raw)
            .map_err(|e| AppError::Internal(format!("Malformed FIPS table: {}", e)))?;

        let states = parsed
            .into_iter()
            .map(|(abbrev, counties)| (abbrev.to_ascii_uppercase(), counties))
            .collect();

        Ok(Self { states })
    }

    pub fn county_count(&self) -> usize {
        self.states.values().map(BTreeMap::len).sum()
    }

    /// Resolve a county code.
    ///
    /// An exact name ("Franklin" or "Franklin County") wins; otherwise the first
    /// county whose name contains `county_name` is used.
    pub fn county_code(&self, state: &str, county_name: &str) -> Option<&str> {
        let county_name = county_name.trim();
        if county_name.is_empty() {
            return None;
        }
        let counties = self.states.get(&state.trim().to_ascii_uppercase())?;

        let suffixed = format!("{} County", county_name);
        counties
            .iter()
            .find(|(name, _)| {
                name.eq_ignore_ascii_case(county_name) || name.eq_ignore_ascii_case(&suffixed)
            })
            .or_else(|| counties.iter().find(|(name, _)| name.contains(county_name)))
            .map(|(_, code)| code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_franklin_county_ohio() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.county_code("OH", "Franklin"), Some("39049"));
        assert_eq!(table.county_code("OH", "Franklin County"), Some("39049"));
        assert_eq!(table.county_code("oh", "franklin"), Some("39049"));
    }

    #[test]
    fn test_same_county_name_in_different_states() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.county_code("VT", "Franklin"), Some("50011"));
        assert_eq!(table.county_code("MA", "Franklin"), Some("25011"));
    }

    #[test]
    fn test_every_embedded_county_resolves() {
        let parsed: HashMap<String, BTreeMap<String, String>> =
            serde_json::from_str(EMBEDDED_TABLE).unwrap();
        let table = FipsTable::embedded().unwrap();

        for (state, counties) in &parsed {
            for (name, code) in counties {
                assert_eq!(table.county_code(state, name), Some(code.as_str()));
                assert_eq!(code.len(), 5, "{} {}", state, name);
            }
        }
        assert_eq!(table.county_count(), parsed.values().map(BTreeMap::len).sum::<usize>());
    }

    #[test]
    fn test_large_states_resolve() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.county_code("CA", "Los Angeles"), Some("06037"));
        assert_eq!(table.county_code("TX", "Travis"), Some("48453"));
        assert_eq!(table.county_code("TX", "Harris County"), Some("48201"));
        assert_eq!(table.county_code("PA", "Allegheny"), Some("42003"));
        assert_eq!(table.county_code("NY", "Kings"), Some("36047"));
    }

    #[test]
    fn test_parishes_boroughs_and_independent_cities() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.county_code("LA", "Orleans"), Some("22071"));
        assert_eq!(table.county_code("AK", "Anchorage"), Some("02020"));
        assert_eq!(table.county_code("VA", "Richmond"), Some("51159"));
        assert_eq!(table.county_code("VA", "Richmond city"), Some("51760"));
        assert_eq!(table.county_code("MO", "St. Louis city"), Some("29510"));
        assert_eq!(table.county_code("FL", "Miami-Dade"), Some("12086"));
    }

    #[test]
    fn test_table_covers_every_state() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.states.len(), 51);
        assert!(table.county_count() > 3100);
    }

    #[test]
    fn test_partial_name_falls_back_to_containment() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.county_code("OH", "Cuyahoga Co"), Some("39035"));
        assert_eq!(table.county_code("OH", "Wert"), Some("39161"));
    }

    #[test]
    fn test_misses() {
        let table = FipsTable::embedded().unwrap();
        assert_eq!(table.county_code("OH", "Atlantis"), None);
        assert_eq!(table.county_code("ZZ", "Franklin"), None);
        assert_eq!(table.county_code("OH", "  "), None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(FipsTable::from_json("[1, 2, 3]").is_err());
    }
}
