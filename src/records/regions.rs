//! Region to state lookup table.
//!
//! Defaults to the Brazilian macro-regions. A replacement table can be
//! loaded from TOML:
//!
//! ```toml
//! [regions]
//! Sudeste = ["ES", "MG", "RJ", "SP"]
//! Sul = ["PR", "RS", "SC"]
//! ```

use crate::utils::error::RegionError;
use log::debug;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

const BRAZIL: &[(&str, &[&str])] = &[
    ("Centro-Oeste", &["DF", "GO", "MS", "MT"]),
    ("Nordeste", &["AL", "BA", "CE", "MA", "PB", "PE", "PI", "RN", "SE"]),
    ("Norte", &["AC", "AM", "AP", "PA", "RO", "RR", "TO"]),
    ("Sudeste", &["ES", "MG", "RJ", "SP"]),
    ("Sul", &["PR", "RS", "SC"]),
];

#[derive(Debug, Deserialize)]
struct RegionFile {
    regions: BTreeMap<String, Vec<String>>,
}

/// Maps region names to the states they contain
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    // Keyed by lowercased name; value keeps the display name
    regions: BTreeMap<String, (String, BTreeSet<String>)>,
}

impl RegionTable {
    /// Build a table from (region, states) pairs
    pub fn new<N, S, I>(regions: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let regions = regions
            .into_iter()
            .map(|(name, states)| {
                let name = name.into();
                let states = states.into_iter().map(Into::into).collect();
                (name.to_lowercase(), (name, states))
            })
            .collect();
        Self { regions }
    }

    /// Brazilian macro-regions
    pub fn brazil() -> Self {
        Self::new(BRAZIL.iter().map(|(name, states)| (*name, states.iter().copied())))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RegionError> {
        let file: RegionFile = toml::from_str(content)?;
        if file.regions.is_empty() {
            return Err(RegionError::Empty);
        }
        Ok(Self::new(file.regions))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegionError> {
        let path = path.as_ref();
        debug!("Loading region table from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// States of a region, matched case-insensitively
    pub fn states_of(&self, region: &str) -> Option<&BTreeSet<String>> {
        self.regions
            .get(&region.to_lowercase())
            .map(|(_, states)| states)
    }

    /// Whether `state` belongs to `region`. Unknown regions contain nothing.
    pub fn contains(&self, region: &str, state: &str) -> bool {
        self.states_of(region)
            .is_some_and(|states| states.contains(state))
    }

    /// Region display name a state belongs to
    pub fn region_of(&self, state: &str) -> Option<&str> {
        self.regions
            .values()
            .find(|(_, states)| states.contains(state))
            .map(|(name, _)| name.as_str())
    }

    /// Region display names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        self.regions.values().map(|(name, _)| name.as_str()).collect()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::brazil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brazil_regions() {
        let table = RegionTable::brazil();
        assert!(table.contains("Sudeste", "SP"));
        assert!(table.contains("sudeste", "RJ"));
        assert!(!table.contains("Sul", "SP"));
        assert_eq!(table.region_of("BA"), Some("Nordeste"));
        assert_eq!(table.names().len(), 5);
    }

    #[test]
    fn test_unknown_region_contains_nothing() {
        let table = RegionTable::brazil();
        assert!(table.states_of("Atlantis").is_none());
        assert!(!table.contains("Atlantis", "SP"));
    }

    #[test]
    fn test_from_toml() {
        let table = RegionTable::from_toml_str(
            r#"
            [regions]
            Coast = ["RJ", "BA"]
            "#,
        )
        .unwrap();
        assert!(table.contains("coast", "BA"));
        assert_eq!(table.names(), vec!["Coast"]);
    }

    #[test]
    fn test_empty_toml_table() {
        let result = RegionTable::from_toml_str("[regions]\n");
        assert!(matches!(result, Err(RegionError::Empty)));
    }

    #[test]
    fn test_invalid_toml() {
        let result = RegionTable::from_toml_str("regions = 3");
        assert!(matches!(result, Err(RegionError::ParseFailed(_))));
    }
}
