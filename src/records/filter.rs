//! Filter criteria applied before aggregation.
//!
//! Region, year and seller constraints are conjunctive. An empty constraint
//! keeps everything; a constraint that matches nothing yields an empty set.

use super::regions::RegionTable;
use super::schema::TransactionRecord;
use crate::utils::config::ALL_REGIONS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One request's selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Region name, `None` for every state
    pub region: Option<String>,

    /// Purchase year, `None` for the whole period
    pub year: Option<i32>,

    /// Sellers to keep, empty for all sellers
    #[serde(default)]
    pub sellers: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a region. Blank names and "Brasil" mean every state.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        let region = region.trim();
        self.region = if region.is_empty() || region.eq_ignore_ascii_case(ALL_REGIONS) {
            None
        } else {
            Some(region.to_string())
        };
        self
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn with_sellers<S: Into<String>>(mut self, sellers: impl IntoIterator<Item = S>) -> Self {
        self.sellers = sellers.into_iter().map(Into::into).collect();
        self
    }

    /// True when no constraint is set
    pub fn is_unrestricted(&self) -> bool {
        self.region.is_none() && self.year.is_none() && self.sellers.is_empty()
    }

    pub fn matches(&self, record: &TransactionRecord, regions: &RegionTable) -> bool {
        let region_ok = self
            .region
            .as_deref()
            .map_or(true, |region| regions.contains(region, &record.state));
        let year_ok = self.year.map_or(true, |year| record.year() == year);
        let seller_ok = self.sellers.is_empty() || self.sellers.contains(&record.seller);

        region_ok && year_ok && seller_ok
    }
}

/// Keep the records matching `criteria`, preserving their order
pub fn filter_records(
    records: &[TransactionRecord],
    criteria: &FilterCriteria,
    regions: &RegionTable,
) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r, regions))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::schema::{Coordinates, Price};
    use chrono::NaiveDate;

    fn record(state: &str, year: i32, seller: &str) -> TransactionRecord {
        TransactionRecord::new(
            Price::from_cents(100),
            NaiveDate::from_ymd_opt(year, 5, 1).unwrap(),
            state,
            "cat",
            seller,
            Coordinates::new(0.0, 0.0),
        )
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            record("SP", 2020, "Ana"),
            record("BA", 2021, "Bruno"),
            record("RS", 2020, "Ana"),
            record("RJ", 2022, "Carla"),
        ]
    }

    #[test]
    fn test_unrestricted_keeps_all() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unrestricted());
        assert_eq!(filter_records(&sample(), &criteria, &RegionTable::brazil()).len(), 4);
    }

    #[test]
    fn test_region_filter() {
        let criteria = FilterCriteria::new().with_region("Sudeste");
        let kept = filter_records(&sample(), &criteria, &RegionTable::brazil());
        let states: Vec<&str> = kept.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, vec!["SP", "RJ"]);
    }

    #[test]
    fn test_all_regions_aliases() {
        assert_eq!(FilterCriteria::new().with_region("Brasil").region, None);
        assert_eq!(FilterCriteria::new().with_region("  ").region, None);
        assert_eq!(
            FilterCriteria::new().with_region("Sul").region,
            Some("Sul".to_string())
        );
    }

    #[test]
    fn test_year_and_seller_are_conjunctive() {
        let criteria = FilterCriteria::new()
            .with_year(Some(2020))
            .with_sellers(["Ana"]);
        let kept = filter_records(&sample(), &criteria, &RegionTable::brazil());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.seller == "Ana" && r.year() == 2020));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let criteria = FilterCriteria::new().with_region("Atlantis");
        assert!(filter_records(&sample(), &criteria, &RegionTable::brazil()).is_empty());

        let criteria = FilterCriteria::new().with_year(Some(1999));
        assert!(filter_records(&sample(), &criteria, &RegionTable::brazil()).is_empty());
    }
}
