//! Request-scoped computation context.
//!
//! Each selection (region, year, sellers) gets its own filtered copy of
//! the records, so concurrent sessions never share derived state.

use super::assemble::{assemble_views, DashboardViews};
use crate::records::{FilterCriteria, RecordStore, RegionTable};
use log::info;

/// Filtered records for one request
#[derive(Debug, Clone)]
pub struct SalesContext {
    criteria: FilterCriteria,
    records: RecordStore,
}

impl SalesContext {
    /// Filter `source` by `criteria` into a fresh context
    pub fn new(source: &RecordStore, criteria: FilterCriteria, regions: &RegionTable) -> Self {
        let records = source.apply(&criteria, regions);
        info!(
            "Selection kept {} of {} records",
            records.len(),
            source.len()
        );
        Self { criteria, records }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Compute every dashboard table for this selection
    pub fn views(&self) -> DashboardViews {
        assemble_views(self.records.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Coordinates, Price, TransactionRecord};
    use chrono::NaiveDate;

    fn store() -> RecordStore {
        let make = |state: &str, seller: &str| {
            TransactionRecord::new(
                Price::from_cents(1000),
                NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
                state,
                "cat",
                seller,
                Coordinates::new(0.0, 0.0),
            )
        };
        RecordStore::new(vec![make("SP", "A"), make("PR", "B"), make("BA", "A")])
    }

    #[test]
    fn test_contexts_are_independent() {
        let source = store();
        let regions = RegionTable::brazil();

        let south = SalesContext::new(&source, FilterCriteria::new().with_region("Sul"), &regions);
        let all = SalesContext::new(&source, FilterCriteria::new(), &regions);

        assert_eq!(south.views().totals.sales, 1);
        assert_eq!(all.views().totals.sales, 3);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_seller_selection() {
        let context = SalesContext::new(
            &store(),
            FilterCriteria::new().with_sellers(["A"]),
            &RegionTable::brazil(),
        );
        let views = context.views();
        assert_eq!(views.sellers.len(), 1);
        assert_eq!(views.sellers[0].metrics.count, 2);
    }
}
