//! Grouping dimensions.
//!
//! Each dimension is a pure key function over a record. The aggregator is
//! generic over [`Dimension`], so all four groupings share one summation path.

use crate::records::TransactionRecord;
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grouping axis
pub trait Dimension {
    /// Grouping key; its `Ord` is the tie-break order when ranking
    type Key: Ord + Clone + fmt::Debug;

    /// Short name used in logs
    const NAME: &'static str;

    fn key(&self, record: &TransactionRecord) -> Self::Key;
}

/// Calendar month bucket, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// English month name ("January")
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// The following calendar month
    pub fn succ(&self) -> Self {
        if self.month >= 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Number of months from `self` to `later`, negative if `later` is earlier
    pub fn months_until(&self, later: &MonthKey) -> i64 {
        (later.year as i64 - self.year as i64) * 12 + later.month as i64 - self.month as i64
    }

    /// Last day of the month, the label a month-end resample gives the bucket
    pub fn last_day(&self) -> Option<NaiveDate> {
        let next = self.succ();
        NaiveDate::from_ymd_opt(next.year, next.month, 1).and_then(|d| d.pred_opt())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn state_key(record: &TransactionRecord) -> String {
    record.state.clone()
}

pub fn month_key(record: &TransactionRecord) -> MonthKey {
    MonthKey::from_date(record.purchase_date)
}

pub fn category_key(record: &TransactionRecord) -> String {
    record.category.clone()
}

pub fn seller_key(record: &TransactionRecord) -> String {
    record.seller.clone()
}

/// Group by purchase state
#[derive(Debug, Clone, Copy, Default)]
pub struct ByState;

/// Group by (year, month) of the purchase date
#[derive(Debug, Clone, Copy, Default)]
pub struct ByMonth;

/// Group by product category
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCategory;

/// Group by seller
#[derive(Debug, Clone, Copy, Default)]
pub struct BySeller;

impl Dimension for ByState {
    type Key = String;
    const NAME: &'static str = "state";

    fn key(&self, record: &TransactionRecord) -> String {
        state_key(record)
    }
}

impl Dimension for ByMonth {
    type Key = MonthKey;
    const NAME: &'static str = "month";

    fn key(&self, record: &TransactionRecord) -> MonthKey {
        month_key(record)
    }
}

impl Dimension for ByCategory {
    type Key = String;
    const NAME: &'static str = "category";

    fn key(&self, record: &TransactionRecord) -> String {
        category_key(record)
    }
}

impl Dimension for BySeller {
    type Key = String;
    const NAME: &'static str = "seller";

    fn key(&self, record: &TransactionRecord) -> String {
        seller_key(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2023, 1),
            MonthKey::new(2022, 12),
            MonthKey::new(2022, 2),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![MonthKey::new(2022, 2), MonthKey::new(2022, 12), MonthKey::new(2023, 1)]
        );
    }

    #[test]
    fn test_month_name_and_display() {
        let key = MonthKey::new(2023, 2);
        assert_eq!(key.month_name(), "February");
        assert_eq!(key.to_string(), "2023-02");
        assert_eq!(MonthKey::new(2023, 13).month_name(), "Unknown");
    }

    #[test]
    fn test_succ_wraps_year() {
        assert_eq!(MonthKey::new(2022, 12).succ(), MonthKey::new(2023, 1));
        assert_eq!(MonthKey::new(2022, 5).succ(), MonthKey::new(2022, 6));
    }

    #[test]
    fn test_months_until() {
        assert_eq!(MonthKey::new(2022, 11).months_until(&MonthKey::new(2023, 2)), 3);
        assert_eq!(MonthKey::new(2023, 2).months_until(&MonthKey::new(2023, 2)), 0);
        assert_eq!(MonthKey::new(2023, 2).months_until(&MonthKey::new(2022, 2)), -12);
    }

    #[test]
    fn test_last_day() {
        assert_eq!(
            MonthKey::new(2024, 2).last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            MonthKey::new(2023, 12).last_day(),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }
}
