//! Transaction record definitions.
//!
//! Records are created once at ingestion and never mutated afterwards.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Monetary amount stored as integer cents.
///
/// Summing cents is exact and independent of input order, so grouped
/// totals always add back up to the grand total. Serialized as a decimal
/// number of currency units.
///
/// Single amounts are capped at [`Price::MAX`] at conversion time, which
/// keeps sums of any realistic batch far below `u64::MAX`. Addition
/// saturates rather than wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Largest single amount accepted from a decimal (one billion units)
    pub const MAX: Price = Price(100_000_000_000);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a decimal amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, NaN or infinite amounts and for
    /// amounts above [`Price::MAX`].
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > Self::MAX.0 as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::from_decimal(amount)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {}", amount)))
    }
}

/// Latitude/longitude pair used for map plotting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A single sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub price: Price,
    pub purchase_date: NaiveDate,
    /// State code where the purchase happened (e.g. "SP")
    pub state: String,
    pub category: String,
    pub seller: String,
    pub latitude: f64,
    pub longitude: f64,

    // Carried through from the source, unused by aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
}

impl TransactionRecord {
    /// Build a record with only the fields aggregation needs
    pub fn new(
        price: Price,
        purchase_date: NaiveDate,
        state: impl Into<String>,
        category: impl Into<String>,
        seller: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            price,
            purchase_date,
            state: state.into(),
            category: category.into(),
            seller: seller.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            product: None,
            freight: None,
            rating: None,
            payment_type: None,
            installments: None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn year(&self) -> i32 {
        self.purchase_date.year()
    }
}
