//! Attach map coordinates to per-state aggregates.
//!
//! Coordinates come from the first record seen for each state. Records of
//! one state are expected to agree; when they do not, the first pair still
//! wins and the disagreement is logged.

use super::group::AggregateRow;
use super::metrics::Metrics;
use crate::records::{Coordinates, TransactionRecord};
use crate::utils::error::GeoError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// A state aggregate with the coordinates to plot it at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoTaggedRow {
    pub state: String,

    #[serde(flatten)]
    pub coordinates: Coordinates,

    #[serde(flatten)]
    pub metrics: Metrics,
}

impl GeoTaggedRow {
    /// Drop the coordinates again
    pub fn to_aggregate(&self) -> AggregateRow<String> {
        AggregateRow::new(self.state.clone(), self.metrics)
    }
}

/// Result of a geo join
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoAttachment {
    /// Tagged rows, in the order of the input aggregates
    pub rows: Vec<GeoTaggedRow>,

    /// States for which no record carried coordinates
    pub missing: Vec<GeoError>,
}

/// First coordinates seen per state
pub fn first_coordinates<'a>(
    records: impl IntoIterator<Item = &'a TransactionRecord>,
) -> HashMap<&'a str, Coordinates> {
    let mut first: HashMap<&str, Coordinates> = HashMap::new();
    let mut conflicting: BTreeMap<&str, usize> = BTreeMap::new();

    for record in records {
        let coordinates = record.coordinates();
        match first.entry(record.state.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(coordinates);
            }
            Entry::Occupied(slot) if *slot.get() != coordinates => {
                *conflicting.entry(record.state.as_str()).or_insert(0) += 1;
            }
            Entry::Occupied(_) => {}
        }
    }

    for (state, count) in conflicting {
        warn!(
            "State {} has {} record(s) with coordinates differing from the first seen; keeping the first",
            state, count
        );
    }

    first
}

/// Join coordinates onto state aggregates
///
/// Rows whose state has no record in `records` are left out and reported
/// as `GeoError::MissingGeoData`; the rest of the join still succeeds.
pub fn attach_geo<'a>(
    state_aggregates: &[AggregateRow<String>],
    records: impl IntoIterator<Item = &'a TransactionRecord>,
) -> GeoAttachment {
    let lookup = first_coordinates(records);
    let mut attachment = GeoAttachment::default();

    for row in state_aggregates {
        match lookup.get(row.key.as_str()) {
            Some(coordinates) => attachment.rows.push(GeoTaggedRow {
                state: row.key.clone(),
                coordinates: *coordinates,
                metrics: row.metrics,
            }),
            None => {
                let error = GeoError::MissingGeoData(row.key.clone());
                warn!("{}", error);
                attachment.missing.push(error);
            }
        }
    }

    debug!(
        "Geo-tagged {} states ({} missing)",
        attachment.rows.len(),
        attachment.missing.len()
    );

    attachment
}
