//! Global average — mean temperature across every room plus the number of
//! distinct calendar days that have readings.

use serde::{Deserialize, Serialize};

/// Aggregate over all readings in the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalAverage {
    /// Mean temperature rounded to two decimals, `None` when no reading exists.
    pub average: Option<f64>,
    /// Count of distinct dates (time of day ignored).
    pub days: i64,
}

impl GlobalAverage {
    /// Build from the raw aggregates returned by the store, rounding the mean.
    #[must_use]
    pub fn from_raw(mean: Option<f64>, days: i64) -> Self {
        Self {
            average: mean.map(round_hundredths),
            days,
        }
    }

    /// The aggregate of an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            average: None,
            days: 0,
        }
    }
}

/// Two-decimal rounding with ties going to the even neighbour.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
