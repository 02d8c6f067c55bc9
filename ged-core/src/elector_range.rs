//! Elector-count bins offered by the bar chart's range dropdown.
//!
//! Each bin has two string forms: a compact display label (`"200k-250k"`)
//! shown to the user, and a canonical value string (`"200001-250000"`)
//! carried as the dropdown option value and parsed back by the filter.

use crate::error::{GedError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An inclusive interval of total-elector counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ElectorRange {
    pub min: u64,
    pub max: u64,
}

/// The configured bins, in dropdown order. Bins are not checked for
/// overlaps or gaps.
pub const ELECTOR_RANGES: [ElectorRange; 7] = [
    ElectorRange::new(150_001, 200_000),
    ElectorRange::new(200_001, 250_000),
    ElectorRange::new(250_001, 300_000),
    ElectorRange::new(300_001, 350_000),
    ElectorRange::new(350_001, 400_000),
    ElectorRange::new(400_001, 450_000),
    ElectorRange::new(450_001, 500_000),
];

impl ElectorRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Compact label with both bounds integer-divided by 1000, e.g. `"300k-350k"`.
    pub fn display_label(&self) -> String {
        format!("{}k-{}k", self.min / 1000, self.max / 1000)
    }

    /// Canonical option value, e.g. `"300001-350000"`.
    pub fn value(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }

    pub fn contains(&self, total_electors: u64) -> bool {
        self.min <= total_electors && total_electors <= self.max
    }
}

impl fmt::Display for ElectorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for ElectorRange {
    type Err = GedError;

    /// Parse a `"MIN-MAX"` value string.
    ///
    /// The string must split on `-` into exactly two parts, each an unsigned
    /// integer (surrounding whitespace allowed). `min > max` is accepted and
    /// simply matches nothing.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(GedError::RangeFormat(s.to_string()));
        }
        let bound = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|source| GedError::RangeBound {
                    value: part.to_string(),
                    source,
                })
        };
        Ok(ElectorRange::new(bound(parts[0])?, bound(parts[1])?))
    }
}

/// Display labels for a list of ranges, in order.
pub fn range_labels(ranges: &[ElectorRange]) -> Vec<String> {
    ranges.iter().map(ElectorRange::display_label).collect()
}

/// Value strings for a list of ranges, in order.
pub fn range_values(ranges: &[ElectorRange]) -> Vec<String> {
    ranges.iter().map(ElectorRange::value).collect()
}
