//! Core types for the electoral demographics dashboard.
//!
//! - `constituency`: the constituency record, CSV projection and the embedded sample
//! - `elector_range`: elector-count bins and their label/value strings
//! - `fetch`: remote CSV download (requires the `api` feature)
//!
//! ```rust
//! use ged_core::constituency::sample_constituencies;
//! use ged_core::elector_range::ElectorRange;
//!
//! let sample = sample_constituencies().unwrap();
//! let range: ElectorRange = "200001-250000".parse().unwrap();
//! assert_eq!(sample.iter().filter(|r| range.contains(r.total_electors)).count(), 7);
//! ```

pub mod constituency;
pub mod elector_range;
pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
