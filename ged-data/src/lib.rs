//! Derived views over constituency data.
//!
//! This crate turns loaded records into what the dashboard shows:
//! - `table`: sort by total electors and filter by elector range
//! - `figure`: bar, box and pie figures serialized for the D3.js renderers
//! - `options`: dropdown and radio option lists
//! - `dashboard`: immutable app data, widget callbacks and the event dispatcher
//!
//! ```rust
//! use ged_core::constituency::sample_constituencies;
//! use ged_data::dashboard::{AppData, Dashboard, WidgetEvent};
//!
//! let sample = sample_constituencies().unwrap();
//! let dashboard = Dashboard::new(AppData::new(sample.clone(), sample));
//! let update = dashboard
//!     .dispatch(&WidgetEvent::ElectorRangeSelected("200001-250000".to_string()))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(update.figure.points.len(), 7);
//! ```

pub mod dashboard;
pub mod figure;
pub mod options;
pub mod table;
