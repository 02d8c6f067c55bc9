//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod elector_range_selector;
mod error_display;
mod loading_spinner;
mod population_selector;
mod tab_bar;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use elector_range_selector::ElectorRangeSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use population_selector::PopulationSelector;
pub use tab_bar::TabBar;
