//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Widget values live here; the figures they select are computed by the
//! `Dashboard` dispatcher.

use ged_data::dashboard::{default_range_value, Dashboard, DEFAULT_POPULATION};
use dioxus::prelude::*;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    BarChart,
    BoxPlot,
    Population,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::BarChart, Tab::BoxPlot, Tab::Population];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::BarChart => "Bar Chart",
            Tab::BoxPlot => "Box Plot",
            Tab::Population => "Population",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dispatcher over the loaded data (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the startup fetch is still running
    pub loading: Signal<bool>,
    /// Fatal startup error
    pub error_msg: Signal<Option<String>>,
    pub active_tab: Signal<Tab>,
    /// Value string of the selected elector range
    pub selected_range: Signal<String>,
    /// Error from the last range callback, shown in place of the bar chart
    pub range_error: Signal<Option<String>>,
    /// Token of the selected population radio button
    pub selected_population: Signal<String>,
}

impl AppState {
    /// Create a new AppState with the widgets at their default values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            active_tab: Signal::new(Tab::BarChart),
            selected_range: Signal::new(default_range_value()),
            range_error: Signal::new(None),
            selected_population: Signal::new(DEFAULT_POPULATION.to_string()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
