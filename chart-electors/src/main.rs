//! Total Electors and Population Shares by Constituency
//!
//! Three tabs over the 2023 constituency aggregate:
//! - **Bar Chart**: total electors per constituency, filtered by an elector
//!   range dropdown
//! - **Box Plot**: distribution of total electors across all constituencies
//! - **Population**: Malay or Chinese population share per constituency,
//!   chosen with radio buttons
//!
//! Data flow:
//! 1. On mount, the constituency CSV is fetched once from `DATA_URL`. A failed
//!    fetch replaces the whole dashboard with an error panel.
//! 2. The CSV and the embedded ten-row sample become an immutable `AppData`
//!    wrapped in a `Dashboard` dispatcher.
//! 3. Widget signals feed `WidgetEvent`s to the dispatcher from effects; the
//!    resulting figure is handed to the D3.js bridge. A callback error is
//!    shown in place of its own chart only.

use ged_chart_ui::components::{
    ChartContainer, ChartHeader, ElectorRangeSelector, ErrorDisplay, LoadingSpinner,
    PopulationSelector, TabBar,
};
use ged_chart_ui::js_bridge;
use ged_chart_ui::state::{AppState, Tab};
use ged_core::fetch::{fetch_csv, DATA_URL};
use ged_data::dashboard::{AppData, ChartTarget, Dashboard, WidgetEvent};
use dioxus::prelude::*;

/// DOM id of the box plot container.
const BOX_PLOT_ID: &str = "box-plot";

fn main() {
    let level = if cfg!(debug_assertions) {
        dioxus_logger::tracing::Level::DEBUG
    } else {
        dioxus_logger::tracing::Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("electors-root"))
        .launch(App);
}

/// Fetch the constituency CSV and build the dispatcher.
async fn load_dashboard() -> anyhow::Result<Dashboard> {
    let client = reqwest::Client::new();
    let body = fetch_csv(&client, DATA_URL).await?;
    let data = AppData::from_csv(&body)?;
    log::info!(
        "Loaded {} constituencies ({} sample rows)",
        data.electorate.len(),
        data.sample.len()
    );
    Ok(Dashboard::new(data))
}

/// Dispatch `event` and draw the result. Returns the callback error, if any.
fn dispatch_and_render(dashboard: &Dashboard, event: &WidgetEvent) -> Option<String> {
    match dashboard.dispatch(event) {
        Ok(Some(update)) => {
            js_bridge::render_figure(update.target.element_id(), &update.figure);
            None
        }
        // Nothing to draw; the chart keeps what it had.
        Ok(None) => None,
        Err(e) => {
            log::error!("Callback for {:?} failed: {}", event, e);
            Some(e.to_string())
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Startup fetch
    use_future(move || async move {
        match load_dashboard().await {
            Ok(dashboard) => state.dashboard.set(Some(dashboard)),
            Err(e) => {
                log::error!("Failed to load constituency data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load constituency data: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // Bar chart follows the elector range dropdown
    use_effect(move || {
        let Some(dashboard) = (state.dashboard)() else {
            return;
        };
        if (state.active_tab)() != Tab::BarChart {
            return;
        }
        let event = WidgetEvent::ElectorRangeSelected((state.selected_range)());

        js_bridge::init_charts();
        let error = dispatch_and_render(&dashboard, &event);
        if *state.range_error.peek() != error {
            state.range_error.set(error);
        }
    });

    // Population pie follows the radio buttons
    use_effect(move || {
        let Some(dashboard) = (state.dashboard)() else {
            return;
        };
        if (state.active_tab)() != Tab::Population {
            return;
        }
        let event = WidgetEvent::PopulationSelected((state.selected_population)());

        js_bridge::init_charts();
        // Population callbacks never fail; an unknown token draws nothing.
        let _ = dispatch_and_render(&dashboard, &event);
    });

    // Box plot is static; redraw whenever its tab is shown
    use_effect(move || {
        let Some(dashboard) = (state.dashboard)() else {
            return;
        };
        if (state.active_tab)() != Tab::BoxPlot {
            return;
        }
        js_bridge::init_charts();
        js_bridge::render_figure(BOX_PLOT_ID, &dashboard.data().box_plot);
    });

    rsx! {
        div {
            style: "background-color: #f0f0f0; padding: 20px; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Electoral Demographics by Constituency".to_string(),
                source: DATA_URL.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err, context: "Startup failed".to_string() }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "width: 80%; margin: 0 auto; padding: 20px; background: #fff; border-radius: 4px;",
                    TabBar {}
                    {match (state.active_tab)() {
                        Tab::BarChart => rsx! {
                            ElectorRangeSelector {}
                            ChartContainer {
                                id: ChartTarget::BarChart.element_id().to_string(),
                                min_height: 450,
                                error: (state.range_error)(),
                            }
                        },
                        Tab::BoxPlot => rsx! {
                            ChartContainer {
                                id: BOX_PLOT_ID.to_string(),
                                min_height: 260,
                            }
                        },
                        Tab::Population => rsx! {
                            PopulationSelector {}
                            br {}
                            ChartContainer {
                                id: ChartTarget::PopulationChart.element_id().to_string(),
                                min_height: 450,
                            }
                        },
                    }}
                }
            }
        }
    }
}
