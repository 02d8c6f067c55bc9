//! Container div the D3.js renderers draw into.

use super::ErrorDisplay;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to the renderer
    pub id: String,
    #[props(default = 400)]
    pub min_height: u32,
    /// Chart-local error; replaces the chart area when set
    pub error: Option<String>,
}

/// A container div for one D3.js chart.
///
/// When `error` is set the container shows the message instead of the chart,
/// so a failing callback only affects its own chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if let Some(message) = props.error.clone() {
                ErrorDisplay { message: message, context: "Chart unavailable".to_string() }
            } else {
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
