//! Error panel used for both the fatal startup error and per-chart callback errors.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What failed, e.g. "Bar chart"; shown before the message
    #[props(default = "Error".to_string())]
    pub context: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-left: 4px solid #C62828;",
            strong { "{props.context}: " }
            span { "{props.message}" }
        }
    }
}
