//! Page header with title and data source.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Where the data comes from; hidden when empty
    #[props(default = String::new())]
    pub source: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px; text-align: center;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if !props.source.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Source: {props.source}"
                }
            }
        }
    }
}
