//! Tab strip switching between the dashboard's chart panels.

use crate::state::{AppState, Tab};
use dioxus::prelude::*;

fn tab_style(active: bool) -> &'static str {
    if active {
        "flex: 1; padding: 10px; border: 1px solid #d6d6d6; border-bottom: none; border-top: 2px solid #1975FA; background: #fff; font-weight: bold; cursor: pointer;"
    } else {
        "flex: 1; padding: 10px; border: 1px solid #d6d6d6; background: #f9f9f9; cursor: pointer;"
    }
}

#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; border-bottom: 1px solid #d6d6d6; margin-bottom: 12px;",
            for tab in Tab::ALL {
                button {
                    key: "{tab:?}",
                    style: tab_style(tab == active),
                    onclick: move |_| state.active_tab.set(tab),
                    {tab.label()}
                }
            }
        }
    }
}
