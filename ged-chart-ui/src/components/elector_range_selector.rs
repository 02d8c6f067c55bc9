//! Dropdown selector for the elector range filter.

use crate::state::AppState;
use dioxus::prelude::*;
use ged_core::elector_range::ELECTOR_RANGES;
use ged_data::options::elector_range_options;

/// Elector range dropdown.
/// Options are the configured ranges; updates selected_range on change.
#[component]
pub fn ElectorRangeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = elector_range_options(&ELECTOR_RANGES);
    let selected = (state.selected_range)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_range.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Select range"
            }
            select {
                id: "elector-range-dropdown",
                style: "min-width: 200px; padding: 4px;",
                onchange: on_change,
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
