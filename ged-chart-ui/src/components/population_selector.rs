//! Radio buttons choosing which population pie to show.

use crate::state::AppState;
use dioxus::prelude::*;
use ged_data::options::population_options;

#[component]
pub fn PopulationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = population_options();
    let selected = (state.selected_population)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_population.set(evt.value());
    };

    rsx! {
        div {
            id: "population-radio",
            style: "margin: 8px 0 16px 0;",
            for opt in options.iter() {
                label {
                    style: "display: block; margin: 4px 0;",
                    input {
                        r#type: "radio",
                        name: "population",
                        value: "{opt.value}",
                        checked: opt.value == selected,
                        onchange: on_change,
                    }
                    " {opt.label}"
                }
            }
        }
    }
}
