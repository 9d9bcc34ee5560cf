//! Alert slot rendering for the page's `#alert` region.

#[cfg(test)]
#[path = "alert_region_test.rs"]
mod alert_region_test;

use leptos::prelude::*;

use crate::state::notification::{AlertState, Notifier};

/// Renders the current alert; hidden with `d-none` when nothing is showing.
#[component]
pub fn AlertRegion(notifier: Notifier) -> impl IntoView {
    let state = notifier.state();

    view! {
        <div class=move || state.with(region_class) role="alert">
            {move || state.with(region_text)}
        </div>
    }
}

fn region_class(state: &AlertState) -> String {
    state.class_name()
}

/// The last message stays in place while hidden.
fn region_text(state: &AlertState) -> String {
    state.message.clone()
}
