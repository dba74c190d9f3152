//! Progress Bar Component
//!
//! Completion percentage of the task list.

use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div class="progress-fill" style=move || format!("width: {}%;", percent.get())></div>
        </div>
    }
}
