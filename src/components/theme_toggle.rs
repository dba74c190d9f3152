//! Theme Toggle Component
//!
//! Dark/light mode switch.

use leptos::prelude::*;

#[component]
pub fn ThemeToggle(
    #[prop(into)] dark_mode: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button class="theme-toggle" on:click=move |_| on_toggle.run(())>
            {move || if dark_mode.get() { "☀️ Light Mode" } else { "🌙 Dark Mode" }}
        </button>
    }
}
