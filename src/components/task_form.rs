//! Task Form Component
//!
//! Text and due-date inputs with add/update and cancel actions.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Form for creating a task, or updating one while edit mode is active
#[component]
pub fn TaskForm(
    text: RwSignal<String>,
    due_date: RwSignal<String>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                class="task-input"
                placeholder="Enter a task"
                prop:value=move || text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    text.set(input.value());
                }
            />
            <input
                type="date"
                class="due-input"
                prop:value=move || due_date.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    due_date.set(input.value());
                }
            />
            <button
                type="submit"
                class=move || if editing.get() { "submit-btn editing" } else { "submit-btn" }
            >
                {move || if editing.get() { "Update" } else { "Add" }}
            </button>
            <Show when=move || editing.get()>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
