//! Task Row Component
//!
//! Body and action buttons for a single task entry.

use leptos::prelude::*;

use crate::models::Task;

/// Row content: text, optional due date, edit and delete actions.
/// The wrapper element in the list owns toggle-on-click and dragging.
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let completed = task.completed;
    let text = task.text.clone();
    let due_line = (!task.due_date.is_empty()).then(|| format!("📅 {}", task.due_date));

    view! {
        <div class="task-body">
            <span class=if completed { "task-text done" } else { "task-text" }>{text}</span>
            {due_line.map(|line| view! { <p class="task-due">{line}</p> })}
        </div>
        <div class="task-actions">
            <Show when=move || !completed>
                <button
                    class="edit-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(());
                    }
                >
                    "✏️"
                </button>
            </Show>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                "❌"
            </button>
        </div>
    }
}
