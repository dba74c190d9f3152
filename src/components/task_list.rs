//! Task List Component
//!
//! Drag-reorderable task list. Uses leptos-reorder with explicit
//! drop slots between rows; clicking a row toggles completion.

use leptos::prelude::*;

use leptos_reorder::ListDnd;

use crate::components::TaskRow;
use crate::models::Task;

/// Reorderable list of task rows
#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_toggle: Callback<usize>,
    #[prop(into)] on_edit: Callback<usize>,
    #[prop(into)] on_remove: Callback<usize>,
    #[prop(into)] on_reorder: Callback<(usize, usize)>,
) -> impl IntoView {
    let dnd = ListDnd::new(move |source, dest| {
        on_reorder.run((source, dest));
    });

    let rows = move || tasks.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="task-list">
            <DropSlot dnd=dnd slot=0 />
            <For
                each=rows
                key=|(index, task)| (*index, task.text.clone(), task.completed, task.due_date.clone())
                children=move |(index, task)| {
                    let on_mousedown = dnd.on_row_mousedown(index);
                    let on_mouseenter = dnd.on_row_mouseenter(index);
                    let on_mouseleave = dnd.on_mouseleave();

                    let completed = task.completed;
                    let is_dragging = move || dnd.dragging() == Some(index);
                    let row_class = move || {
                        let mut c = String::from("task-row");
                        if completed {
                            c.push_str(" completed");
                        }
                        if is_dragging() {
                            c.push_str(" dragging");
                        }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                            on:click=move |_| {
                                // Ignore the click that ends a drag gesture
                                if dnd.click_is_drag_release() {
                                    return;
                                }
                                on_toggle.run(index);
                            }
                        >
                            <TaskRow
                                task=task.clone()
                                on_edit=Callback::new(move |()| on_edit.run(index))
                                on_remove=Callback::new(move |()| on_remove.run(index))
                            />
                        </li>
                        <DropSlot dnd=dnd slot={index + 1} />
                    }
                }
            />
        </ul>
    }
}

/// Thin separator between rows that lights up as the drop target
#[component]
fn DropSlot(dnd: ListDnd, slot: usize) -> impl IntoView {
    let on_mouseenter = dnd.on_slot_mouseenter(slot);
    let on_mouseleave = dnd.on_mouseleave();

    let is_active = move || dnd.active_slot() == Some(slot);
    let is_dragging = move || dnd.dragging().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() {
            c.push_str(" hidden");
        }
        if is_active() {
            c.push_str(" active");
        }
        c
    };

    view! {
        <li
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
