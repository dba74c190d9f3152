//! Leptos List Reorder
//!
//! Drag-to-reorder for flat Leptos lists using mouse events. A small
//! movement threshold distinguishes reorder drags from row clicks.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement in pixels before a pressed row starts dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long row click handlers keep ignoring the release of a drop
const CLICK_SUPPRESS_MS: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    /// Pressed on a row but still within the movement threshold
    Pending { index: usize, x: i32, y: i32 },
    Dragging { index: usize },
}

/// Drag-reorder state for one list.
///
/// Construction binds document-level mousemove/mouseup listeners, so
/// build it once per list component.
#[derive(Clone, Copy)]
pub struct ListDnd {
    phase: RwSignal<DragPhase>,
    /// Insertion slot currently hovered (0..=len, in pre-drag coordinates)
    slot: RwSignal<Option<usize>>,
    /// Set briefly after a drop so row click handlers can ignore the release
    click_suppressed: RwSignal<bool>,
}

impl ListDnd {
    /// `on_drop(source, dest)` receives the dragged row index and the
    /// destination index in the reordered list. Releasing outside any
    /// slot is a no-op.
    pub fn new<F>(on_drop: F) -> Self
    where
        F: Fn(usize, usize) + 'static,
    {
        let dnd = Self {
            phase: RwSignal::new(DragPhase::Idle),
            slot: RwSignal::new(None),
            click_suppressed: RwSignal::new(false),
        };

        // Promote a pending press to a drag once it moves far enough
        let on_mousemove =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                if let DragPhase::Pending { index, x, y } = dnd.phase.get_untracked() {
                    let dx = (ev.client_x() - x).abs();
                    let dy = (ev.client_y() - y).abs();
                    if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                        dnd.phase.set(DragPhase::Dragging { index });
                    }
                }
            });

        // A release during a drag drops on the hovered slot; releasing a
        // pending press leaves the row's own click to fire naturally
        let on_mouseup =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
                let phase = dnd.phase.get_untracked();
                let slot = dnd.slot.get_untracked();
                dnd.phase.set(DragPhase::Idle);
                dnd.slot.set(None);

                if let DragPhase::Dragging { index: source } = phase {
                    dnd.suppress_next_click();
                    if let Some(slot) = slot {
                        let dest = if slot > source { slot - 1 } else { slot };
                        on_drop(source, dest);
                    }
                }
            });

        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc
                .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ =
                doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
        on_mousemove.forget();
        on_mouseup.forget();

        dnd
    }

    /// Index of the row currently being dragged
    pub fn dragging(&self) -> Option<usize> {
        match self.phase.get() {
            DragPhase::Dragging { index } => Some(index),
            _ => None,
        }
    }

    fn dragging_untracked(&self) -> Option<usize> {
        match self.phase.get_untracked() {
            DragPhase::Dragging { index } => Some(index),
            _ => None,
        }
    }

    /// Insertion slot currently hovered
    pub fn active_slot(&self) -> Option<usize> {
        self.slot.get()
    }

    /// Whether a click event is the tail end of a drop and should be ignored
    pub fn click_is_drag_release(&self) -> bool {
        self.click_suppressed.get_untracked()
    }

    fn suppress_next_click(&self) {
        self.click_suppressed.set(true);
        if let Some(win) = web_sys::window() {
            let clear = self.click_suppressed;
            let cb = Closure::<dyn FnMut()>::new(move || clear.set(false));
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                CLICK_SUPPRESS_MS,
            );
            cb.forget();
        }
    }

    /// Mousedown handler for a row. Presses on inputs or buttons inside
    /// the row are left alone.
    pub fn on_row_mousedown(self, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |ev: web_sys::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                    || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                {
                    return;
                }
            }
            self.phase.set(DragPhase::Pending {
                index,
                x: ev.client_x(),
                y: ev.client_y(),
            });
        }
    }

    /// Hovering a row targets the slot that moves the dragged row into
    /// its place
    pub fn on_row_mouseenter(self, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |_ev: web_sys::MouseEvent| {
            if let Some(dragging) = self.dragging_untracked() {
                if dragging != index {
                    let slot = if index > dragging { index + 1 } else { index };
                    self.slot.set(Some(slot));
                }
            }
        }
    }

    /// Hovering a separator between rows targets it directly
    pub fn on_slot_mouseenter(self, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |_ev: web_sys::MouseEvent| {
            if self.dragging_untracked().is_some() {
                self.slot.set(Some(slot));
            }
        }
    }

    pub fn on_mouseleave(self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |_ev: web_sys::MouseEvent| {
            if self.dragging_untracked().is_some() {
                self.slot.set(None);
            }
        }
    }
}
