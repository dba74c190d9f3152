//! Toast Component
//!
//! Renders the transient notification stack.

use leptos::prelude::*;

use crate::context::{use_toasts, ToastKind};

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Warning => "toast warning",
                        ToastKind::Error => "toast error",
                        ToastKind::Success => "toast success",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
