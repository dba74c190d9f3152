//! Application Context
//!
//! Transient toast notifications shared via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast auto-dismiss delay
const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast stack provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        let (next_id, set_next_id) = signal(0u32);
        Self {
            toasts,
            set_toasts,
            next_id,
            set_next_id,
        }
    }

    /// Show a toast; it dismisses itself after a few seconds
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id + 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }
}

/// Get the toast context
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
