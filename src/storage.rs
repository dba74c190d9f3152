//! Local Persistence
//!
//! Serialized task list, theme flag, and due-warning registry in
//! browser localStorage.

use std::collections::BTreeSet;

use crate::models::Task;

const TASKS_STORAGE_KEY: &str = "tasks";
const DARK_MODE_STORAGE_KEY: &str = "dark_mode";
const DUE_NOTIFIED_STORAGE_KEY: &str = "due_notified";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn load_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage().and_then(|storage| storage.get_item(key).ok().flatten())?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(%error, key, "failed parsing value from local storage");
            None
        }
    }
}

fn save_json<T: serde::Serialize>(key: &str, value: &T) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(value) {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub fn load_tasks() -> Vec<Task> {
    load_json(TASKS_STORAGE_KEY).unwrap_or_default()
}

pub fn save_tasks(tasks: &[Task]) {
    save_json(TASKS_STORAGE_KEY, &tasks);
}

pub fn load_dark_mode() -> bool {
    load_json(DARK_MODE_STORAGE_KEY).unwrap_or(true)
}

pub fn save_dark_mode(dark_mode: bool) {
    save_json(DARK_MODE_STORAGE_KEY, &dark_mode);
}

pub fn load_due_notified() -> BTreeSet<String> {
    load_json(DUE_NOTIFIED_STORAGE_KEY).unwrap_or_default()
}

pub fn save_due_notified(notified: &BTreeSet<String>) {
    save_json(DUE_NOTIFIED_STORAGE_KEY, notified);
}
