//! Task List Store
//!
//! Ordered-list operations shared by both variants, plus the reactive
//! application state for the local variant.

use crate::models::Task;

#[cfg(any(test, feature = "sync"))]
use crate::models::TaskDoc;

// ========================
// List Operations
// ========================

/// Append a new task. Blank/whitespace-only text is rejected.
/// Returns whether the submission was accepted.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, due_date: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    tasks.push(Task::new(text, due_date));
    true
}

/// Overwrite the text/due-date of the task at `index` in place
/// (edit-mode submit). Blank text is rejected; an out-of-range index
/// consumes the submission without touching the list.
pub fn overwrite_task(tasks: &mut [Task], index: usize, text: &str, due_date: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    if let Some(task) = tasks.get_mut(index) {
        task.text = text.to_string();
        task.due_date = due_date.to_string();
    }
    true
}

/// Delete the task at `index`; relative order of the rest is unchanged
pub fn remove_task(tasks: &mut Vec<Task>, index: usize) -> Option<Task> {
    if index < tasks.len() {
        Some(tasks.remove(index))
    } else {
        None
    }
}

/// Flip exactly one task's completed flag
pub fn toggle_complete(tasks: &mut [Task], index: usize) {
    if let Some(task) = tasks.get_mut(index) {
        task.completed = !task.completed;
    }
}

/// Remove the element at `source` and reinsert it at `dest`
pub fn reorder<T>(items: &mut Vec<T>, source: usize, dest: usize) {
    if source >= items.len() {
        return;
    }
    let moved = items.remove(source);
    let dest = dest.min(items.len());
    items.insert(dest, moved);
}

/// Completion percentage (0 for an empty list)
pub fn progress_percent<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> f64 {
    let (completed, total) = tasks
        .into_iter()
        .fold((0usize, 0usize), |(completed, total), task| {
            (completed + usize::from(task.completed), total + 1)
        });
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

// ========================
// Synced Cache Helpers
// ========================

/// Filter the fetched collection to the session owner and sort by rank
#[cfg(any(test, feature = "sync"))]
pub fn owned_sorted(mut docs: Vec<TaskDoc>, owner: &str) -> Vec<TaskDoc> {
    docs.retain(|doc| doc.owner == owner);
    docs.sort_by_key(|doc| doc.position);
    docs
}

/// Realign persisted ranks with list order after a reorder.
/// Returns `(id, position)` pairs for the documents that moved.
#[cfg(any(test, feature = "sync"))]
pub fn position_patches(docs: &mut [TaskDoc]) -> Vec<(String, i32)> {
    let mut patches = Vec::new();
    for (index, doc) in docs.iter_mut().enumerate() {
        let position = index as i32;
        if doc.position != position {
            doc.position = position;
            patches.push((doc.id.clone(), position));
        }
    }
    patches
}

// ========================
// Reactive State (local variant)
// ========================

#[cfg(not(feature = "sync"))]
mod reactive {
    use leptos::prelude::*;
    use reactive_stores::Store;

    use super::*;

    /// Application state with field-level reactivity
    #[derive(Clone, Debug, Default, Store)]
    pub struct AppState {
        /// Ordered task list
        pub tasks: Vec<Task>,
        /// Index of the task being edited (None = idle)
        pub editing: Option<usize>,
        /// Theme flag, persisted alongside the tasks
        pub dark_mode: bool,
    }

    /// Type alias for the store
    pub type AppStore = Store<AppState>;

    /// Submit the input fields: overwrite in edit mode, append otherwise.
    /// Returns whether the submission was accepted (inputs should clear).
    pub fn store_submit(store: &AppStore, text: &str, due_date: &str) -> bool {
        let editing = store.editing().get_untracked();
        let accepted = match editing {
            Some(index) => overwrite_task(&mut store.tasks().write(), index, text, due_date),
            None => add_task(&mut store.tasks().write(), text, due_date),
        };
        if accepted && editing.is_some() {
            store.editing().set(None);
        }
        accepted
    }

    /// Load a task's fields for editing; marks edit mode active
    pub fn store_begin_edit(store: &AppStore, index: usize) -> Option<Task> {
        let task = store.tasks().get_untracked().get(index).cloned()?;
        store.editing().set(Some(index));
        Some(task)
    }

    /// Leave edit mode without touching the list
    pub fn store_cancel_edit(store: &AppStore) {
        store.editing().set(None);
    }

    pub fn store_remove(store: &AppStore, index: usize) {
        remove_task(&mut store.tasks().write(), index);
    }

    pub fn store_toggle(store: &AppStore, index: usize) {
        toggle_complete(&mut store.tasks().write(), index);
    }

    pub fn store_reorder(store: &AppStore, source: usize, dest: usize) {
        reorder(&mut store.tasks().write(), source, dest);
    }
}

#[cfg(not(feature = "sync"))]
pub use reactive::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(texts: &[&str]) -> Vec<Task> {
        texts.iter().map(|text| Task::new(*text, "")).collect()
    }

    #[test]
    fn test_add_task_appends_incomplete() {
        let mut tasks = sample(&["A"]);
        assert!(add_task(&mut tasks, "Buy milk", "2025-01-01"));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].text, "Buy milk");
        assert_eq!(tasks[1].due_date, "2025-01-01");
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_add_task_rejects_blank_text() {
        let mut tasks = sample(&["A"]);
        assert!(!add_task(&mut tasks, "", ""));
        assert!(!add_task(&mut tasks, "   \t", "2025-01-01"));
        assert_eq!(tasks, sample(&["A"]));
    }

    #[test]
    fn test_toggle_flips_only_one_task() {
        let mut tasks = sample(&["A", "B", "C"]);
        toggle_complete(&mut tasks, 1);
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
        assert!(!tasks[2].completed);

        toggle_complete(&mut tasks, 1);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut tasks = sample(&["A"]);
        toggle_complete(&mut tasks, 5);
        assert_eq!(tasks, sample(&["A"]));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut tasks = sample(&["A", "B", "C", "D"]);
        let removed = remove_task(&mut tasks, 1).expect("Failed to remove task");
        assert_eq!(removed.text, "B");
        let order: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_remove_out_of_range_returns_none() {
        let mut tasks = sample(&["A"]);
        assert!(remove_task(&mut tasks, 3).is_none());
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_reorder_front_to_back() {
        let mut items = vec!["A", "B", "C"];
        reorder(&mut items, 0, 2);
        assert_eq!(items, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_back_to_front() {
        let mut items = vec!["A", "B", "C"];
        reorder(&mut items, 2, 0);
        assert_eq!(items, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_preserves_set() {
        let mut tasks = sample(&["A", "B", "C", "D"]);
        reorder(&mut tasks, 1, 3);
        let mut texts: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "C", "D", "B"]);
        texts.sort_unstable();
        assert_eq!(texts, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_reorder_out_of_range_source_is_noop() {
        let mut items = vec!["A", "B"];
        reorder(&mut items, 7, 0);
        assert_eq!(items, vec!["A", "B"]);
    }

    #[test]
    fn test_progress_half_done() {
        let mut tasks = sample(&["A", "B", "C", "D"]);
        tasks[0].completed = true;
        tasks[1].completed = true;
        assert_eq!(progress_percent(tasks.iter()), 50.0);
    }

    #[test]
    fn test_progress_empty_list_is_zero() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(progress_percent(tasks.iter()), 0.0);
    }

    #[test]
    fn test_overwrite_keeps_length_and_order() {
        let mut tasks = sample(&["A", "B", "C"]);
        assert!(overwrite_task(&mut tasks, 1, "B2", "2025-06-01"));
        let order: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(order, vec!["A", "B2", "C"]);
        assert_eq!(tasks[1].due_date, "2025-06-01");
    }

    #[test]
    fn test_overwrite_rejects_blank_text() {
        let mut tasks = sample(&["A"]);
        assert!(!overwrite_task(&mut tasks, 0, "  ", ""));
        assert_eq!(tasks[0].text, "A");
    }

    #[test]
    fn test_local_lifecycle_scenario() {
        let mut tasks = Vec::new();
        assert!(add_task(&mut tasks, "Buy milk", "2025-01-01"));
        assert_eq!(
            tasks,
            vec![Task {
                text: "Buy milk".to_string(),
                completed: false,
                due_date: "2025-01-01".to_string(),
            }]
        );

        toggle_complete(&mut tasks, 0);
        assert!(tasks[0].completed);

        remove_task(&mut tasks, 0);
        assert!(tasks.is_empty());
    }

    mod synced {
        use super::*;
        use crate::models::TaskDoc;

        fn doc(id: &str, owner: &str, position: i32) -> TaskDoc {
            TaskDoc {
                id: id.to_string(),
                owner: owner.to_string(),
                task: Task::new(format!("task {id}"), ""),
                position,
            }
        }

        #[test]
        fn test_owned_sorted_filters_to_owner() {
            let docs = vec![doc("1", "alice", 1), doc("2", "bob", 0), doc("3", "alice", 0)];
            let owned = owned_sorted(docs, "alice");
            let ids: Vec<&str> = owned.iter().map(|d| d.id.as_str()).collect();
            assert_eq!(ids, vec!["3", "1"]);
        }

        #[test]
        fn test_position_patches_only_for_moved_docs() {
            let mut docs = vec![doc("a", "alice", 0), doc("b", "alice", 1), doc("c", "alice", 2)];
            reorder(&mut docs, 0, 2);
            let patches = position_patches(&mut docs);
            assert_eq!(
                patches,
                vec![
                    ("b".to_string(), 0),
                    ("c".to_string(), 1),
                    ("a".to_string(), 2),
                ]
            );
            // Positions realigned with list order
            assert!(docs.iter().enumerate().all(|(i, d)| d.position == i as i32));
        }

        #[test]
        fn test_position_patches_empty_when_aligned() {
            let mut docs = vec![doc("a", "alice", 0), doc("b", "alice", 1)];
            assert!(position_patches(&mut docs).is_empty());
        }
    }
}
