//! Due-Date Warnings
//!
//! Scans incomplete tasks whose due date is at or before today and
//! emits a one-shot warning per task, tracked in a notified registry.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::Task;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a task should warn: incomplete, with a parseable due date
/// at or before `today`. Unparseable dates never warn.
pub fn is_due(task: &Task, today: NaiveDate) -> bool {
    if task.completed || task.due_date.is_empty() {
        return false;
    }
    match NaiveDate::parse_from_str(&task.due_date, DUE_DATE_FORMAT) {
        Ok(date) => date <= today,
        Err(_) => false,
    }
}

/// Registry key for a task without an external identifier
pub fn warning_key(task: &Task) -> String {
    format!("{}|{}", task.text, task.due_date)
}

/// Collect warning messages for newly-due tasks and mark them in the
/// registry. Keys whose task is gone, completed, or no longer due are
/// dropped first, so a task that comes back can warn again.
pub fn due_warnings(
    entries: &[(String, &Task)],
    today: NaiveDate,
    registry: &mut BTreeSet<String>,
) -> Vec<String> {
    registry.retain(|key| {
        entries
            .iter()
            .any(|(entry_key, task)| entry_key == key && is_due(task, today))
    });

    let mut warnings = Vec::new();
    for (key, task) in entries {
        if is_due(task, today) && registry.insert(key.clone()) {
            warnings.push(format!("Task \"{}\" is due!", task.text));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("Failed to build test date")
    }

    fn task(text: &str, due_date: &str, completed: bool) -> Task {
        Task {
            text: text.to_string(),
            completed,
            due_date: due_date.to_string(),
        }
    }

    fn entries(tasks: &[Task]) -> Vec<(String, &Task)> {
        tasks.iter().map(|t| (warning_key(t), t)).collect()
    }

    #[test]
    fn test_is_due_at_or_before_today() {
        assert!(is_due(&task("a", "2025-06-15", false), today()));
        assert!(is_due(&task("a", "2024-12-31", false), today()));
        assert!(!is_due(&task("a", "2025-06-16", false), today()));
    }

    #[test]
    fn test_completed_and_undated_tasks_never_warn() {
        assert!(!is_due(&task("a", "2025-01-01", true), today()));
        assert!(!is_due(&task("a", "", false), today()));
    }

    #[test]
    fn test_unparseable_due_date_never_warns() {
        assert!(!is_due(&task("a", "someday", false), today()));
        assert!(!is_due(&task("a", "2025/01/01", false), today()));
    }

    #[test]
    fn test_warns_once_per_task() {
        let tasks = vec![task("Pay rent", "2025-06-01", false)];
        let mut registry = BTreeSet::new();

        let first = due_warnings(&entries(&tasks), today(), &mut registry);
        assert_eq!(first, vec!["Task \"Pay rent\" is due!".to_string()]);

        // Unrelated list change re-runs the scan; no repeat warning
        let second = due_warnings(&entries(&tasks), today(), &mut registry);
        assert!(second.is_empty());
    }

    #[test]
    fn test_completion_clears_registry_entry() {
        let mut tasks = vec![task("Pay rent", "2025-06-01", false)];
        let mut registry = BTreeSet::new();

        due_warnings(&entries(&tasks), today(), &mut registry);
        assert_eq!(registry.len(), 1);

        tasks[0].completed = true;
        let warnings = due_warnings(&entries(&tasks), today(), &mut registry);
        assert!(warnings.is_empty());
        assert!(registry.is_empty());

        // Un-completing makes it warn again
        tasks[0].completed = false;
        let again = due_warnings(&entries(&tasks), today(), &mut registry);
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn test_deleted_task_key_is_pruned() {
        let tasks = vec![task("Pay rent", "2025-06-01", false)];
        let mut registry = BTreeSet::new();
        due_warnings(&entries(&tasks), today(), &mut registry);

        let warnings = due_warnings(&[], today(), &mut registry);
        assert!(warnings.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_only_due_tasks_warn() {
        let tasks = vec![
            task("overdue", "2025-01-01", false),
            task("future", "2030-01-01", false),
            task("done", "2025-01-01", true),
        ];
        let mut registry = BTreeSet::new();
        let warnings = due_warnings(&entries(&tasks), today(), &mut registry);
        assert_eq!(warnings, vec!["Task \"overdue\" is due!".to_string()]);
    }
}
