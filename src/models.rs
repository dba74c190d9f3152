//! Frontend Models
//!
//! Task records and the identity-provider principal.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// ISO date (YYYY-MM-DD), empty when no due date is set
    #[serde(default)]
    pub due_date: String,
}

impl Task {
    pub fn new(text: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            due_date: due_date.into(),
        }
    }
}

/// Remote task document (synced variant)
///
/// The cached list is the collection filtered to `owner` and kept
/// sorted by `position`.
#[cfg(any(test, feature = "sync"))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDoc {
    pub id: String,
    pub owner: String,
    #[serde(flatten)]
    pub task: Task,
    #[serde(default)]
    pub position: i32,
}

/// Identity-provider principal (synced variant)
#[cfg(any(test, feature = "sync"))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub email_verified: bool,
    /// Opaque bearer credential held for the lifetime of the session
    pub id_token: String,
}
