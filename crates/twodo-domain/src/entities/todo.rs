//! ToDo - A unit of work to be done
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ToDo - a titled task and whether it is done
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDo {
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl ToDo {
    /// Create a new, not-yet-done ToDo with the creation timestamp filled in
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
            created_at: Utc::now(),
        }
    }

    /// Mark the todo as done
    pub fn complete(&mut self) {
        self.done = true;
    }
}
