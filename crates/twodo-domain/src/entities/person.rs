//! Person - Owner of todos
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Person - identified in the domain by who they are, not by a stored ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Create a new Person with the creation timestamp filled in
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
