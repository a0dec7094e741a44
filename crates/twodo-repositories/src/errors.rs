//! Repository Errors
//!
//! One error root per entity. An implementation never gets to invent a new
//! top-level error type: whatever goes wrong in a backend is either an
//! unknown identifier or an implementation-specific failure wrapped under
//! `Backend`, so a caller matching on the root sees every failure, and one
//! that cares about the concrete cause can downcast the source.

use thiserror::Error;
use uuid::Uuid;

/// Failures raised by Person repository implementations
#[derive(Debug, Error)]
pub enum PersonRepositoryError {
    #[error("person not found: {id}")]
    NotFound { id: Uuid },

    #[error("person repository backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PersonRepositoryError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Wrap an implementation-specific failure under the root
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Failures raised by ToDo repository implementations
#[derive(Debug, Error)]
pub enum ToDoRepositoryError {
    #[error("todo not found: {id}")]
    NotFound { id: Uuid },

    #[error("todo repository backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ToDoRepositoryError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Wrap an implementation-specific failure under the root
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}
