//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.
//! Implementations of these traits live with their backends.

mod person_repository;
mod todo_repository;

pub use person_repository::*;
pub use todo_repository::*;
