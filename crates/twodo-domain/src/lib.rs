//! Twodo Domain Library
//!
//! Pure domain entities for the twodo system, without infrastructure
//! dependencies.
//!
//! Entities deliberately carry no identifier: an ID identifies a stored
//! representation of an entity, which is a repository concern. The
//! repository contract layer (`twodo-repositories`) pairs entities with
//! identifiers in its record types.

pub mod entities;

// Re-export commonly used types
pub use entities::{Person, ToDo};
