//! Twodo Repository Contracts
//!
//! Abstract interfaces between the twodo domain entities and whatever data
//! system ends up storing them.
//!
//! # Architecture
//!
//! This crate is the ports side of a hexagonal design; adapters live with
//! the backends that implement them:
//!
//! - `records/`: the value shapes exchanged with a repository. A record
//!   pairs a stored representation's identifier with an optional copy of
//!   the entity, so retrieve/delete can be called with the identifier alone.
//! - `errors/`: one error root per entity. Implementations wrap their own
//!   failure types under the root so callers can catch broadly and still
//!   recover the concrete cause.
//! - `ports/`: the repository traits. All four CRUD operations are required
//!   methods, so an incomplete implementation is rejected by the compiler.
//!
//! # Usage
//!
//! ```rust,ignore
//! use twodo_repositories::{PersonRepository, PersonRecord, PersonRepositoryError};
//! ```

pub mod errors;
pub mod ports;
pub mod records;

// Re-export commonly used types
pub use errors::{PersonRepositoryError, ToDoRepositoryError};
pub use ports::{PersonRepository, ToDoRepository};
pub use records::{PersonRecord, ToDoRecord};
