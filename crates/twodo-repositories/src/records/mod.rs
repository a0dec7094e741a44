//! Repository Records
//!
//! Value shapes exchanged with a repository: an identifier paired with an
//! optional copy of the entity it identifies.

mod person;
mod todo;

pub use person::*;
pub use todo::*;
