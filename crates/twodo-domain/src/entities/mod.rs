//! Domain Entities
//!
//! - Person: someone who owns todos
//! - ToDo: a unit of work to be done

mod person;
mod todo;

pub use person::*;
pub use todo::*;
