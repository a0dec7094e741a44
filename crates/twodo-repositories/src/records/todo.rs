//! ToDoRecord - handle to a stored ToDo representation

use serde::{Deserialize, Serialize};
use twodo_domain::ToDo;
use uuid::Uuid;

/// Pairs the ID of a stored ToDo with an optional copy of the entity.
///
/// Same shape and rationale as [`PersonRecord`](crate::records::PersonRecord):
/// the ID identifies a stored representation and belongs to the repository
/// layer, not the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoRecord {
    pub id: Uuid,
    /// Optional because in some contexts the ID alone is enough
    /// (e.g. retrieve, delete).
    pub todo: Option<ToDo>,
}

impl ToDoRecord {
    /// Record carrying both the ID and the entity (create responses, update
    /// requests)
    pub fn new(id: Uuid, todo: ToDo) -> Self {
        Self {
            id,
            todo: Some(todo),
        }
    }

    /// Record carrying the ID alone (retrieve and delete requests)
    pub fn id_only(id: Uuid) -> Self {
        Self { id, todo: None }
    }
}
