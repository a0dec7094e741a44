//! PersonRecord - handle to a stored Person representation

use serde::{Deserialize, Serialize};
use twodo_domain::Person;
use uuid::Uuid;

/// Pairs the ID of a stored Person with an optional copy of the entity.
///
/// Keeping the ID here, rather than on `Person` itself, frees the domain
/// entity from carrying a storage concern. The record is a transient value
/// created per call; it is not retained by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: Uuid,
    /// Optional because in some contexts the ID alone is enough
    /// (e.g. retrieve, delete).
    pub person: Option<Person>,
}

impl PersonRecord {
    /// Record carrying both the ID and the entity (create responses, update
    /// requests)
    pub fn new(id: Uuid, person: Person) -> Self {
        Self {
            id,
            person: Some(person),
        }
    }

    /// Record carrying the ID alone (retrieve and delete requests)
    pub fn id_only(id: Uuid) -> Self {
        Self { id, person: None }
    }
}
