//! Person Repository Port
//!
//! Abstract interface for Person persistence operations.

use async_trait::async_trait;

use crate::errors::PersonRepositoryError;
use crate::records::PersonRecord;
use twodo_domain::Person;

/// Repository interface for Person entities.
///
/// All four CRUD operations are required; there are no default bodies. An
/// implementation that omits one does not compile:
///
/// ```compile_fail
/// use twodo_repositories::{PersonRecord, PersonRepository, PersonRepositoryError};
///
/// struct NoCreate;
///
/// // missing `create`
/// #[async_trait::async_trait]
/// impl PersonRepository for NoCreate {
///     async fn retrieve(
///         &self,
///         record: PersonRecord,
///     ) -> Result<PersonRecord, PersonRepositoryError> {
///         Ok(record)
///     }
///
///     async fn update(
///         &self,
///         record: PersonRecord,
///     ) -> Result<PersonRecord, PersonRepositoryError> {
///         Ok(record)
///     }
///
///     async fn delete(&self, _record: PersonRecord) -> Result<(), PersonRepositoryError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Create a stored representation of a person, assigning it a fresh ID
    async fn create(&self, person: Person) -> Result<PersonRecord, PersonRepositoryError>;

    /// Retrieve a person by the record's ID; the payload may be absent on input
    async fn retrieve(&self, record: PersonRecord) -> Result<PersonRecord, PersonRepositoryError>;

    /// Replace the stored person under the record's ID with the record's payload
    async fn update(&self, record: PersonRecord) -> Result<PersonRecord, PersonRepositoryError>;

    /// Delete the stored person under the record's ID
    async fn delete(&self, record: PersonRecord) -> Result<(), PersonRepositoryError>;
}
