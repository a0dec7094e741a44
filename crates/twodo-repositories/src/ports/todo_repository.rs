//! ToDo Repository Port
//!
//! Abstract interface for ToDo persistence operations.

use async_trait::async_trait;

use crate::errors::ToDoRepositoryError;
use crate::records::ToDoRecord;
use twodo_domain::ToDo;

/// Repository interface for ToDo entities.
///
/// All four CRUD operations are required; there are no default bodies. An
/// implementation that omits one does not compile:
///
/// ```compile_fail
/// use twodo_domain::ToDo;
/// use twodo_repositories::{ToDoRecord, ToDoRepository, ToDoRepositoryError};
///
/// struct NoUpdate;
///
/// // missing `update`
/// #[async_trait::async_trait]
/// impl ToDoRepository for NoUpdate {
///     async fn create(&self, todo: ToDo) -> Result<ToDoRecord, ToDoRepositoryError> {
///         Ok(ToDoRecord::new(uuid::Uuid::new_v4(), todo))
///     }
///
///     async fn retrieve(&self, record: ToDoRecord) -> Result<ToDoRecord, ToDoRepositoryError> {
///         Ok(record)
///     }
///
///     async fn delete(&self, _record: ToDoRecord) -> Result<(), ToDoRepositoryError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ToDoRepository: Send + Sync {
    /// Create a stored representation of a todo, assigning it a fresh ID
    async fn create(&self, todo: ToDo) -> Result<ToDoRecord, ToDoRepositoryError>;

    /// Retrieve a todo by the record's ID; the payload may be absent on input
    async fn retrieve(&self, record: ToDoRecord) -> Result<ToDoRecord, ToDoRepositoryError>;

    /// Replace the stored todo under the record's ID with the record's payload
    async fn update(&self, record: ToDoRecord) -> Result<ToDoRecord, ToDoRepositoryError>;

    /// Delete the stored todo under the record's ID
    async fn delete(&self, record: ToDoRecord) -> Result<(), ToDoRepositoryError>;
}
