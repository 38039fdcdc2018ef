use async_trait::async_trait;
use roster_core::types::StudentId;

use crate::error::StoreError;
use crate::models::student::{Student, StudentDocument, StudentFilter, UpdateStudent};

/// Single-document operations against the student collection.
///
/// Each call is one atomic store operation. Concurrent updates to the same
/// document are last-writer-wins; there is no version token.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a new document, returning its store-generated key.
    async fn insert(&self, doc: &StudentDocument) -> Result<StudentId, StoreError>;

    /// Return at most [`LIST_LIMIT`](crate::models::student::LIST_LIMIT)
    /// documents matching `filter`, in no particular order.
    async fn find_many(&self, filter: &StudentFilter) -> Result<Vec<Student>, StoreError>;

    async fn find_one(&self, id: StudentId) -> Result<Option<Student>, StoreError>;

    /// Overwrite the fields present in `update`. Returns `false` if no
    /// document has that key.
    async fn update_fields(&self, id: StudentId, update: &UpdateStudent)
        -> Result<bool, StoreError>;

    /// Returns `false` if no document has that key.
    async fn delete_one(&self, id: StudentId) -> Result<bool, StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
