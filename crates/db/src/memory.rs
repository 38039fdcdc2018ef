use std::collections::HashMap;

use async_trait::async_trait;
use roster_core::types::StudentId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::student::{
    Student, StudentDocument, StudentFilter, UpdateStudent, LIST_LIMIT,
};
use crate::store::StudentStore;

/// In-memory student collection.
///
/// Intended for tests/dev. List order follows `HashMap` iteration, which is
/// as unspecified as the Postgres store's.
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    docs: RwLock<HashMap<StudentId, StudentDocument>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn insert(&self, doc: &StudentDocument) -> Result<StudentId, StoreError> {
        let id = StudentId::generate();
        self.docs.write().await.insert(id, doc.clone());
        Ok(id)
    }

    async fn find_many(&self, filter: &StudentFilter) -> Result<Vec<Student>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|(_, doc)| filter.matches(doc))
            .take(LIST_LIMIT)
            .map(|(id, doc)| Student::from_document(*id, doc.clone()))
            .collect())
    }

    async fn find_one(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .get(&id)
            .map(|doc| Student::from_document(id, doc.clone())))
    }

    async fn update_fields(
        &self,
        id: StudentId,
        update: &UpdateStudent,
    ) -> Result<bool, StoreError> {
        let mut docs = self.docs.write().await;
        match docs.get_mut(&id) {
            Some(doc) => {
                update.apply_to(doc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, id: StudentId) -> Result<bool, StoreError> {
        Ok(self.docs.write().await.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
