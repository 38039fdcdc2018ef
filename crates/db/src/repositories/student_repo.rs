//! Repository for the `students` document table.

use async_trait::async_trait;
use roster_core::types::StudentId;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::student::{
    Student, StudentDocument, StudentFilter, UpdateStudent, LIST_LIMIT,
};
use crate::store::StudentStore;

#[derive(Debug, FromRow)]
struct StudentRow {
    id: Uuid,
    doc: Json<StudentDocument>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::from_document(row.id.into(), row.doc.0)
    }
}

/// Postgres-backed [`StudentStore`]. Documents are JSONB, keys are UUIDs
/// generated by the database.
#[derive(Debug, Clone)]
pub struct StudentRepo {
    pool: PgPool,
}

impl StudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for StudentRepo {
    async fn insert(&self, doc: &StudentDocument) -> Result<StudentId, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO students (doc) VALUES ($1) RETURNING id",
        )
        .bind(Json(doc))
        .fetch_one(&self.pool)
        .await?;
        Ok(id.into())
    }

    async fn find_many(&self, filter: &StudentFilter) -> Result<Vec<Student>, StoreError> {
        // No ORDER BY: callers get store-native order.
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, doc FROM students
             WHERE ($1::text IS NULL OR doc -> 'address' ->> 'country' = $1)
               AND ($2::bigint IS NULL OR (doc ->> 'age')::bigint >= $2)
             LIMIT $3",
        )
        .bind(filter.country.as_deref())
        .bind(filter.min_age)
        .bind(LIST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;
        tracing::debug!(?filter, returned = rows.len(), "Listed students");
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_one(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        let row = sqlx::query_as::<_, StudentRow>("SELECT id, doc FROM students WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Student::from))
    }

    async fn update_fields(
        &self,
        id: StudentId,
        update: &UpdateStudent,
    ) -> Result<bool, StoreError> {
        // `||` is a shallow merge, so a supplied address replaces the old one whole.
        let result = sqlx::query("UPDATE students SET doc = doc || $2::jsonb WHERE id = $1")
            .bind(id.as_uuid())
            .bind(update.to_set_document())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, id: StudentId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
