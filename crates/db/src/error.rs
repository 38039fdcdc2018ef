/// Failure raised by a [`StudentStore`](crate::StudentStore) implementation.
///
/// "No such document" is never an error here; lookups return `Option` and
/// mutations return whether a document matched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
