//! Persistence layer for student records.
//!
//! Students live in a single document collection: the Postgres table
//! `students`, where each row is a store-generated UUID key plus a JSONB
//! document. Handlers talk to it only through the [`StudentStore`] trait so
//! the HTTP layer can be driven against [`InMemoryStudentStore`] in tests.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryStudentStore;
pub use repositories::StudentRepo;
pub use store::StudentStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
