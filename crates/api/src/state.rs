use std::sync::Arc;

use roster_db::StudentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the store handle is built once at startup and shared.
#[derive(Clone)]
pub struct AppState {
    /// Student collection (Postgres in production, in-memory in tests).
    pub store: Arc<dyn StudentStore>,
}
