pub mod health;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// ```text
/// /students          list (GET), create (POST)
/// /students/{id}     get (GET), update (PATCH), delete (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(students::router())
}
