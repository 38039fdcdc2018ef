use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Student CRUD routes.
///
/// ```text
/// GET    /students          -> list
/// POST   /students          -> create
/// GET    /students/{id}     -> get_by_id
/// PATCH  /students/{id}     -> update
/// DELETE /students/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/{id}",
            get(students::get_by_id)
                .patch(students::update)
                .delete(students::delete),
        )
}
