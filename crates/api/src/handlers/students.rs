//! Handlers for the `/students` resource.
//!
//! Each handler validates its input, makes exactly one store call and
//! reshapes the result. Malformed ids are rejected before the store is
//! touched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::StudentId;
use roster_db::models::student::{CreateStudent, Student, StudentDocument, UpdateStudent};

use crate::error::{AppError, AppResult};
use crate::extract::{QueryParams, ValidatedJson};
use crate::query::StudentListParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: StudentId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id: id.to_string(),
    })
}

/// POST /students
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let doc = StudentDocument::from(input);
    let id = state.store.insert(&doc).await?;

    tracing::info!(student_id = %id, "Student created");

    Ok((StatusCode::CREATED, Json(Student::from_document(id, doc))))
}

/// GET /students?country=&age=
///
/// At most 100 students, in no guaranteed order.
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<StudentListParams>,
) -> AppResult<Json<DataResponse<Vec<Student>>>> {
    let students = state.store.find_many(&params.into_filter()).await?;
    Ok(Json(DataResponse { data: students }))
}

/// GET /students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Student>> {
    let id: StudentId = id.parse()?;
    let student = state.store.find_one(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(student))
}

/// PATCH /students/{id}
///
/// Overwrites only the fields present in the body. An empty body is a 400.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<StatusCode> {
    let id: StudentId = id.parse()?;

    if input.is_empty() {
        return Err(AppError::BadRequest("No fields provided for update".into()));
    }

    if !state.store.update_fields(id, &input).await? {
        return Err(not_found(id));
    }

    tracing::info!(student_id = %id, "Student updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /students/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: StudentId = id.parse()?;

    if !state.store.delete_one(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(student_id = %id, "Student deleted");

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
