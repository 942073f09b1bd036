use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::{
    model::{
        DatabaseError, ResourceTyped,
        entity::{Subject, SubjectDetailRow, SubjectWithCountRow},
    },
    web::{
        AppState, WebError, WebResult,
        dto::subjects::{SubjectDetail, SubjectSummary},
        error::ErrorResponse,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(subjects_list_handler))
        .route("/{id}", get(subjects_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    description = "List all subjects with their subtopic counts",
    responses(
        (status = 200, description = "Subjects collected", body = Vec<SubjectSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "subjects"
)]
pub(crate) async fn subjects_list_handler(State(state): State<AppState>) -> WebResult<impl IntoResponse> {
    let subjects = SubjectWithCountRow::fetch_all(state.mm())
        .await
        .map_err(|e| WebError::resource_fetch_error(Subject::get_resource_type(), e))?;

    let subjects: Vec<SubjectSummary> = subjects.into_iter().map(SubjectSummary::from).collect();

    Ok((StatusCode::OK, Json(subjects)))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{subject_id}",
    description = "Fetch one subject with its subtopics and their lessons",
    params(
        ("subject_id" = Uuid, Path, description = "ID of the subject to get")
    ),
    responses(
        (status = 200, description = "Subject found", body = SubjectDetail),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "subjects"
)]
pub(crate) async fn subjects_get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<impl IntoResponse> {
    let row = SubjectDetailRow::find_by_id(state.mm(), id)
        .await
        .map_err(|e| WebError::resource_fetch_error(Subject::get_resource_type(), e))?;

    let Some(row) = row else {
        return Err(WebError::resource_not_found(Subject::get_resource_type()));
    };

    let detail = SubjectDetail::try_from(row).map_err(|e| {
        WebError::resource_fetch_error(Subject::get_resource_type(), DatabaseError::from(e))
    })?;

    Ok((StatusCode::OK, Json(detail)))
}
