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
        entity::{Lesson, LessonDetailRow},
    },
    web::{AppState, WebError, WebResult, dto::lessons::LessonDetail, error::ErrorResponse},
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{id}", get(lessons_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/lessons/{lesson_id}",
    description = "Fetch one lesson with its quizzes and their questions",
    params(
        ("lesson_id" = Uuid, Path, description = "ID of the lesson to get")
    ),
    responses(
        (status = 200, description = "Lesson found", body = LessonDetail),
        (status = 404, description = "Lesson not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub(crate) async fn lessons_get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<impl IntoResponse> {
    let row = LessonDetailRow::find_by_id(state.mm(), id)
        .await
        .map_err(|e| WebError::resource_fetch_error(Lesson::get_resource_type(), e))?;

    let Some(row) = row else {
        return Err(WebError::resource_not_found(Lesson::get_resource_type()));
    };

    let detail = LessonDetail::try_from(row).map_err(|e| {
        WebError::resource_fetch_error(Lesson::get_resource_type(), DatabaseError::from(e))
    })?;

    Ok((StatusCode::OK, Json(detail)))
}
