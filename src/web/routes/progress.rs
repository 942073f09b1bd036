use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        ResourceTyped,
        entity::{Progress, ProgressUpsert, ProgressWithContextRow},
    },
    web::{
        AppState, RequestContext, WebError, WebResult, dto::progress::ProgressWithContext,
        error::ErrorResponse, middlewares,
    },
};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBody {
    pub lesson_id: Uuid,
    pub completed: bool,
    pub score: i32,
}

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/progress", post(progress_submit_handler))
        .route("/user/progress", get(progress_list_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::require_bearer_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/progress",
    request_body = ProgressBody,
    description = "Record completion and score for one lesson; replaces any previous record for the same lesson",
    responses(
        (status = 200, description = "Progress stored", body = Progress),
        (status = 400, description = "Score out of range", body = ErrorResponse),
        (status = 401, description = "No token presented", body = ErrorResponse),
        (status = 403, description = "Token invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress",
    security(
        ("bearer" = [])
    )
)]
pub(crate) async fn progress_submit_handler(
    ctx: RequestContext,
    State(state): State<AppState>,
    Json(payload): Json<ProgressBody>,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;

    if !(0..=100).contains(&payload.score) {
        return Err(WebError::resource_bad_request(Progress::get_resource_type()));
    }

    let progress = Progress::upsert(
        state.mm(),
        ProgressUpsert {
            user_id: user.user_id(),
            lesson_id: payload.lesson_id,
            completed: payload.completed,
            score: payload.score,
        },
    )
    .await
    .map_err(|e| WebError::resource_fetch_error(Progress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(progress)))
}

#[utoipa::path(
    get,
    path = "/api/user/progress",
    description = "List the current user's progress with lesson, subtopic and subject context",
    responses(
        (status = 200, description = "Progress collected", body = Vec<ProgressWithContext>),
        (status = 401, description = "No token presented", body = ErrorResponse),
        (status = 403, description = "Token invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress",
    security(
        ("bearer" = [])
    )
)]
pub(crate) async fn progress_list_handler(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;

    let rows = ProgressWithContextRow::fetch_all_for_user(state.mm(), user.user_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(Progress::get_resource_type(), e))?;

    let progress = ProgressWithContext::from_rows(rows)
        .map_err(|e| WebError::resource_fetch_error(Progress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(progress)))
}
