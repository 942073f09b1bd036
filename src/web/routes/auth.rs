use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Duration;
use serde::Deserialize;

use crate::{
    Config, auth,
    auth::{UserClaims, hash_password, verify_password},
    model::{
        ResourceTyped,
        entity::{UserEntity, UserEntityCreate},
    },
    web::{
        AppState, WebError, WebResult,
        dto::auth::{AuthResponse, UserPublic},
        error::ErrorResponse,
    },
};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .with_state(state)
}

async fn issue_token(user: &UserEntity) -> WebResult<String> {
    let timestamp = (chrono::Utc::now() + Duration::days(1)).timestamp();
    let secret = Config::get_or_init(cfg!(debug_assertions)).await.app().jwt();

    let claims = UserClaims {
        sub: user.id().to_string(),
        email: user.email().to_string(),
        exp: timestamp,
    };
    let token = auth::generate_token(claims, secret)
        .map_err(|e| WebError::server_crypt_error(e.into()))?;
    Ok(token)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterBody,
    description = "Creates a new student account and signs it in",
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Email taken or input invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub(crate) async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterBody>,
) -> WebResult<impl IntoResponse> {
    if payload.email.is_empty()
        || !payload.email.contains('@')
        || payload.password.is_empty()
        || payload.name.is_empty()
    {
        return Err(WebError::registration_invalid());
    }

    let hash = hash_password(&payload.password).map_err(WebError::server_crypt_error)?;
    let payload = UserEntityCreate {
        email: payload.email,
        password_hash: hash,
        name: payload.name,
    };

    // No pre-flight SELECT: the unique constraint on email is the
    // existence check, so two racing registrations cannot both win.
    let created = UserEntity::create(state.mm(), payload).await.map_err(|e| {
        if e.is_unique_violation() {
            WebError::registration_duplicate()
        } else {
            WebError::resource_fetch_error(UserEntity::get_resource_type(), e)
        }
    })?;

    let token = issue_token(&created).await?;
    let response = AuthResponse {
        token,
        user: UserPublic::from(&created),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    description = "Authenticates a student by email and password",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 401, description = "Credentials invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "auth",
)]
pub(crate) async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginBody>,
) -> WebResult<impl IntoResponse> {
    let found = UserEntity::find_by_email(state.mm(), &payload.email)
        .await
        .map_err(|e| WebError::resource_fetch_error(UserEntity::get_resource_type(), e))?;

    // Unknown email and wrong password take the same exit so the response
    // does not leak which one happened.
    let Some(found) = found else {
        return Err(WebError::auth_invalid_credentials());
    };

    let is_verified =
        verify_password(found.hash(), &payload.password).map_err(WebError::server_crypt_error)?;

    if !is_verified {
        return Err(WebError::auth_invalid_credentials());
    }

    let token = issue_token(&found).await?;
    let response = AuthResponse {
        token,
        user: UserPublic::from(&found),
    };

    Ok((StatusCode::OK, Json(response)))
}
