use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{
    Config, auth,
    web::{AppState, RequestContext, context::AuthenticatedUser, error::WebError},
};

/// Gate for protected routers. A request with no Authorization header is
/// rejected with 401; a header whose token cannot be verified (wrong
/// scheme, bad signature, malformed, expired) with 403. On success the
/// decoded claims land in the request extensions as a `RequestContext`.
pub async fn require_bearer_fn(
    State(_state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(header) => header,
        None => return Err(WebError::auth_required()),
    };

    let header = header
        .to_str()
        .map_err(|_| WebError::auth_token_invalid("header is not valid utf-8"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| WebError::auth_token_invalid("expected Bearer scheme"))?;

    let use_local = cfg!(debug_assertions);
    let secret = Config::get_or_init(use_local).await.app().jwt();
    let data =
        auth::process_token(token, secret).map_err(|e| WebError::auth_token_invalid(e.to_string()))?;

    let id = data
        .claims
        .sub
        .parse::<uuid::Uuid>()
        .map_err(|_| WebError::auth_token_invalid("sub claim is not a uuid"))?;

    req.extensions_mut().insert(RequestContext::new(Some(
        AuthenticatedUser::new(id, data.claims.email),
    )));

    Ok(next.run(req).await)
}
