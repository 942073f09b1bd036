use std::path::PathBuf;

use crate::{
    Config,
    web::{AppState, doc::ApiDoc},
};
use axum::Router;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod lessons;
pub mod progress;
pub mod subjects;

pub fn build_app<S: Send + Sync + Clone + 'static>(
    state: AppState,
    config: &'static Config,
) -> Router<S> {
    // Everything that is not /api/* falls through to the client shell.
    // A missing index.html simply 404s, there is no server-side rendering.
    let static_dir = PathBuf::from(config.app().static_dir());
    let shell = ServeDir::new(&static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    let mut router = Router::new()
        .nest("/api/auth", auth::routes(state.clone()))
        .nest("/api/subjects", subjects::routes(state.clone()))
        .nest("/api/lessons", lessons::routes(state.clone()))
        .nest("/api", progress::routes(state.clone()))
        .fallback_service(shell)
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", openapi));
    }

    router
}
