use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub struct BearerAuthModifier;

impl Modify for BearerAuthModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(schema) = openapi.components.as_mut() {
            schema.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::auth::register_handler,
        crate::web::routes::auth::login_handler,
        crate::web::routes::subjects::subjects_list_handler,
        crate::web::routes::subjects::subjects_get_handler,
        crate::web::routes::lessons::lessons_get_handler,
        crate::web::routes::progress::progress_submit_handler,
        crate::web::routes::progress::progress_list_handler,
    ),
    modifiers(&BearerAuthModifier),
)]
pub struct ApiDoc;
