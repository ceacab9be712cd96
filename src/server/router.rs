use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, contact, dashboard, manage},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "House of Cuddles", description = "House of Cuddles community API"),
    tags(
        (name = "dashboard", description = "Public dashboard of hosted websites and game servers"),
        (name = "manage", description = "Admin back office mutations"),
        (name = "contact", description = "Contact form intake"),
        (name = "auth", description = "Discord sign-in")
    )
)]
struct ApiDoc;

/// Builds every API route with its OpenAPI document and Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(dashboard::get_dashboard))
        .routes(routes!(manage::add_entity, manage::delete_entity))
        .routes(routes!(contact::create_contact_request))
        .routes(routes!(contact::get_captcha))
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

/// Builds the full application with request tracing and CORS for the frontend origin.
///
/// # Returns
/// - `Ok(Router)` - Application ready to serve
/// - `Err(AppError::ConfigErr)` - `APP_URL` is not a valid header value
pub fn app(state: AppState) -> Result<Router, AppError> {
    let origin = HeaderValue::from_str(&state.app_url).map_err(|e| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        reason: e.to_string(),
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Ok(router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
