use crate::domain::{CreateStadiumRequest, FieldError, Stadium};
use crate::transport::http::handlers::{health, stadiums};
use crate::transport::http::types::{ApiResponse, AppState, HealthResponse};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        health::readiness_handler,
        stadiums::list_stadiums_handler,
        stadiums::create_stadium_handler,
        stadiums::get_stadium_handler,
        stadiums::update_stadium_handler,
        stadiums::delete_stadium_handler
    ),
    components(schemas(
        Stadium,
        CreateStadiumRequest,
        FieldError,
        ApiResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// The stadium API routes, bound to `app_state`.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health::healthcheck_handler))
        .route("/readiness", get(health::readiness_handler))
        .route(
            "/stadiums",
            get(stadiums::list_stadiums_handler).post(stadiums::create_stadium_handler),
        )
        .route(
            "/stadiums/:id",
            get(stadiums::get_stadium_handler)
                .put(stadiums::update_stadium_handler)
                .delete(stadiums::delete_stadium_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Full application: API routes plus Swagger UI and permissive CORS.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
