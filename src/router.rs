use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate_jwt;
use crate::modules::auth::router::init_auth_router;
use crate::state::AppState;
use anyhow::anyhow;
use axum::http::{HeaderValue, Method};
use jobly_core::AppError;
use axum::{Json, Router, middleware, routing::get};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::not_found(anyhow!("Not Found"))
}

pub fn init_router(state: AppState) -> Router {
    build_router(state, Router::new())
}

/// Mounts `api` under `/api` alongside the built-in routes.
///
/// Every route, including those in `api`, runs behind [`authenticate_jwt`],
/// so guards installed on `api` always see a populated context.
pub fn build_router(state: AppState, api: Router<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest("/api", api.nest("/auth", init_auth_router()))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate_jwt))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter(|origin| origin.as_str() != "*")
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
