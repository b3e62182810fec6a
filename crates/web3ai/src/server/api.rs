//! HTTP routes for service info and health checks.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::instrument;

use crate::config::Settings;

/// Version reported by every endpoint.
pub const API_VERSION: &str = "1.0.0";

/// Fixed greeting returned by `/`.
pub const ROOT_MESSAGE: &str = "Web3AI API";

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub network: String,
}

/// Body of `GET /api/info`.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app_name: String,
    pub model_name: String,
    pub network: String,
    pub version: &'static str,
}

/// Creates the API router.
pub fn create_router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/info", get(api_info))
        .layer(permissive_cors())
        .with_state(settings)
}

/// Every origin, method and header, with credentials.
///
/// A wildcard origin cannot be combined with credentials, so the request's
/// own values are mirrored back instead. Development use only.
fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Root endpoint.
#[instrument(skip_all)]
async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: ROOT_MESSAGE,
            version: API_VERSION,
            status: "running",
        }),
    )
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check(State(settings): State<Arc<Settings>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            model: settings.model_name.clone(),
            network: settings.network.clone(),
        }),
    )
}

/// API information endpoint.
#[instrument(skip_all)]
async fn api_info(State(settings): State<Arc<Settings>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(InfoResponse {
            app_name: settings.app_name.clone(),
            model_name: settings.model_name.clone(),
            network: settings.network.clone(),
            version: API_VERSION,
        }),
    )
}
