use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use spatrem_core::domain::health::{entities::UpstreamHealthStatus, ports::HealthCheckService};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Liveness {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(paths(get_live, get_ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = Liveness)
    ),
)]
pub async fn get_live() -> Response<Liveness> {
    Response::OK(Liveness {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Runs a trivial query against the knowledge base endpoint.",
    responses(
        (status = 200, body = UpstreamHealthStatus),
        (status = 503, description = "Knowledge base unavailable")
    ),
)]
pub async fn get_ready(
    State(state): State<AppState>,
) -> Result<Response<UpstreamHealthStatus>, ApiError> {
    let status = state
        .service
        .readiness()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;

    Ok(Response::OK(status))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(get_live))
        .route(&format!("{}/health/ready", root_path), get(get_ready))
}
