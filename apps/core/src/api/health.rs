//! Liveness handlers.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "grievance-bot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// GET /
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: Some(SERVICE_NAME.to_string()),
    })
}

/// GET /health - load balancer probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: None,
    })
}
