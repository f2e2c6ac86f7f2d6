//! Health check endpoint

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
