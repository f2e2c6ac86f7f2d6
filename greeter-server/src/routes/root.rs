//! Root greeting endpoint

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

impl RootResponse {
    pub fn running() -> Self {
        Self {
            message: "Hello World",
            status: "running",
        }
    }
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::running())
}
