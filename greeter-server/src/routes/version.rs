//! Version endpoint
//!
//! Reports the published API version and deployment environment. Both are
//! fixed strings, independent of the crate version.

use axum::Json;
use serde::Serialize;

pub const API_VERSION: &str = "1.0.0";
pub const ENVIRONMENT: &str = "production";

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
    pub environment: &'static str,
}

impl VersionResponse {
    pub fn current() -> Self {
        Self {
            version: API_VERSION,
            environment: ENVIRONMENT,
        }
    }
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse::current())
}
