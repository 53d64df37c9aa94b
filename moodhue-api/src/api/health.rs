//! Service banner and health check

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub features: Vec<String>,
}

/// Root banner response
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
}

/// GET /
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Moodhue API: text sentiment to color palettes".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "moodhue-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: ["translation", "hybrid_analysis", "emotion_palettes", "gallery", "stats"]
            .iter()
            .map(|f| f.to_string())
            .collect(),
    })
}

/// Build banner and health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
