//! Recent palette listing

use axum::{
    extract::{Query, State},
    Json,
};
use moodhue_common::db::models::StoredPalette;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::{db, AppState};

/// Default number of palettes returned
pub const DEFAULT_LIMIT: i64 = 50;
/// Largest `limit` honored
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub total: usize,
    pub palettes: Vec<StoredPalette>,
}

/// GET /gallery?limit=N
///
/// Newest first. Negative limits return nothing; limits above
/// [`MAX_LIMIT`] are capped.
pub async fn get_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> ApiResult<Json<GalleryResponse>> {
    let limit = query.limit.clamp(0, MAX_LIMIT);
    let palettes = db::list_recent(&state.db, limit).await?;

    Ok(Json(GalleryResponse {
        total: palettes.len(),
        palettes,
    }))
}
