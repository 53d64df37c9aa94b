//! Palette deletion

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::{db, AppState};

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub count: u64,
}

/// DELETE /palettes/:id
pub async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    match db::delete_palette(&state.db, id).await {
        Ok(()) => {
            info!("Deleted palette {}", id);
            Ok(Json(DeleteResponse {
                message: format!("Palette {} deleted", id),
                id,
            }))
        }
        Err(moodhue_common::Error::NotFound(msg)) => {
            warn!("Delete requested for missing palette {}", id);
            Err(ApiError::NotFound(msg))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /palettes/clear-all
pub async fn clear_all_palettes(State(state): State<AppState>) -> ApiResult<Json<ClearResponse>> {
    let count = db::delete_all(&state.db).await?;
    info!("Cleared {} palettes", count);

    Ok(Json(ClearResponse {
        message: format!("Deleted {} palettes", count),
        count,
    }))
}
