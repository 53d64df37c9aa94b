//! Aggregate usage statistics

use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ApiResult;
use crate::{db, AppState};

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_palettes: i64,
    pub methods_usage: BTreeMap<String, i64>,
    pub emotions_distribution: BTreeMap<String, i64>,
    pub api_version: String,
}

/// GET /stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let total_palettes = db::count_palettes(&state.db).await?;
    let methods_usage = db::usage_by_method(&state.db).await?;
    let emotions_distribution = db::distribution_by_emotion(&state.db).await?;

    Ok(Json(StatsResponse {
        total_palettes,
        methods_usage,
        emotions_distribution,
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
