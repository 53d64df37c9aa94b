//! moodhue-api library - text sentiment to color palettes
//!
//! Analyzes free text with two lexicon analyzers, classifies the fused
//! sentiment into one of seven emotional levels and renders a five-color
//! palette for it. Results are kept in SQLite for the gallery and stats.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod sentiment;
pub mod translate;

use pipeline::Analyzers;
use translate::Translator;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Palette database pool
    pub db: SqlitePool,
    pub analyzers: Analyzers,
    pub translator: Translator,
}

impl AppState {
    pub fn new(db: SqlitePool, translator: Translator) -> Self {
        Self {
            db,
            analyzers: Analyzers::default(),
            translator,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(api::analyze_text))
        .route("/gallery", get(api::get_gallery))
        .route("/stats", get(api::get_stats))
        .route("/palettes/clear-all", delete(api::clear_all_palettes))
        .route("/palettes/:id", delete(api::delete_palette))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
