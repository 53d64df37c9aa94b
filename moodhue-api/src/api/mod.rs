//! HTTP API handlers for moodhue-api

pub mod analyze;
pub mod gallery;
pub mod health;
pub mod palettes;
pub mod stats;

pub use analyze::analyze_text;
pub use gallery::get_gallery;
pub use health::{health_routes, root};
pub use palettes::{clear_all_palettes, delete_palette};
pub use stats::get_stats;
