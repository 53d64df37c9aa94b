//! Palette persistence for moodhue-api

mod palettes;

pub use palettes::{
    count_palettes, delete_all, delete_palette, distribution_by_emotion, insert_palette,
    list_recent, usage_by_method,
};
