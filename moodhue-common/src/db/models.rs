//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw `palettes` row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaletteRow {
    pub id: i64,
    pub input_text: String,
    pub translated_text: Option<String>,
    /// Polarity formatted with 3 decimals
    pub polarity: String,
    /// Comma-joined `#rrggbb` values
    pub colors: String,
    pub analysis_method: String,
    pub confidence_score: Option<f64>,
    pub sentiment_label: Option<String>,
    pub intensity: Option<String>,
    pub emotion_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Palette as returned by the gallery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredPalette {
    pub id: i64,
    pub input_text: String,
    pub translated_text: Option<String>,
    pub polarity: String,
    pub colors: Vec<String>,
    pub analysis_method: String,
    pub confidence_score: Option<f64>,
    pub sentiment_label: Option<String>,
    pub intensity: Option<String>,
    pub emotion_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PaletteRow> for StoredPalette {
    fn from(row: PaletteRow) -> Self {
        let colors = split_colors(&row.colors);
        Self {
            id: row.id,
            input_text: row.input_text,
            translated_text: row.translated_text,
            polarity: row.polarity,
            colors,
            analysis_method: row.analysis_method,
            confidence_score: row.confidence_score,
            sentiment_label: row.sentiment_label,
            intensity: row.intensity,
            emotion_type: row.emotion_type,
            created_at: row.created_at,
        }
    }
}

/// Values for a new `palettes` row
#[derive(Debug, Clone)]
pub struct NewPalette {
    pub input_text: String,
    pub translated_text: String,
    pub polarity: f64,
    pub colors: Vec<String>,
    pub analysis_method: String,
    pub confidence_score: f64,
    pub sentiment_label: String,
    pub intensity: String,
    pub emotion_type: String,
}

impl NewPalette {
    /// Storage form of the polarity column
    pub fn polarity_text(&self) -> String {
        format!("{:.3}", self.polarity)
    }

    /// Storage form of the colors column
    pub fn colors_text(&self) -> String {
        self.colors.join(",")
    }
}

fn split_colors(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
