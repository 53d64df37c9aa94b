//! Text analysis endpoint
//!
//! validate → translate → pipeline → persist → respond. Persistence is
//! best-effort: a failed insert is logged and the analysis still returned.

use axum::{extract::State, Json};
use moodhue_common::db::models::NewPalette;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::pipeline::{self, AnalysisMethod, EmotionDetails};
use crate::sentiment::{round3, IntensityTier};
use crate::{db, AppState};

/// Shortest accepted text, in characters (after trimming)
pub const MIN_TEXT_CHARS: usize = 2;
/// Longest accepted text, in characters (after trimming)
pub const MAX_TEXT_CHARS: usize = 1000;

/// Request body for POST /analyze
#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub language: Option<String>,
}

fn default_method() -> String {
    AnalysisMethod::default().as_str().to_string()
}

/// Validated request
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub text: String,
    pub method: AnalysisMethod,
    pub language: Option<String>,
}

impl TextInput {
    /// Trim and check the text, parse the method
    pub fn validate(self) -> Result<AnalysisRequest, ApiError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ApiError::BadRequest("text must not be empty".to_string()));
        }

        let chars = text.chars().count();
        if chars < MIN_TEXT_CHARS {
            return Err(ApiError::BadRequest(format!(
                "text must be at least {} characters",
                MIN_TEXT_CHARS
            )));
        }
        if chars > MAX_TEXT_CHARS {
            return Err(ApiError::BadRequest(format!(
                "text must be at most {} characters",
                MAX_TEXT_CHARS
            )));
        }

        let method = self.method.trim().parse::<AnalysisMethod>().map_err(ApiError::BadRequest)?;

        Ok(AnalysisRequest {
            text: text.to_string(),
            method,
            language: self.language.filter(|lang| !lang.trim().is_empty()),
        })
    }
}

/// Response body for POST /analyze
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub colors: Vec<String>,
    pub polarity: f64,
    pub sentiment: String,
    pub confidence: f64,
    pub method_used: AnalysisMethod,
    pub translated_text: String,
    pub original_text: String,
    pub intensity: IntensityTier,
    pub emotion_details: EmotionDetails,
}

/// POST /analyze
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(input): Json<TextInput>,
) -> ApiResult<Json<AnalysisResponse>> {
    let request = input.validate()?;

    let translated = state
        .translator
        .translate_or_original(&request.text, request.language.as_deref())
        .await;

    let outcome = pipeline::run(&state.analyzers, &translated, request.method);
    let classification = &outcome.classification;
    let colors = outcome.palette.hex_colors();

    info!(
        "Analyzed {} chars with {}: {} (polarity {:.3}, confidence {:.3}{})",
        request.text.chars().count(),
        request.method,
        classification.category,
        outcome.reading.polarity,
        outcome.reading.confidence,
        if outcome.palette.used_fallback { ", fallback palette" } else { "" }
    );

    let record = NewPalette {
        input_text: request.text.clone(),
        translated_text: translated.clone(),
        polarity: outcome.reading.polarity,
        colors: colors.clone(),
        analysis_method: request.method.as_str().to_string(),
        confidence_score: round3(outcome.reading.confidence),
        sentiment_label: classification.info.label.to_string(),
        intensity: classification.intensity.as_str().to_string(),
        emotion_type: outcome.palette.details.emotion.clone(),
    };
    if let Err(e) = db::insert_palette(&state.db, &record).await {
        warn!("Failed to store palette: {}", e);
    }

    Ok(Json(AnalysisResponse {
        colors,
        polarity: round3(outcome.reading.polarity),
        sentiment: classification.info.label.to_string(),
        confidence: round3(outcome.reading.confidence),
        method_used: request.method,
        translated_text: translated,
        original_text: request.text,
        intensity: classification.intensity,
        emotion_details: outcome.palette.details,
    }))
}
