//! Text-to-palette pipeline
//!
//! analyze (one or two signals) → classify → generate palette, falling back
//! to the polarity-based generator when the category generator fails.
//! Everything here is synchronous and free of I/O; translation and
//! persistence happen in the HTTP handlers around it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::palette::{self, Color, Energy, Harmony, Palette, PaletteError, Temperature, PALETTE_SIZE};
use crate::sentiment::{
    classify, fuse, round3, Classification, PatternAnalyzer, SentimentSignal, ValenceAnalyzer,
};

/// Sentiment method requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMethod {
    /// Pattern analyzer alone
    TextBlob,
    /// Valence analyzer alone
    Vader,
    /// Fusion of both analyzers
    Hybrid,
    /// Same fusion as `Hybrid`, kept as a separate wire name
    Enhanced,
}

impl AnalysisMethod {
    pub const ALL: [AnalysisMethod; 4] = [
        AnalysisMethod::TextBlob,
        AnalysisMethod::Vader,
        AnalysisMethod::Hybrid,
        AnalysisMethod::Enhanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::TextBlob => "textblob",
            AnalysisMethod::Vader => "vader",
            AnalysisMethod::Hybrid => "hybrid",
            AnalysisMethod::Enhanced => "enhanced",
        }
    }
}

impl Default for AnalysisMethod {
    fn default() -> Self {
        AnalysisMethod::Hybrid
    }
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = AnalysisMethod::ALL.iter().map(|m| m.as_str()).collect();
                format!("method must be one of: {}", valid.join(", "))
            })
    }
}

/// Polarity and confidence ready for classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReading {
    /// In [-1, 1]
    pub polarity: f64,
    /// In [0, 1]
    pub confidence: f64,
    pub analysis: BTreeMap<String, f64>,
}

/// The two stateless analyzers
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzers {
    pub pattern: PatternAnalyzer,
    pub valence: ValenceAnalyzer,
}

impl Analyzers {
    /// Score `text` with the requested method
    ///
    /// Single-signal confidence is `1 - subjectivity` (pattern) or
    /// `|compound|` (valence); fused methods use signal agreement.
    pub fn analyze(&self, text: &str, method: AnalysisMethod) -> SentimentReading {
        match method {
            AnalysisMethod::TextBlob => {
                let signal = self.pattern.analyze(text);
                let analysis = BTreeMap::from([("subjectivity".to_string(), round3(signal.secondary))]);
                reading(signal.polarity, 1.0 - signal.secondary, analysis)
            }
            AnalysisMethod::Vader => {
                let signal = self.valence.analyze(text);
                reading(signal.polarity, signal.polarity.abs(), signal.details)
            }
            AnalysisMethod::Hybrid | AnalysisMethod::Enhanced => {
                let primary = self.pattern.analyze(text);
                let secondary = self.valence.analyze(text);
                fused_reading(&primary, &secondary)
            }
        }
    }
}

fn fused_reading(primary: &SentimentSignal, secondary: &SentimentSignal) -> SentimentReading {
    let fused = fuse(primary, secondary);
    reading(fused.polarity, fused.confidence, fused.analysis_details)
}

fn reading(polarity: f64, confidence: f64, analysis: BTreeMap<String, f64>) -> SentimentReading {
    SentimentReading {
        polarity: clamp_finite(polarity, -1.0, 1.0),
        confidence: clamp_finite(confidence, 0.0, 1.0),
        analysis,
    }
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        0.0
    }
}

/// Palette metadata returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionDetails {
    pub emotion: String,
    pub description: String,
    pub temperature: Temperature,
    pub harmony: Harmony,
    pub mood: String,
    pub energy: Energy,
    pub color_meanings: Vec<String>,
    pub analysis: BTreeMap<String, f64>,
}

/// Colors and metadata, from either generator
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteOutcome {
    pub colors: [Color; PALETTE_SIZE],
    pub details: EmotionDetails,
    pub used_fallback: bool,
}

impl PaletteOutcome {
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }
}

/// Resolve a generator attempt, switching to the fallback on error
///
/// The fallback's metadata is deliberately generic: the category's emotion
/// name and neutral labels for everything the generator would have derived.
pub fn resolve_palette(
    attempt: Result<Palette, PaletteError>,
    reading: &SentimentReading,
    classification: &Classification,
) -> PaletteOutcome {
    match attempt {
        Ok(palette) => PaletteOutcome {
            colors: palette.colors,
            details: EmotionDetails {
                emotion: palette.emotion,
                description: palette.description,
                temperature: palette.temperature,
                harmony: palette.harmony,
                mood: palette.mood,
                energy: palette.energy,
                color_meanings: palette.color_meanings,
                analysis: reading.analysis.clone(),
            },
            used_fallback: false,
        },
        Err(e) => {
            warn!("Palette generator failed, using fallback: {}", e);
            PaletteOutcome {
                colors: palette::generate_fallback(reading.polarity, reading.confidence),
                details: EmotionDetails {
                    emotion: classification.info.emotion.to_string(),
                    description: "Palette generated with the fallback algorithm".to_string(),
                    temperature: Temperature::Neutral,
                    harmony: Harmony::Basic,
                    mood: "neutral".to_string(),
                    energy: Energy::Medium,
                    color_meanings: Vec::new(),
                    analysis: reading.analysis.clone(),
                },
                used_fallback: true,
            }
        }
    }
}

/// Full result of analyzing one text
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub reading: SentimentReading,
    pub classification: Classification,
    pub palette: PaletteOutcome,
}

/// Run the pipeline on already-translated text
pub fn run(analyzers: &Analyzers, text: &str, method: AnalysisMethod) -> AnalysisOutcome {
    let reading = analyzers.analyze(text, method);
    let classification = classify(reading.polarity, reading.confidence);
    let attempt = palette::generate(classification.category, reading.confidence);
    let palette = resolve_palette(attempt, &reading, &classification);

    AnalysisOutcome {
        reading,
        classification,
        palette,
    }
}
