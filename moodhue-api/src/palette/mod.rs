//! Emotion-to-color palette generation
//!
//! Two generators share the [`Color`] type:
//! - [`generator`]: category rules with harmony schemes and metadata. May
//!   fail with a [`PaletteError`].
//! - [`fallback`]: polarity/confidence arithmetic only. Never fails.
//!
//! Both produce exactly [`PALETTE_SIZE`] colors.

pub mod color;
pub mod fallback;
pub mod generator;

use serde::Serialize;
use thiserror::Error;

pub use color::{Color, Hsl};
pub use fallback::generate_fallback;
pub use generator::{generate, generate_for_key};

/// Number of colors in every palette
pub const PALETTE_SIZE: usize = 5;

/// Recoverable palette generator failure
///
/// Callers switch to [`generate_fallback`] on any variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Category key is not one of the seven emotion levels
    #[error("unknown emotion category: '{0}'")]
    UnknownCategory(String),

    /// Non-finite or out-of-range value reached color conversion
    #[error("color math domain error: {0}")]
    ColorMathDomain(String),
}

/// Perceived color temperature of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    /// Temperature of a hue position in degrees
    ///
    /// Red/orange/yellow are warm, green/blue/violet cool, and the
    /// magenta band between violet and red is neutral.
    pub fn from_hue(hue: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        if !(75.0..330.0).contains(&hue) {
            Temperature::Warm
        } else if hue < 285.0 {
            Temperature::Cool
        } else {
            Temperature::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
        }
    }
}

/// Hue arrangement used to place the five colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    /// Base hue against its opposite plus two near-complements
    Complementary,
    /// Neighboring hues within a confidence-scaled spread
    Analogous,
    /// Three equidistant hues plus two in-between
    Triadic,
    /// Four hues at right angles, covering the whole wheel
    Balanced,
    /// Fallback arrangement: base hue and ±30°
    Basic,
}

impl Harmony {
    /// Hue offsets in degrees from the base hue, one per color
    ///
    /// `spread` (degrees at full confidence) only affects `Analogous`,
    /// which narrows as confidence drops.
    pub fn hue_offsets(&self, spread: f64, confidence: f64) -> [f64; PALETTE_SIZE] {
        match self {
            Harmony::Complementary => [0.0, 180.0, 30.0, 210.0, 150.0],
            Harmony::Triadic => [0.0, 120.0, 240.0, 60.0, 300.0],
            Harmony::Balanced => [0.0, 90.0, 180.0, 270.0, 45.0],
            Harmony::Basic => [0.0, -30.0, 0.0, 30.0, 0.0],
            Harmony::Analogous => {
                // Positions bend slightly toward the end
                let spread = spread * (0.6 + 0.4 * confidence);
                let last = (PALETTE_SIZE - 1) as f64;
                std::array::from_fn(|i| {
                    let position = (i as f64 / last).powf(0.8);
                    (position - 0.5) * spread
                })
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Balanced => "balanced",
            Harmony::Basic => "basic",
        }
    }
}

/// Visual energy of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Low,
    Medium,
    High,
}

impl Energy {
    /// One level down (saturates at `Low`)
    pub fn lowered(self) -> Self {
        match self {
            Energy::High => Energy::Medium,
            Energy::Medium | Energy::Low => Energy::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
        }
    }
}

/// Five colors plus descriptive metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub colors: [Color; PALETTE_SIZE],
    pub emotion: String,
    pub description: String,
    pub temperature: Temperature,
    pub harmony: Harmony,
    pub mood: String,
    pub energy: Energy,
    pub color_meanings: Vec<String>,
}

impl Palette {
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }
}
