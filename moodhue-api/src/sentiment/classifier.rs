//! Polarity/confidence classification
//!
//! Thresholds are strict: a polarity exactly on a boundary belongs to the
//! bucket closer to neutral (0.6 is positive, not very positive). Positive
//! checks run before negative ones; the ranges never overlap.

use serde::Serialize;

use super::category::{CategoryInfo, EmotionCategory, IntensityTier};

const VERY_THRESHOLD: f64 = 0.6;
const PLAIN_THRESHOLD: f64 = 0.3;
const SLIGHT_THRESHOLD: f64 = 0.05;

/// Category, intensity, and the category's static metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: EmotionCategory,
    pub intensity: IntensityTier,
    pub intensity_factor: f64,
    pub info: &'static CategoryInfo,
}

/// Classify a polarity in [-1, 1] with its confidence in [0, 1]
///
/// Total: any finite input yields exactly one category.
pub fn classify(polarity: f64, confidence: f64) -> Classification {
    let category = category_for(polarity);
    let intensity_factor = polarity.abs() * confidence;

    Classification {
        category,
        intensity: IntensityTier::from_factor(intensity_factor),
        intensity_factor,
        info: category.info(),
    }
}

fn category_for(polarity: f64) -> EmotionCategory {
    if polarity > VERY_THRESHOLD {
        EmotionCategory::VeryPositive
    } else if polarity > PLAIN_THRESHOLD {
        EmotionCategory::Positive
    } else if polarity > SLIGHT_THRESHOLD {
        EmotionCategory::SlightlyPositive
    } else if polarity < -VERY_THRESHOLD {
        EmotionCategory::VeryNegative
    } else if polarity < -PLAIN_THRESHOLD {
        EmotionCategory::Negative
    } else if polarity < -SLIGHT_THRESHOLD {
        EmotionCategory::SlightlyNegative
    } else {
        EmotionCategory::Neutral
    }
}
