//! Emotion categories and intensity tiers

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Seven ordered emotional levels, most negative first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    VeryNegative,
    Negative,
    SlightlyNegative,
    Neutral,
    SlightlyPositive,
    Positive,
    VeryPositive,
}

/// Fixed descriptive metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Human label, e.g. "very positive"
    pub label: &'static str,
    /// Short emotion name
    pub emotion: &'static str,
    pub description: &'static str,
}

impl EmotionCategory {
    pub const ALL: [EmotionCategory; 7] = [
        EmotionCategory::VeryNegative,
        EmotionCategory::Negative,
        EmotionCategory::SlightlyNegative,
        EmotionCategory::Neutral,
        EmotionCategory::SlightlyPositive,
        EmotionCategory::Positive,
        EmotionCategory::VeryPositive,
    ];

    /// Position in the ordered scale (0 = very negative, 6 = very positive)
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Snake-case key, e.g. "slightly_positive"
    pub fn key(&self) -> &'static str {
        match self {
            EmotionCategory::VeryNegative => "very_negative",
            EmotionCategory::Negative => "negative",
            EmotionCategory::SlightlyNegative => "slightly_negative",
            EmotionCategory::Neutral => "neutral",
            EmotionCategory::SlightlyPositive => "slightly_positive",
            EmotionCategory::Positive => "positive",
            EmotionCategory::VeryPositive => "very_positive",
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            EmotionCategory::VeryNegative => &CategoryInfo {
                label: "very negative",
                emotion: "Deep sorrow",
                description: "Intensely dark colors",
            },
            EmotionCategory::Negative => &CategoryInfo {
                label: "negative",
                emotion: "Sadness",
                description: "Dark, contemplative colors",
            },
            EmotionCategory::SlightlyNegative => &CategoryInfo {
                label: "slightly negative",
                emotion: "Mild melancholy",
                description: "Soft gray tones",
            },
            EmotionCategory::Neutral => &CategoryInfo {
                label: "neutral",
                emotion: "Neutrality",
                description: "Balanced, serene colors",
            },
            EmotionCategory::SlightlyPositive => &CategoryInfo {
                label: "slightly positive",
                emotion: "Gentle contentment",
                description: "Soft, calm colors",
            },
            EmotionCategory::Positive => &CategoryInfo {
                label: "positive",
                emotion: "Optimism",
                description: "Warm, hopeful colors",
            },
            EmotionCategory::VeryPositive => &CategoryInfo {
                label: "very positive",
                emotion: "Intense joy",
                description: "Vibrant, energetic colors",
            },
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EmotionCategory {
    type Err = String;

    /// Accepts keys and labels: "very_positive", "Very Positive", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(' ', "_").to_lowercase();
        EmotionCategory::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| s.to_string())
    }
}

/// Strength of the expressed emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl IntensityTier {
    /// Tier for `intensity_factor = |polarity| × confidence`
    pub fn from_factor(factor: f64) -> Self {
        if factor > 0.7 {
            IntensityTier::VeryHigh
        } else if factor > 0.4 {
            IntensityTier::High
        } else if factor > 0.2 {
            IntensityTier::Medium
        } else {
            IntensityTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityTier::Low => "low",
            IntensityTier::Medium => "medium",
            IntensityTier::High => "high",
            IntensityTier::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
