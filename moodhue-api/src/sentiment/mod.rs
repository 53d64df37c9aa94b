//! Sentiment signals, fusion and classification
//!
//! Two lexicon analyzers produce [`SentimentSignal`]s; [`fusion::fuse`]
//! combines them and [`classifier::classify`] turns the result into an
//! [`EmotionCategory`] with an [`IntensityTier`].

pub mod category;
pub mod classifier;
pub mod fusion;
pub mod pattern;
pub mod valence;

mod tokens;

use serde::Serialize;
use std::collections::BTreeMap;

pub use category::{CategoryInfo, EmotionCategory, IntensityTier};
pub use classifier::{classify, Classification};
pub use fusion::{fuse, FusedSentiment};
pub use pattern::PatternAnalyzer;
pub use valence::ValenceAnalyzer;

/// Output of one analyzer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSignal {
    /// Polarity in [-1, 1]
    pub polarity: f64,
    /// Subjectivity (pattern analyzer) or compound score (valence analyzer)
    pub secondary: f64,
    /// Named sub-scores for diagnostics
    pub details: BTreeMap<String, f64>,
}

impl SentimentSignal {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            secondary: 0.0,
            details: BTreeMap::new(),
        }
    }
}

/// Round to 3 decimals for display
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(-0.1236), -0.124);
        assert_eq!(round3(1.0), 1.0);
    }
}
