//! Two-signal sentiment fusion
//!
//! The secondary (valence) signal carries more weight because it handles
//! negation and degree modifiers. Confidence is the agreement between the
//! two polarities, floored at [`CONFIDENCE_FLOOR`].

use serde::Serialize;
use std::collections::BTreeMap;

use super::{round3, SentimentSignal};

const PRIMARY_WEIGHT: f64 = 0.4;
const SECONDARY_WEIGHT: f64 = 0.6;

/// Confidence reported at maximal disagreement
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Combined polarity and agreement-based confidence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusedSentiment {
    pub polarity: f64,
    pub confidence: f64,
    /// Rounded diagnostic values: per-signal polarity and agreement
    pub analysis_details: BTreeMap<String, f64>,
}

/// Fuse a primary and secondary signal
pub fn fuse(primary: &SentimentSignal, secondary: &SentimentSignal) -> FusedSentiment {
    let polarity = SECONDARY_WEIGHT * secondary.polarity + PRIMARY_WEIGHT * primary.polarity;
    let agreement = 1.0 - (primary.polarity - secondary.polarity).abs() / 2.0;
    let confidence = agreement.max(CONFIDENCE_FLOOR);

    let analysis_details = BTreeMap::from([
        ("primary_polarity".to_string(), round3(primary.polarity)),
        ("secondary_polarity".to_string(), round3(secondary.polarity)),
        ("agreement_score".to_string(), round3(agreement)),
    ]);

    FusedSentiment {
        polarity,
        confidence,
        analysis_details,
    }
}
