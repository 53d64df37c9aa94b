//! Valence analyzer backed by the VADER lexicon and rules
//!
//! Scoring (negation, boosters, caps emphasis, contrastive "but",
//! punctuation) is delegated to `vader_sentiment`. This module adapts its
//! score map into a [`SentimentSignal`].

use std::collections::BTreeMap;

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{round3, SentimentSignal};

const SCORE_KEYS: [&str; 4] = ["pos", "neg", "neu", "compound"];

/// Stateless valence analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceAnalyzer;

impl ValenceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// `polarity` and `secondary` are both the compound score in [-1, 1]
    ///
    /// Details carry `pos`, `neg`, `neu` proportions and `compound`.
    pub fn analyze(&self, text: &str) -> SentimentSignal {
        if text.trim().is_empty() {
            return scores_signal(&BTreeMap::new());
        }

        // The analyzer only borrows the crate's static lexicons
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let scores: BTreeMap<&str, f64> = SCORE_KEYS
            .iter()
            .filter_map(|key| scores.get(key).map(|value| (*key, *value)))
            .collect();

        scores_signal(&scores)
    }
}

fn scores_signal(scores: &BTreeMap<&str, f64>) -> SentimentSignal {
    let score = |key: &str| {
        scores
            .get(key)
            .copied()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    };
    let compound = score("compound").clamp(-1.0, 1.0);

    let details = SCORE_KEYS
        .iter()
        .map(|key| (key.to_string(), round3(score(key))))
        .collect();

    SentimentSignal {
        polarity: compound,
        secondary: compound,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        ValenceAnalyzer::new().analyze(text).polarity
    }

    #[test]
    fn test_polarity_direction() {
        assert!(compound("I am happy") > 0.0);
        assert!(compound("I am sad") < 0.0);
    }

    #[test]
    fn test_common_emotional_words() {
        assert!(compound("I am thrilled and grateful for this gift") > 0.05);
        assert!(compound("I feel devastated and heartbroken") < -0.05);
        assert!(compound("This is a disaster, I am furious") < -0.05);
    }

    #[test]
    fn test_negation_reverses() {
        assert!(compound("I am not happy") < 0.0);
        assert!(compound("I don't hate it") > 0.0);
    }

    #[test]
    fn test_boosters_and_dampeners() {
        assert!(compound("very happy") > compound("happy"));
        assert!(compound("very sad") < compound("sad"));
    }

    #[test]
    fn test_exclamations_amplify() {
        assert!(compound("I am happy!!!") > compound("I am happy"));
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        assert!(compound("The food was good but the service was terrible") < 0.0);
        assert!(compound("The food was terrible but the dessert was wonderful") > 0.0);
    }

    #[test]
    fn test_details_carry_all_scores() {
        let signal = ValenceAnalyzer::new().analyze("I love this but I am tired");
        for key in SCORE_KEYS {
            assert!(signal.details.contains_key(key), "missing {}", key);
        }
        let sum = signal.details["pos"] + signal.details["neg"] + signal.details["neu"];
        assert!((sum - 1.0).abs() < 0.01);
        assert!((-1.0..=1.0).contains(&signal.polarity));
    }

    #[test]
    fn test_neutral_text() {
        let signal = ValenceAnalyzer::new().analyze("the table has four legs");
        assert_eq!(signal.polarity, 0.0);
        assert_eq!(signal.details["pos"], 0.0);
        assert_eq!(signal.details["neg"], 0.0);
    }

    #[test]
    fn test_empty_text() {
        let signal = ValenceAnalyzer::new().analyze("   ");
        assert_eq!(signal.polarity, 0.0);
        assert_eq!(signal.details["compound"], 0.0);
    }
}
