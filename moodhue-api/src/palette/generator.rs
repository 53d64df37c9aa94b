//! Category-driven palette generator
//!
//! Every emotion category owns a [`CategoryRule`]: base hue, saturation and
//! lightness ranges, a harmony scheme, a mood and a base energy. Confidence
//! (clamped to [0.3, 1.0]) then decides how far into those ranges the
//! palette reaches:
//! - saturation rises with confidence, and is damped below 0.5 or boosted
//!   above 0.8;
//! - the light-to-dark ramp widens with confidence;
//! - analogous palettes spread their hues further apart;
//! - the base hue drifts a few degrees so nearby confidences stay distinct.
//!
//! Output is fully determined by `(category, confidence)`.

use tracing::debug;

use super::{Color, Energy, Harmony, Palette, PaletteError, Temperature, PALETTE_SIZE};
use crate::sentiment::EmotionCategory;

const MIN_CONFIDENCE: f64 = 0.3;
const MAX_CONFIDENCE: f64 = 1.0;

/// Confidence at which the hue drift is zero
const DRIFT_PIVOT: f64 = 0.65;
const DRIFT_DEGREES_PER_UNIT: f64 = 20.0;

const LOW_CONFIDENCE: f64 = 0.5;
const HIGH_CONFIDENCE: f64 = 0.8;
const LOW_CONFIDENCE_SATURATION: f64 = 0.8;
const HIGH_CONFIDENCE_SATURATION: f64 = 1.1;

/// Per-step saturation falloff after the lead color
const SATURATION_TAPER: f64 = 0.05;

/// Base hue, its two split complements and two flanking hues
const SPLIT_COMPLEMENTARY: [f64; PALETTE_SIZE] = [0.0, 150.0, 210.0, 60.0, -60.0];

const LIGHTNESS_FLOOR: f64 = 0.1;
const LIGHTNESS_CEILING: f64 = 0.92;

/// Static palette rule for one emotion category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRule {
    pub emotion: &'static str,
    pub base_hue: f64,
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
    pub harmony: Harmony,
    /// Analogous hue spread in degrees at full confidence
    pub spread: f64,
    /// Fixed hue offsets replacing the harmony's own layout
    pub offsets: Option<[f64; PALETTE_SIZE]>,
    pub mood: &'static str,
    pub energy: Energy,
}

/// Rule for a category
pub fn rule_for(category: EmotionCategory) -> CategoryRule {
    match category {
        EmotionCategory::VeryPositive => CategoryRule {
            emotion: "Euphoria",
            base_hue: 45.0,
            saturation: (0.75, 0.95),
            lightness: (0.55, 0.85),
            harmony: Harmony::Complementary,
            spread: 0.0,
            offsets: None,
            mood: "energetic",
            energy: Energy::High,
        },
        EmotionCategory::Positive => CategoryRule {
            emotion: "Joy",
            base_hue: 30.0,
            saturation: (0.6, 0.85),
            lightness: (0.5, 0.8),
            harmony: Harmony::Triadic,
            spread: 0.0,
            offsets: None,
            mood: "optimistic",
            energy: Energy::High,
        },
        EmotionCategory::SlightlyPositive => CategoryRule {
            emotion: "Serenity",
            base_hue: 180.0,
            saturation: (0.4, 0.7),
            lightness: (0.55, 0.85),
            harmony: Harmony::Analogous,
            spread: 80.0,
            offsets: None,
            mood: "peaceful",
            energy: Energy::Low,
        },
        EmotionCategory::Neutral => CategoryRule {
            emotion: "Equilibrium",
            base_hue: 210.0,
            saturation: (0.3, 0.6),
            lightness: (0.45, 0.75),
            harmony: Harmony::Balanced,
            spread: 0.0,
            offsets: None,
            mood: "balanced",
            energy: Energy::Medium,
        },
        EmotionCategory::SlightlyNegative => CategoryRule {
            emotion: "Melancholy",
            base_hue: 220.0,
            saturation: (0.3, 0.6),
            lightness: (0.35, 0.7),
            harmony: Harmony::Analogous,
            spread: 60.0,
            offsets: None,
            mood: "contemplative",
            energy: Energy::Low,
        },
        EmotionCategory::Negative => CategoryRule {
            emotion: "Sadness",
            base_hue: 240.0,
            saturation: (0.4, 0.7),
            lightness: (0.25, 0.6),
            harmony: Harmony::Analogous,
            spread: 30.0,
            offsets: None,
            mood: "somber",
            energy: Energy::Low,
        },
        EmotionCategory::VeryNegative => CategoryRule {
            emotion: "Anguish",
            base_hue: 0.0,
            saturation: (0.6, 0.9),
            lightness: (0.15, 0.5),
            harmony: Harmony::Complementary,
            spread: 0.0,
            offsets: Some(SPLIT_COMPLEMENTARY),
            mood: "intense",
            energy: Energy::High,
        },
    }
}

/// Generate the palette for a category key such as `"very positive"`
pub fn generate_for_key(key: &str, confidence: f64) -> Result<Palette, PaletteError> {
    let category: EmotionCategory = key
        .parse()
        .map_err(PaletteError::UnknownCategory)?;
    generate(category, confidence)
}

/// Generate the palette for a category
pub fn generate(category: EmotionCategory, confidence: f64) -> Result<Palette, PaletteError> {
    if !confidence.is_finite() {
        return Err(PaletteError::ColorMathDomain(format!(
            "confidence must be finite, got {confidence}"
        )));
    }

    let rule = rule_for(category);
    let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    let base_hue = (rule.base_hue + (confidence - DRIFT_PIVOT) * DRIFT_DEGREES_PER_UNIT)
        .rem_euclid(360.0);
    let offsets = rule
        .offsets
        .unwrap_or_else(|| rule.harmony.hue_offsets(rule.spread, confidence));
    let saturation = base_saturation(&rule, confidence);
    let lightness = lightness_ramp(&rule, confidence);

    let mut colors = [Color::new(0, 0, 0); PALETTE_SIZE];
    for (i, color) in colors.iter_mut().enumerate() {
        let hue = (base_hue + offsets[i]).rem_euclid(360.0);
        let s = (saturation * (1.0 - SATURATION_TAPER * i as f64)).clamp(0.0, 1.0);
        *color = Color::try_from_hsl(hue, s, lightness[i])?;
    }

    let temperature = match rule.harmony {
        // Four hues around the wheel read as neither warm nor cool
        Harmony::Balanced => Temperature::Neutral,
        _ => Temperature::from_hue(base_hue),
    };
    let energy = if confidence < LOW_CONFIDENCE {
        rule.energy.lowered()
    } else {
        rule.energy
    };

    debug!(
        category = category.key(),
        confidence,
        base_hue,
        harmony = rule.harmony.as_str(),
        "Generated palette"
    );

    Ok(Palette {
        colors,
        emotion: rule.emotion.to_string(),
        description: describe(category, temperature, energy, confidence),
        temperature,
        harmony: rule.harmony,
        mood: rule.mood.to_string(),
        energy,
        color_meanings: colors.iter().map(|c| meaning_for(c, category).to_string()).collect(),
    })
}

fn base_saturation(rule: &CategoryRule, confidence: f64) -> f64 {
    let (min, max) = rule.saturation;
    let saturation = min + (max - min) * confidence;

    let adjusted = if confidence < LOW_CONFIDENCE {
        saturation * LOW_CONFIDENCE_SATURATION
    } else if confidence > HIGH_CONFIDENCE {
        saturation * HIGH_CONFIDENCE_SATURATION
    } else {
        saturation
    };
    adjusted.min(1.0)
}

/// Strictly decreasing lightness, centered in the rule's range
fn lightness_ramp(rule: &CategoryRule, confidence: f64) -> [f64; PALETTE_SIZE] {
    let (min, max) = rule.lightness;
    let center = (min + max) / 2.0;
    let half_span = (max - min) / 2.0 * (0.5 + 0.5 * confidence);
    let last = (PALETTE_SIZE - 1) as f64;

    std::array::from_fn(|i| {
        let t = 1.0 - 2.0 * i as f64 / last;
        (center + half_span * t).clamp(LIGHTNESS_FLOOR, LIGHTNESS_CEILING)
    })
}

fn describe(
    category: EmotionCategory,
    temperature: Temperature,
    energy: Energy,
    confidence: f64,
) -> String {
    let phrases: [&str; 3] = match temperature {
        Temperature::Warm => [
            "warm colors that embrace the soul",
            "vibrant tones full of vital energy",
            "golden hues dancing with passion",
        ],
        Temperature::Cool => [
            "fresh colors whispering serenity",
            "bluish tones inviting contemplation",
            "glacial hues that calm the spirit",
        ],
        Temperature::Neutral => [
            "balanced colors in quiet harmony",
            "neutral tones conveying stability",
            "even hues like a zen garden",
        ],
    };
    let phrase = phrases[category.ordinal() % phrases.len()];

    let strength = if confidence > 0.7 {
        "intensely"
    } else if confidence > 0.4 {
        "moderately"
    } else {
        "subtly"
    };
    let character = match energy {
        Energy::High => "vibrant",
        Energy::Medium => "steady",
        Energy::Low => "gentle",
    };

    format!("{strength} {character} palette of {phrase}")
}

/// Psychological meaning of a color's hue family
fn meaning_for(color: &Color, category: EmotionCategory) -> &'static str {
    let hsl = color.to_hsl();
    let meanings: [&str; 3] = if hsl.s < 0.12 {
        ["balance", "neutrality", "sophistication"]
    } else {
        match hsl.h {
            h if h < 15.0 => ["passion", "energy", "strength"],
            h if h < 45.0 => ["creativity", "enthusiasm", "warmth"],
            h if h < 75.0 => ["joy", "optimism", "clarity"],
            h if h < 165.0 => ["growth", "harmony", "nature"],
            h if h < 255.0 => ["tranquility", "trust", "depth"],
            h if h < 285.0 => ["mystery", "spirituality", "transformation"],
            h if h < 315.0 => ["tenderness", "compassion", "love"],
            _ => ["passion", "energy", "strength"],
        }
    };
    meanings[category.ordinal() % meanings.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::color::is_hex_color;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_yields_five_hex_colors() {
        for category in EmotionCategory::ALL {
            for confidence in [0.0, 0.3, 0.45, 0.65, 0.85, 1.0] {
                let palette = generate(category, confidence).unwrap();
                assert_eq!(palette.colors.len(), PALETTE_SIZE);
                assert!(palette.hex_colors().iter().all(|c| is_hex_color(c)));
                assert_eq!(palette.color_meanings.len(), PALETTE_SIZE);
            }
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for category in EmotionCategory::ALL {
            for step in 0..=100 {
                let confidence = step as f64 / 100.0;
                let palette = generate(category, confidence).unwrap();
                let unique: HashSet<_> = palette.colors.iter().collect();
                assert_eq!(
                    unique.len(),
                    PALETTE_SIZE,
                    "{:?} at {}: {:?}",
                    category,
                    confidence,
                    palette.colors
                );
            }
        }
    }

    #[test]
    fn test_very_negative_uses_split_complementary_hues() {
        // Confidence 0.65 leaves the base hue undrifted at 0°
        let palette = generate(EmotionCategory::VeryNegative, 0.65).unwrap();
        assert_eq!(palette.harmony, Harmony::Complementary);
        for (color, expected) in palette.colors.iter().zip([0.0, 150.0, 210.0, 60.0, 300.0]) {
            let hue = color.to_hsl().h;
            let distance = (hue - expected).abs().min(360.0 - (hue - expected).abs());
            assert!(distance < 3.0, "hue {} expected {}", hue, expected);
        }
    }

    #[test]
    fn test_deterministic() {
        for category in EmotionCategory::ALL {
            assert_eq!(generate(category, 0.62), generate(category, 0.62));
        }
    }

    #[test]
    fn test_lightness_ramp_is_strictly_decreasing() {
        for category in EmotionCategory::ALL {
            for confidence in [0.3, 1.0] {
                let ramp = lightness_ramp(&rule_for(category), confidence);
                assert!(ramp.windows(2).all(|w| w[0] > w[1]), "{:?} {:?}", category, ramp);
            }
        }
    }

    #[test]
    fn test_confidence_widens_ramp_and_saturation() {
        let rule = rule_for(EmotionCategory::Positive);
        let low = lightness_ramp(&rule, 0.3);
        let high = lightness_ramp(&rule, 1.0);
        assert!(high[0] - high[4] > low[0] - low[4]);
        assert!(base_saturation(&rule, 1.0) > base_saturation(&rule, 0.3));
    }

    #[test]
    fn test_analogous_spread_grows_with_confidence() {
        let narrow = Harmony::Analogous.hue_offsets(60.0, 0.3);
        let wide = Harmony::Analogous.hue_offsets(60.0, 1.0);
        assert!(wide[4] - wide[0] > narrow[4] - narrow[0]);
        assert!((wide[4] - wide[0] - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_below_floor_is_clamped() {
        assert_eq!(
            generate(EmotionCategory::Negative, 0.0),
            generate(EmotionCategory::Negative, 0.3)
        );
    }

    #[test]
    fn test_metadata_per_category() {
        let euphoric = generate(EmotionCategory::VeryPositive, 0.9).unwrap();
        assert_eq!(euphoric.emotion, "Euphoria");
        assert_eq!(euphoric.harmony, Harmony::Complementary);
        assert_eq!(euphoric.temperature, Temperature::Warm);
        assert_eq!(euphoric.energy, Energy::High);
        assert_eq!(euphoric.mood, "energetic");
        assert!(euphoric.description.starts_with("intensely vibrant"));

        let calm = generate(EmotionCategory::SlightlyPositive, 0.6).unwrap();
        assert_eq!(calm.harmony, Harmony::Analogous);
        assert_eq!(calm.temperature, Temperature::Cool);

        let neutral = generate(EmotionCategory::Neutral, 0.6).unwrap();
        assert_eq!(neutral.harmony, Harmony::Balanced);
        assert_eq!(neutral.temperature, Temperature::Neutral);

        let sad = generate(EmotionCategory::Negative, 0.6).unwrap();
        assert_eq!(sad.temperature, Temperature::Cool);
        assert_eq!(sad.mood, "somber");
    }

    #[test]
    fn test_low_confidence_lowers_energy() {
        assert_eq!(generate(EmotionCategory::Positive, 0.4).unwrap().energy, Energy::Medium);
        assert_eq!(generate(EmotionCategory::Positive, 0.6).unwrap().energy, Energy::High);
        assert!(generate(EmotionCategory::Positive, 0.4)
            .unwrap()
            .description
            .starts_with("subtly steady"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(
            generate_for_key("ecstatic", 0.8),
            Err(PaletteError::UnknownCategory("ecstatic".to_string()))
        );
        assert!(generate_for_key("very positive", 0.8).is_ok());
    }

    #[test]
    fn test_non_finite_confidence_is_domain_error() {
        assert!(matches!(
            generate(EmotionCategory::Neutral, f64::NAN),
            Err(PaletteError::ColorMathDomain(_))
        ));
        assert!(matches!(
            generate(EmotionCategory::Neutral, f64::INFINITY),
            Err(PaletteError::ColorMathDomain(_))
        ));
    }
}
