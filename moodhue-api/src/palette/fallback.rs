//! Fallback palette generator
//!
//! Maps raw polarity and confidence straight to colors on the red-to-green
//! hue band. Pure arithmetic with no lookups, so it cannot fail.

use super::{Color, Harmony, PALETTE_SIZE};

const HUE_RANGE: (f64, f64) = (0.0, 120.0);
const SATURATION_RANGE: (f64, f64) = (0.45, 0.95);
/// Lightness at |polarity| = 0 and |polarity| = 1
const LIGHTNESS_RANGE: (f64, f64) = (0.9, 0.5);
const LIGHTNESS_STEP: f64 = 0.15;
const MAX_LIGHTNESS: f64 = 0.95;
const MIN_LIGHTNESS: f64 = 0.2;

/// Base HSL derived from polarity in [-1, 1] and confidence in [0, 1]
///
/// Inputs outside their domain are clamped (NaN is treated as 0).
pub fn base_hsl(polarity: f64, confidence: f64) -> (f64, f64, f64) {
    let polarity = finite_or_zero(polarity).clamp(-1.0, 1.0);
    let confidence = finite_or_zero(confidence).clamp(0.0, 1.0);

    let hue = lerp(HUE_RANGE, (polarity + 1.0) / 2.0);
    let saturation = lerp(SATURATION_RANGE, confidence);
    let lightness = lerp(LIGHTNESS_RANGE, polarity.abs());

    (hue, saturation, lightness)
}

/// Five colors on the basic layout: lighter, base −30°, base, base +30°, darker
pub fn generate_fallback(polarity: f64, confidence: f64) -> [Color; PALETTE_SIZE] {
    let (h, s, l) = base_hsl(polarity, confidence);
    let offsets = Harmony::Basic.hue_offsets(0.0, confidence);
    let lightness = [
        (l + LIGHTNESS_STEP).min(MAX_LIGHTNESS),
        l,
        l,
        l,
        (l - LIGHTNESS_STEP).max(MIN_LIGHTNESS),
    ];

    std::array::from_fn(|i| Color::from_hsl((h + offsets[i]).rem_euclid(360.0), s, lightness[i]))
}

fn lerp((from, to): (f64, f64), t: f64) -> f64 {
    from + (to - from) * t
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::color::is_hex_color;
    use std::collections::HashSet;

    #[test]
    fn test_neutral_base_values() {
        let (h, s, l) = base_hsl(0.0, 0.5);
        assert!((h - 60.0).abs() < 1e-9);
        assert!((s - 0.7).abs() < 1e-9);
        assert!((l - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_polarity_extremes_map_to_red_and_green() {
        let (h, _, l) = base_hsl(-1.0, 1.0);
        assert_eq!(h, 0.0);
        assert!((l - 0.5).abs() < 1e-9);

        let (h, s, _) = base_hsl(1.0, 1.0);
        assert_eq!(h, 120.0);
        assert!((s - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_colors_are_distinct() {
        let colors = generate_fallback(0.0, 0.5);
        let unique: HashSet<_> = colors.iter().collect();
        assert_eq!(unique.len(), 5, "colors: {:?}", colors);
    }

    #[test]
    fn test_colors_distinct_across_input_grid() {
        for p in -20..=20 {
            for c in 0..=20 {
                let (polarity, confidence) = (p as f64 / 20.0, c as f64 / 20.0);
                let colors = generate_fallback(polarity, confidence);
                let unique: HashSet<_> = colors.iter().collect();
                assert_eq!(
                    unique.len(),
                    5,
                    "polarity {polarity}, confidence {confidence}: {colors:?}"
                );
            }
        }
    }

    #[test]
    fn test_hues_follow_basic_layout() {
        let (h, _, _) = base_hsl(0.5, 0.9);
        let colors = generate_fallback(0.5, 0.9);
        let offsets = Harmony::Basic.hue_offsets(0.0, 0.9);
        for (color, offset) in colors.iter().zip(offsets) {
            let expected = (h + offset).rem_euclid(360.0);
            assert!((color.to_hsl().h - expected).abs() < 2.0, "{color:?} vs {expected}");
        }
    }

    #[test]
    fn test_variants_share_base_hue_and_order_lightness() {
        let colors = generate_fallback(0.4, 0.8);
        let lighter = colors[0].to_hsl();
        let base = colors[2].to_hsl();
        let darker = colors[4].to_hsl();
        assert!(lighter.l > base.l);
        assert!(base.l > darker.l);
        assert!((lighter.h - base.h).abs() < 2.0);
        assert!((darker.h - base.h).abs() < 2.0);
    }

    #[test]
    fn test_negative_hue_wraps_below_zero() {
        // h = 0 so the −30° variant lands at 330° (magenta side)
        let colors = generate_fallback(-1.0, 1.0);
        let wrapped = colors[1].to_hsl();
        assert!((wrapped.h - 330.0).abs() < 2.0, "hue {}", wrapped.h);
    }

    #[test]
    fn test_always_five_hex_colors_and_deterministic() {
        for p in [-1.0, -0.6, -0.05, 0.0, 0.05, 0.3, 1.0] {
            for c in [0.0, 0.3, 0.5, 1.0] {
                let first = generate_fallback(p, c);
                assert_eq!(first, generate_fallback(p, c));
                assert!(first.iter().all(|color| is_hex_color(&color.to_hex())));
            }
        }
    }

    #[test]
    fn test_lightness_caps() {
        // |polarity| = 1: l = 0.5, darker = 0.35
        let (_, _, l) = base_hsl(1.0, 0.5);
        assert!((l - LIGHTNESS_STEP - 0.35).abs() < 1e-9);
        // NaN input is clamped, not propagated
        assert_eq!(generate_fallback(f64::NAN, f64::NAN), generate_fallback(0.0, 0.0));
    }
}
