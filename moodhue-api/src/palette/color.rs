//! RGB/HSL color values and conversions
//!
//! Conversions follow the standard HLS model: hue in degrees, saturation and
//! lightness in [0.0, 1.0]. Channels are truncated (not rounded) when scaled
//! to 0-255, so `l = 1.0` maps to 255 and anything below to the floor.

use serde::{Serialize, Serializer};
use std::fmt;

use super::PaletteError;

/// 24-bit RGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL triple: `h` in degrees [0, 360), `s` and `l` in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Checked HSL conversion
    ///
    /// Rejects non-finite components and saturation/lightness outside
    /// [0, 1]. Hue wraps modulo 360.
    pub fn try_from_hsl(h: f64, s: f64, l: f64) -> Result<Self, PaletteError> {
        if !(h.is_finite() && s.is_finite() && l.is_finite()) {
            return Err(PaletteError::ColorMathDomain(format!(
                "non-finite HSL component ({h}, {s}, {l})"
            )));
        }
        if !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&l) {
            return Err(PaletteError::ColorMathDomain(format!(
                "saturation/lightness out of range ({s}, {l})"
            )));
        }
        Ok(Self::from_hsl(h, s, l))
    }

    /// Unchecked HSL conversion
    ///
    /// Total for any input: saturation and lightness are clamped and float
    /// to integer casts saturate.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = channel(l);
            return Self::new(v, v, v);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        Self::new(
            channel(hue_to_channel(m1, m2, h + 1.0 / 3.0)),
            channel(hue_to_channel(m1, m2, h)),
            channel(hue_to_channel(m1, m2, h - 1.0 / 3.0)),
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let delta = max - min;
        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            h: (h * 60.0).rem_euclid(360.0),
            s,
            l,
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// True for a 7-character lowercase `#rrggbb` string
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::new(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Color::from_hsl(360.0, 1.0, 0.5), Color::from_hsl(0.0, 1.0, 0.5));
        assert_eq!(Color::from_hsl(-120.0, 1.0, 0.5), Color::from_hsl(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let c = Color::from_hsl(200.0, 0.0, 0.5);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_eq!(c.r, 127);
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Color::new(0, 10, 255).to_hex(), "#000aff");
        assert!(is_hex_color(&Color::new(171, 205, 239).to_hex()));
        assert!(!is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("#abcde"));
    }

    #[test]
    fn test_to_hsl_recovers_hue() {
        let hsl = Color::new(0, 0, 255).to_hsl();
        assert!((hsl.h - 240.0).abs() < 1e-9);
        assert!((hsl.s - 1.0).abs() < 1e-9);
        assert!((hsl.l - 0.5).abs() < 1e-9);

        let hsl = Color::from_hsl(30.0, 0.8, 0.6).to_hsl();
        assert!((hsl.h - 30.0).abs() < 1.5);
    }

    #[test]
    fn test_checked_conversion_rejects_bad_input() {
        assert!(matches!(
            Color::try_from_hsl(f64::NAN, 0.5, 0.5),
            Err(PaletteError::ColorMathDomain(_))
        ));
        assert!(matches!(
            Color::try_from_hsl(10.0, 1.2, 0.5),
            Err(PaletteError::ColorMathDomain(_))
        ));
        assert!(Color::try_from_hsl(10.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
    }
}
