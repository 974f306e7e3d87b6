//! Color value types and conversions between hex, RGB, HSL and OKLCH.
//!
//! `Hex` is the canonical external form. Parsing is the only place a malformed
//! color can be rejected; everything that takes a `Hex` is infallible.

use std::fmt;
use std::str::FromStr;

use palette::convert::FromColorUnclamped;
use palette::{FromColor, Hsl as PaletteHsl, Oklab, Oklch, RgbHue, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

type SrgbHsl = PaletteHsl<palette::encoding::Srgb, f64>;

/// Hue used for seeds that carry no usable hue of their own (a blue).
pub const NEUTRAL_HUE: f64 = 210.0;

/// HSL saturation (percent) under which a color counts as grayscale.
pub const GRAYSCALE_SATURATION: f64 = 6.0;

const GAMUT_EPSILON: f32 = 0.000_5;
const GAMUT_SEARCH_STEPS: usize = 24;

/// A validated sRGB color. Displays as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex([u8; 3]);

impl Hex {
    pub const BLACK: Hex = Hex([0, 0, 0]);
    pub const WHITE: Hex = Hex([255, 255, 255]);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Hex([r, g, b])
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    pub const fn from_u32(packed: u32) -> Self {
        Hex([(packed >> 16) as u8, (packed >> 8) as u8, packed as u8])
    }

    pub const fn channels(self) -> [u8; 3] {
        self.0
    }

    pub(crate) fn to_srgb(self) -> Srgb {
        let [r, g, b] = self.0;
        Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub(crate) fn to_srgb_f64(self) -> Srgb<f64> {
        let [r, g, b] = self.0;
        Srgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub(crate) fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Hex([unit_to_byte(r), unit_to_byte(g), unit_to_byte(b)])
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !is_valid_hex(s) {
            return Err(Error::InvalidHex(s.to_string()));
        }

        let digits = strip_hash(s);
        let expanded: String = if digits.len() == 3 {
            // #rgb -> #rrggbb
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };

        Ok(Hex([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A color with an alpha channel, written as `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlphaHex {
    pub rgb: [u8; 3],
    pub alpha: u8,
}

impl AlphaHex {
    /// Composites this color over an opaque background.
    pub fn over(self, background: Hex) -> Hex {
        let a = self.alpha as f64 / 255.0;
        let [r, g, b] = self.rgb.map(|c| c as f64);
        let [br, bg, bb] = background.channels().map(|c| c as f64);

        Hex::from_unit_rgb(
            (br * (1.0 - a) + r * a) / 255.0,
            (bg * (1.0 - a) + g * a) / 255.0,
            (bb * (1.0 - a) + b * a) / 255.0,
        )
    }
}

impl fmt::Display for AlphaHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, self.alpha)
    }
}

impl Serialize for AlphaHex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl { h, s, l }
    }

    pub fn is_grayscale(&self) -> bool {
        self.s < GRAYSCALE_SATURATION
    }

    /// The hue, or [`NEUTRAL_HUE`] when the color is too desaturated for its
    /// hue to mean anything.
    pub fn hue_or_neutral(&self) -> f64 {
        if self.is_grayscale() {
            NEUTRAL_HUE
        } else {
            self.h
        }
    }
}

fn strip_hash(s: &str) -> &str {
    s.strip_prefix('#').unwrap_or(s)
}

/// Accepts `RGB` or `RRGGBB`, with or without a leading `#`, in any case.
/// Surrounding whitespace is rejected.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = strip_hash(s);
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn hex_to_rgb(hex: Hex) -> Rgb {
    let [r, g, b] = hex.channels();
    Rgb { r, g, b }
}

/// Converts to HSL. The default mode rounds to whole degrees and percents for
/// display; `precise` keeps the fractions so that rotations round-trip exactly.
pub fn hex_to_hsl(hex: Hex, precise: bool) -> Hsl {
    let hsl = SrgbHsl::from_color(hex.to_srgb_f64());

    let hue = hsl.hue.into_positive_degrees();
    let h = if hue.is_finite() { hue } else { 0.0 };
    let s = hsl.saturation * 100.0;
    let l = hsl.lightness * 100.0;

    if precise {
        Hsl { h, s, l }
    } else {
        Hsl {
            h: h.round() % 360.0,
            s: s.round(),
            l: l.round(),
        }
    }
}

pub fn hsl_to_hex(hsl: Hsl) -> Hex {
    let color = SrgbHsl::new(
        RgbHue::from_degrees(normalize_hue(hsl.h)),
        (hsl.s / 100.0).clamp(0.0, 1.0),
        (hsl.l / 100.0).clamp(0.0, 1.0),
    );
    let rgb = Srgb::<f64>::from_color(color);

    Hex::from_unit_rgb(rgb.red, rgb.green, rgb.blue)
}

pub fn hex_to_oklch(hex: Hex) -> Oklch {
    Oklch::from_color(hex.to_srgb())
}

/// Serializes an OKLCH color, gamut mapping it into sRGB first.
pub fn oklch_to_hex(color: Oklch) -> Hex {
    let srgb = Srgb::from_color(gamut_map(color));

    Hex::from_unit_rgb(srgb.red as f64, srgb.green as f64, srgb.blue as f64)
}

pub fn in_srgb_gamut(color: Oklch) -> bool {
    let rgb: Srgb = Srgb::from_color_unclamped(color);

    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

/// Brings a color into sRGB by lowering chroma at constant lightness and hue.
pub fn gamut_map(color: Oklch) -> Oklch {
    let l = if color.l.is_finite() { color.l.clamp(0.0, 1.0) } else { 0.0 };
    let chroma = if color.chroma.is_finite() { color.chroma.max(0.0) } else { 0.0 };
    let candidate = Oklch::new(l, chroma, color.hue);

    if in_srgb_gamut(candidate) {
        return candidate;
    }

    let (mut low, mut high) = (0.0, chroma);
    for _ in 0..GAMUT_SEARCH_STEPS {
        let mid = (low + high) / 2.0;
        if in_srgb_gamut(Oklch::new(l, mid, color.hue)) {
            low = mid;
        } else {
            high = mid;
        }
    }

    Oklch::new(l, low, color.hue)
}

/// Euclidean distance in OKLab.
pub fn delta_e_ok(color1: Oklch, color2: Oklch) -> f32 {
    let lab1 = Oklab::from_color(color1);
    let lab2 = Oklab::from_color(color2);

    ((lab1.l - lab2.l).powi(2) + (lab1.a - lab2.a).powi(2) + (lab1.b - lab2.b).powi(2)).sqrt()
}

pub fn oklch_hue(color: Oklch) -> f64 {
    let hue = color.hue.into_positive_degrees() as f64;
    if hue.is_finite() {
        normalize_hue(hue)
    } else {
        0.0
    }
}

pub fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Angular distance on the hue circle, in `[0, 180]`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Interpolates from `from` toward `to` along the shorter arc.
pub fn mix_hues(from: f64, to: f64, weight: f64) -> f64 {
    let diff = (to - from + 180.0).rem_euclid(360.0) - 180.0;
    normalize_hue(from + diff * weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Hex {
        s.parse().unwrap()
    }

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(hex("#abc"), Hex::from_rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(hex("AABBCC"), Hex::from_rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(hex("#007db8").to_string(), "#007DB8");
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in [
            "", "#", "#12", "#1234", "#12345g", "#1234567", "##123456", "blue", " #abc", "#abc ",
            "#00 7DB8",
        ] {
            assert!(!is_valid_hex(input), "{input} should be invalid");
            assert_eq!(
                input.parse::<Hex>(),
                Err(Error::InvalidHex(input.to_string()))
            );
        }
    }

    #[test]
    fn hex_to_rgb_reads_channels() {
        assert_eq!(hex_to_rgb(hex("#007DB8")), Rgb { r: 0, g: 125, b: 184 });
    }

    #[test]
    fn hex_to_hsl_matches_known_values() {
        let precise = hex_to_hsl(hex("#007DB8"), true);
        assert!((precise.h - 199.24).abs() < 0.01, "{precise:?}");
        assert!((precise.s - 100.0).abs() < 0.01, "{precise:?}");
        assert!((precise.l - 36.08).abs() < 0.01, "{precise:?}");

        assert_eq!(hex_to_hsl(hex("#007DB8"), false), Hsl::new(199.0, 100.0, 36.0));
    }

    #[test]
    fn grays_have_zero_hue_and_saturation() {
        let hsl = hex_to_hsl(hex("#808080"), false);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(hsl.is_grayscale());
        assert_eq!(hsl.hue_or_neutral(), NEUTRAL_HUE);
    }

    #[test]
    fn precise_hsl_round_trips_every_channel_value() {
        for v in (0..=255u32).step_by(3) {
            for color in [
                Hex::from_u32(v << 16 | 0x40 << 8 | (255 - v)),
                Hex::from_u32((255 - v) << 16 | v << 8 | 0x10),
                Hex::from_u32(v << 16 | v << 8 | v),
            ] {
                assert_eq!(hsl_to_hex(hex_to_hsl(color, true)), color);
            }
        }
    }

    #[test]
    fn rounded_hsl_stays_within_one_unit() {
        let color = hex("#3b82f6");
        let rounded = hex_to_hsl(color, false);
        let back = hex_to_hsl(hsl_to_hex(rounded), false);

        assert!(hue_distance(rounded.h, back.h) <= 1.0);
        assert!((rounded.s - back.s).abs() <= 1.0);
        assert!((rounded.l - back.l).abs() <= 1.0);
    }

    #[test]
    fn hsl_to_hex_wraps_hue() {
        assert_eq!(
            hsl_to_hex(Hsl::new(-160.76, 100.0, 36.08)),
            hsl_to_hex(Hsl::new(199.24, 100.0, 36.08))
        );
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 100.0)), Hex::WHITE);
    }

    #[test]
    fn oklch_round_trip_is_stable() {
        for s in ["#007DB8", "#FFE629", "#111113", "#FFFFFF", "#000000"] {
            let color = hex(s);
            assert_eq!(oklch_to_hex(hex_to_oklch(color)), color);
        }
    }

    #[test]
    fn gamut_map_keeps_lightness_and_hue() {
        let wild = Oklch::new(0.6, 0.4, 100.0);
        assert!(!in_srgb_gamut(wild));

        let mapped = gamut_map(wild);
        assert!(in_srgb_gamut(mapped));
        assert_eq!(mapped.l, 0.6);
        assert!(mapped.chroma < 0.4 && mapped.chroma > 0.05);
        assert!((oklch_hue(mapped) - 100.0).abs() < 0.01);
    }

    #[test]
    fn hue_distance_wraps_around() {
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
    }

    #[test]
    fn mix_hues_takes_the_short_arc() {
        assert!((mix_hues(350.0, 10.0, 0.5) - 0.0).abs() < 1e-9);
        assert!((mix_hues(10.0, 350.0, 0.5) - 0.0).abs() < 1e-9);
        assert!((mix_hues(340.0, 20.0, 0.25) - 350.0).abs() < 1e-9);
        assert!((mix_hues(100.0, 200.0, 0.0) - 100.0).abs() < 1e-9);
        assert!((mix_hues(100.0, 200.0, 1.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn alpha_hex_composites_over_background() {
        let overlay = AlphaHex {
            rgb: [0, 0, 0],
            alpha: 128,
        };
        assert_eq!(overlay.over(Hex::WHITE), Hex::from_rgb(127, 127, 127));
        assert_eq!(overlay.to_string(), "#00000080");
    }
}
