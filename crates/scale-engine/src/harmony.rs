//! Derives an accent, a gray and background hints from one seed color.
//!
//! Rotation happens in HSL, on the precise (unrounded) hue of the seed. In
//! pure color theory mode only the hue moves. The default, optimized mode also
//! pulls saturation and lightness toward values that give a usable accent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_hsl, hsl_to_hex, normalize_hue, Hex, Hsl};
use crate::{Error, Result};

const LIGHT_HINT_SATURATION: f64 = 30.0;
const LIGHT_HINT_LIGHTNESS: f64 = 98.0;
const DARK_HINT_SATURATION: f64 = 15.0;
const DARK_HINT_LIGHTNESS: f64 = 8.0;

const GRAY_LIGHTNESS: f64 = 50.0;
const MONOCHROMATIC_SHIFT: f64 = 20.0;
const ACCENT_MIN_LIGHTNESS: f64 = 40.0;
const ACCENT_MAX_LIGHTNESS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Monochromatic,
    #[default]
    Analogous,
    Complementary,
    Triadic,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Monochromatic,
        Scheme::Analogous,
        Scheme::Complementary,
        Scheme::Triadic,
    ];

    /// Hue rotations this scheme offers for the accent, in degrees.
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            Scheme::Monochromatic => &[0.0],
            Scheme::Analogous => &[30.0, -30.0],
            Scheme::Complementary => &[180.0],
            Scheme::Triadic => &[120.0, 240.0],
        }
    }

    /// Rotation picked by `index`, wrapping around the available offsets.
    pub fn hue_offset(self, index: usize) -> f64 {
        let offsets = self.hue_offsets();
        offsets[index % offsets.len()]
    }

    fn accent_saturation_floor(self) -> f64 {
        match self {
            Scheme::Monochromatic => 70.0,
            Scheme::Analogous => 75.0,
            Scheme::Complementary => 85.0,
            Scheme::Triadic => 80.0,
        }
    }

    fn gray_saturation(self) -> f64 {
        match self {
            Scheme::Monochromatic => 10.0,
            Scheme::Analogous => 8.0,
            Scheme::Complementary => 5.0,
            Scheme::Triadic => 6.0,
        }
    }

    fn background_hue_offset(self) -> f64 {
        match self {
            Scheme::Monochromatic => 0.0,
            Scheme::Analogous => 10.0,
            Scheme::Complementary => 5.0,
            Scheme::Triadic => 15.0,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Monochromatic => "monochromatic",
            Scheme::Analogous => "analogous",
            Scheme::Complementary => "complementary",
            Scheme::Triadic => "triadic",
        };

        write!(f, "{name}")
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monochromatic" => Ok(Scheme::Monochromatic),
            "analogous" => Ok(Scheme::Analogous),
            "complementary" => Ok(Scheme::Complementary),
            "triadic" => Ok(Scheme::Triadic),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HarmonyOptions {
    /// Rotate hue only. Exact, but the accent may be low contrast.
    pub pure_color_theory: bool,
    /// Which of the scheme's rotations to use.
    pub harmony_color_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmoniousPalette {
    pub accent: Hex,
    pub gray: Hex,
    /// HSL-derived background hints. The bundle's canonical backgrounds come
    /// from [`generate_backgrounds_oklch`](crate::generate_backgrounds_oklch).
    pub light_background: Hex,
    pub dark_background: Hex,
}

pub fn generate_harmonious_palette(
    seed: Hex,
    scheme: Scheme,
    options: &HarmonyOptions,
) -> HarmoniousPalette {
    let seed_hsl = hex_to_hsl(seed, true);
    let base_hue = seed_hsl.hue_or_neutral();
    let accent_hue = normalize_hue(base_hue + scheme.hue_offset(options.harmony_color_index));

    let accent_lightness = match scheme {
        Scheme::Monochromatic if seed_hsl.l >= 50.0 => seed_hsl.l - MONOCHROMATIC_SHIFT,
        Scheme::Monochromatic => seed_hsl.l + MONOCHROMATIC_SHIFT,
        _ => seed_hsl.l,
    };

    let (accent, background_hue) = if options.pure_color_theory {
        (Hsl::new(accent_hue, seed_hsl.s, accent_lightness), base_hue)
    } else {
        let saturation = seed_hsl.s.max(scheme.accent_saturation_floor()).min(100.0);
        let lightness = accent_lightness.clamp(ACCENT_MIN_LIGHTNESS, ACCENT_MAX_LIGHTNESS);

        (
            Hsl::new(accent_hue, saturation, lightness),
            normalize_hue(base_hue + scheme.background_hue_offset()),
        )
    };

    HarmoniousPalette {
        accent: hsl_to_hex(accent),
        gray: hsl_to_hex(Hsl::new(base_hue, scheme.gray_saturation(), GRAY_LIGHTNESS)),
        light_background: hsl_to_hex(Hsl::new(
            background_hue,
            LIGHT_HINT_SATURATION,
            LIGHT_HINT_LIGHTNESS,
        )),
        dark_background: hsl_to_hex(Hsl::new(
            background_hue,
            DARK_HINT_SATURATION,
            DARK_HINT_LIGHTNESS,
        )),
    }
}
