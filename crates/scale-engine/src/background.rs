//! Light and dark page backgrounds, synthesized in OKLCH.
//!
//! The background hue is the seed hue pulled toward the accent by a
//! scheme-dependent weight. Lightness targets are fixed per appearance and
//! nudged per hue band so that yellows don't glare and blues don't look dim.

use once_cell::sync::Lazy;
use palette::{OklabHue, Oklch};
use serde::Serialize;

use crate::convert::{
    hex_to_hsl, hex_to_oklch, hsl_to_hex, mix_hues, oklch_hue, oklch_to_hex, Hex, Hsl, NEUTRAL_HUE,
};
use crate::harmony::Scheme;
use crate::scale::Appearance;

pub const LIGHT_BACKGROUND_LIGHTNESS: f64 = 0.975;
pub const DARK_BACKGROUND_LIGHTNESS: f64 = 0.07;
const LIGHT_BACKGROUND_MAX_LIGHTNESS: f64 = 0.99;

/// OKLCH hue of the HSL neutral hue, for seeds without a hue of their own.
static NEUTRAL_OKLCH_HUE: Lazy<f64> =
    Lazy::new(|| oklch_hue(hex_to_oklch(hsl_to_hex(Hsl::new(NEUTRAL_HUE, 100.0, 50.0)))));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backgrounds {
    pub light_background: Hex,
    pub dark_background: Hex,
}

impl Backgrounds {
    pub fn get(&self, appearance: Appearance) -> Hex {
        match appearance {
            Appearance::Light => self.light_background,
            Appearance::Dark => self.dark_background,
        }
    }
}

pub fn generate_backgrounds_oklch(seed: Hex, accent: Hex, scheme: Scheme) -> Backgrounds {
    let hue = background_hue(hue_of(seed), hue_of(accent), scheme);

    Backgrounds {
        light_background: background(hue, scheme, Appearance::Light),
        dark_background: background(hue, scheme, Appearance::Dark),
    }
}

fn hue_of(color: Hex) -> f64 {
    if hex_to_hsl(color, true).is_grayscale() {
        *NEUTRAL_OKLCH_HUE
    } else {
        oklch_hue(hex_to_oklch(color))
    }
}

/// How far the background hue travels from the seed toward the accent.
fn hue_weight(scheme: Scheme) -> f64 {
    match scheme {
        Scheme::Monochromatic => 0.0,
        Scheme::Complementary => 0.08,
        Scheme::Triadic => 0.18,
        Scheme::Analogous => 0.32,
    }
}

pub(crate) fn background_hue(seed_hue: f64, accent_hue: f64, scheme: Scheme) -> f64 {
    mix_hues(seed_hue, accent_hue, hue_weight(scheme))
}

fn chroma(scheme: Scheme, appearance: Appearance) -> f64 {
    match (appearance, scheme) {
        (Appearance::Light, Scheme::Monochromatic) => 0.008,
        (Appearance::Light, Scheme::Analogous) => 0.010,
        (Appearance::Light, Scheme::Complementary) => 0.005,
        (Appearance::Light, Scheme::Triadic) => 0.007,
        (Appearance::Dark, Scheme::Monochromatic) => 0.012,
        (Appearance::Dark, Scheme::Analogous) => 0.015,
        (Appearance::Dark, Scheme::Complementary) => 0.008,
        (Appearance::Dark, Scheme::Triadic) => 0.010,
    }
}

/// Multiplier on the target lightness for the hue band `hue` falls in.
pub(crate) fn lightness_correction(hue: f64, appearance: Appearance) -> f64 {
    match (appearance, hue) {
        // yellows and oranges
        (Appearance::Light, h) if (55.0..115.0).contains(&h) => 0.975,
        (Appearance::Dark, h) if (55.0..115.0).contains(&h) => 0.97,
        // cyans
        (Appearance::Light, h) if (185.0..225.0).contains(&h) => 0.98,
        (Appearance::Dark, h) if (185.0..225.0).contains(&h) => 0.97,
        // blues and violets
        (Appearance::Light, h) if (245.0..310.0).contains(&h) => 1.02,
        (Appearance::Dark, h) if (245.0..310.0).contains(&h) => 1.03,
        _ => 1.0,
    }
}

fn background(hue: f64, scheme: Scheme, appearance: Appearance) -> Hex {
    let lightness = match appearance {
        Appearance::Light => (LIGHT_BACKGROUND_LIGHTNESS * lightness_correction(hue, appearance))
            .min(LIGHT_BACKGROUND_MAX_LIGHTNESS),
        Appearance::Dark => DARK_BACKGROUND_LIGHTNESS * lightness_correction(hue, appearance),
    };

    oklch_to_hex(Oklch::new(
        lightness as f32,
        chroma(scheme, appearance) as f32,
        OklabHue::from_degrees(hue as f32),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Hex {
        s.parse().unwrap()
    }

    #[test]
    fn backgrounds_land_in_their_lightness_bands() {
        let seeds = ["#007DB8", "#E5484D", "#FFE629", "#30A46C", "#8E4EC6", "#808080", "#000000"];

        for seed in seeds {
            for scheme in Scheme::ALL {
                let backgrounds = generate_backgrounds_oklch(hex(seed), hex("#F76B15"), scheme);

                let light = hex_to_oklch(backgrounds.light_background).l;
                let dark = hex_to_oklch(backgrounds.dark_background).l;

                assert!((0.94..=0.995).contains(&light), "{seed} {scheme}: {light}");
                assert!((0.04..=0.10).contains(&dark), "{seed} {scheme}: {dark}");
            }
        }
    }

    #[test]
    fn weights_follow_the_scheme() {
        assert_eq!(background_hue(100.0, 200.0, Scheme::Monochromatic), 100.0);
        assert!((background_hue(100.0, 200.0, Scheme::Complementary) - 108.0).abs() < 1e-9);
        assert!((background_hue(100.0, 200.0, Scheme::Triadic) - 118.0).abs() < 1e-9);
        assert!((background_hue(100.0, 200.0, Scheme::Analogous) - 132.0).abs() < 1e-9);
    }

    #[test]
    fn hue_mix_takes_the_short_way_around() {
        let hue = background_hue(350.0, 20.0, Scheme::Analogous);
        assert!((hue - 359.6).abs() < 1e-9, "{hue}");

        let hue = background_hue(20.0, 350.0, Scheme::Analogous);
        assert!((hue - 10.4).abs() < 1e-9, "{hue}");
    }

    #[test]
    fn hue_bands_adjust_lightness() {
        assert!(lightness_correction(90.0, Appearance::Light) < 1.0);
        assert!(lightness_correction(200.0, Appearance::Dark) < 1.0);
        assert!(lightness_correction(270.0, Appearance::Light) > 1.0);
        assert_eq!(lightness_correction(20.0, Appearance::Light), 1.0);
    }

    #[test]
    fn grayscale_colors_use_the_neutral_hue() {
        assert_eq!(hue_of(hex("#808080")), *NEUTRAL_OKLCH_HUE);
        assert_eq!(hue_of(hex("#000000")), hue_of(hex("#FFFFFF")));
    }

    #[test]
    fn same_inputs_same_backgrounds() {
        let a = generate_backgrounds_oklch(hex("#007DB8"), hex("#B83B00"), Scheme::Complementary);
        let b = generate_backgrounds_oklch(hex("#007DB8"), hex("#B83B00"), Scheme::Complementary);

        assert_eq!(a, b);
        assert_eq!(a.get(Appearance::Dark), a.dark_background);
    }
}
