//! The top-level pipeline: one request in, one complete palette out.

use serde::{Deserialize, Serialize};

use crate::background::generate_backgrounds_oklch;
use crate::contrast::{get_best_foreground, get_best_foreground_step, WCAG_AA};
use crate::convert::Hex;
use crate::harmony::{generate_harmonious_palette, HarmonyOptions, Scheme};
use crate::scale::{AlphaColorScale, Appearance, ColorGenerator, ColorScale, Scale, ScaleOptions};
use crate::semantic::{generate_semantic_colors, SemanticColors};
use crate::Result;

/// A value for each appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Themed<T> {
    pub light: T,
    pub dark: T,
}

impl<T> Themed<T> {
    pub fn from_fn(mut f: impl FnMut(Appearance) -> T) -> Self {
        Themed {
            light: f(Appearance::Light),
            dark: f(Appearance::Dark),
        }
    }

    pub fn get(&self, appearance: Appearance) -> &T {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Themed<U> {
        Themed {
            light: f(&self.light),
            dark: f(&self.dark),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteRequest {
    pub hex: String,
    pub scheme: Scheme,
    /// Also build analogous and complementary variants of the same seed.
    pub harmonized: bool,
    pub pure_color_theory: bool,
    pub harmony_color_index: usize,
}

impl PaletteRequest {
    pub fn new(hex: impl Into<String>, scheme: Scheme) -> Self {
        PaletteRequest {
            hex: hex.into(),
            scheme,
            ..Default::default()
        }
    }
}

/// UI roles for one appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRoles {
    pub background: Hex,
    pub foreground: Hex,
    pub primary: Hex,
    pub primary_foreground: Hex,
    pub muted: Hex,
    /// Picked by [`get_best_foreground_step`], which does not promise 4.5:1.
    pub muted_foreground: Hex,
    pub border: Hex,
    pub ring: Hex,
}

impl ThemeRoles {
    pub fn from_scale(scale: &Scale) -> Self {
        let accent = &scale.accent_scale;
        let gray = &scale.gray_scale;

        let primary = accent[8];
        let muted = gray[2];

        ThemeRoles {
            background: scale.background,
            foreground: get_best_foreground(scale.background, accent, gray, WCAG_AA).color,
            primary,
            primary_foreground: get_best_foreground(primary, accent, gray, WCAG_AA).color,
            muted,
            muted_foreground: gray[get_best_foreground_step(muted, gray, true)],
            border: gray[5],
            ring: accent[7],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteBundle {
    pub seed: Hex,
    pub scheme: Scheme,
    pub accent: Hex,
    pub gray: Hex,
    pub light_background: Hex,
    pub dark_background: Hex,

    pub accent_scale: Themed<ColorScale>,
    pub gray_scale: Themed<ColorScale>,
    pub accent_scale_alpha: Themed<AlphaColorScale>,
    pub gray_scale_alpha: Themed<AlphaColorScale>,
    pub accent_contrast: Themed<Hex>,

    pub semantic: Themed<SemanticColors>,
    pub roles: Themed<ThemeRoles>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analogous: Option<Box<PaletteBundle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complementary: Option<Box<PaletteBundle>>,
}

/// Parses the seed and runs the whole pipeline.
pub fn generate_palette(request: &PaletteRequest) -> Result<PaletteBundle> {
    let seed: Hex = request.hex.parse()?;
    let options = HarmonyOptions {
        pure_color_theory: request.pure_color_theory,
        harmony_color_index: request.harmony_color_index,
    };

    let mut bundle = build_bundle(seed, request.scheme, &options);

    if request.harmonized {
        bundle.analogous = Some(Box::new(build_bundle(seed, Scheme::Analogous, &options)));
        bundle.complementary = Some(Box::new(build_bundle(
            seed,
            Scheme::Complementary,
            &options,
        )));
    }

    Ok(bundle)
}

fn build_bundle(seed: Hex, scheme: Scheme, options: &HarmonyOptions) -> PaletteBundle {
    let harmony = generate_harmonious_palette(seed, scheme, options);
    let backgrounds = generate_backgrounds_oklch(seed, harmony.accent, scheme);

    let generator = ColorGenerator::new();
    let scales = Themed::from_fn(|appearance| {
        generator.generate_scale(&ScaleOptions {
            appearance,
            accent: harmony.accent,
            gray: harmony.gray,
            background: backgrounds.get(appearance),
        })
    });

    PaletteBundle {
        seed,
        scheme,
        accent: harmony.accent,
        gray: harmony.gray,
        light_background: backgrounds.light_background,
        dark_background: backgrounds.dark_background,

        accent_scale: scales.map(|scale| scale.accent_scale),
        gray_scale: scales.map(|scale| scale.gray_scale),
        accent_scale_alpha: scales.map(|scale| scale.accent_scale_alpha),
        gray_scale_alpha: scales.map(|scale| scale.gray_scale_alpha),
        accent_contrast: scales.map(|scale| scale.accent_contrast),

        semantic: generate_semantic_colors(
            harmony.accent,
            harmony.gray,
            backgrounds.light_background,
            backgrounds.dark_background,
        ),
        roles: scales.map(ThemeRoles::from_scale),

        analogous: None,
        complementary: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::get_contrast_ratio;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_malformed_seed() {
        let request = PaletteRequest::new("#12345", Scheme::Analogous);

        assert_eq!(
            generate_palette(&request),
            Err(Error::InvalidHex("#12345".to_string()))
        );
    }

    #[test]
    fn accepts_short_and_bare_hex() {
        let short = generate_palette(&PaletteRequest::new("#07b", Scheme::Triadic)).unwrap();
        let long = generate_palette(&PaletteRequest::new("0077BB", Scheme::Triadic)).unwrap();

        assert_eq!(short, long);
        assert_eq!(short.seed.to_string(), "#0077BB");
    }

    #[test]
    fn harmonized_bundles_nest_one_level() {
        let request = PaletteRequest {
            harmonized: true,
            ..PaletteRequest::new("#007DB8", Scheme::Triadic)
        };
        let bundle = generate_palette(&request).unwrap();

        let analogous = bundle.analogous.as_deref().unwrap();
        let complementary = bundle.complementary.as_deref().unwrap();

        assert_eq!(analogous.scheme, Scheme::Analogous);
        assert_eq!(complementary.scheme, Scheme::Complementary);
        assert!(analogous.analogous.is_none());
        assert!(complementary.complementary.is_none());
    }

    #[test]
    fn plain_bundles_have_no_variants() {
        let bundle = generate_palette(&PaletteRequest::new("#007DB8", Scheme::Analogous)).unwrap();

        assert!(bundle.analogous.is_none());
        assert!(bundle.complementary.is_none());
    }

    #[test]
    fn scales_sit_on_the_bundle_backgrounds() {
        let bundle = generate_palette(&PaletteRequest::new("#E5484D", Scheme::Complementary)).unwrap();

        assert_eq!(bundle.roles.light.background, bundle.light_background);
        assert_eq!(bundle.roles.dark.background, bundle.dark_background);
    }

    #[test]
    fn primary_roles_meet_aa() {
        for hex in ["#007DB8", "#FFE629", "#30A46C", "#000000", "#FFFFFF"] {
            let bundle = generate_palette(&PaletteRequest::new(hex, Scheme::Monochromatic)).unwrap();

            for appearance in Appearance::ALL {
                let roles = bundle.roles.get(appearance);

                assert!(get_contrast_ratio(roles.background, roles.foreground) >= WCAG_AA);
                assert!(get_contrast_ratio(roles.primary, roles.primary_foreground) >= WCAG_AA);
            }
        }
    }

    #[test]
    fn roles_come_from_the_expected_steps() {
        let bundle = generate_palette(&PaletteRequest::new("#8E4EC6", Scheme::Analogous)).unwrap();
        let roles = bundle.roles.light;

        assert_eq!(roles.primary, bundle.accent_scale.light[8]);
        assert_eq!(roles.ring, bundle.accent_scale.light[7]);
        assert_eq!(roles.muted, bundle.gray_scale.light[2]);
        assert_eq!(roles.border, bundle.gray_scale.light[5]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let bundle = generate_palette(&PaletteRequest::new("#007DB8", Scheme::Analogous)).unwrap();
        let value = serde_json::to_value(&bundle).unwrap();

        assert!(value.get("lightBackground").is_some());
        assert!(value["roles"]["dark"].get("primaryForeground").is_some());
        assert!(value["semantic"]["light"]["danger"].get("mutedForeground").is_some());
        assert_eq!(value["scheme"], "analogous");
        assert!(value.get("analogous").is_none());
    }
}
