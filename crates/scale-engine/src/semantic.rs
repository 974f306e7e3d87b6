//! Success, danger, warning and info colors that stay clear of the accent.

use std::fmt;

use serde::Serialize;

use crate::bundle::Themed;
use crate::contrast::{
    black_or_white_by_luminance, resolve_foreground, ForegroundResult, ForegroundSource,
    ForegroundStrategy, WCAG_AA,
};
use crate::convert::{hex_to_hsl, hsl_to_hex, hue_distance, normalize_hue, Hex, Hsl};
use crate::scale::{Appearance, ColorGenerator, ColorScale, ScaleOptions};

/// Smallest hue distance a semantic color keeps from the accent.
pub const MIN_HUE_SEPARATION: f64 = 35.0;

/// Yellow-greens between these hues (exclusive) read as muddy.
pub const MUDDY_ZONE: (f64, f64) = (60.0, 140.0);

const SHIFT_ATTEMPTS: u32 = 5;
/// Extra distance added when the solid step drifted toward the accent.
const SEPARATION_MARGIN: f64 = 1.0;
const SETTLE_ATTEMPTS: usize = 6;
const SATURATION_SCALE: f64 = 0.85;
const MIN_SATURATION: f64 = 55.0;
const MAX_SATURATION: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl SemanticKind {
    pub const ALL: [SemanticKind; 4] = [
        SemanticKind::Success,
        SemanticKind::Danger,
        SemanticKind::Warning,
        SemanticKind::Info,
    ];

    pub fn target_hue(self) -> f64 {
        match self {
            SemanticKind::Success => 140.0,
            SemanticKind::Danger => 10.0,
            SemanticKind::Warning => 35.0,
            SemanticKind::Info => 215.0,
        }
    }

    /// HSL lightness of the seed fed to the scale generator.
    pub fn lightness(self) -> f64 {
        match self {
            SemanticKind::Success => 52.0,
            SemanticKind::Danger => 48.0,
            SemanticKind::Warning => 50.0,
            SemanticKind::Info => 51.0,
        }
    }

    /// Hues this kind jumps to when a shift lands in the muddy zone, besides
    /// the nearest edge of the zone.
    fn muddy_escape(self) -> Option<f64> {
        match self {
            SemanticKind::Success => Some(145.0),
            SemanticKind::Warning => Some(35.0),
            SemanticKind::Danger | SemanticKind::Info => None,
        }
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticKind::Success => "success",
            SemanticKind::Danger => "danger",
            SemanticKind::Warning => "warning",
            SemanticKind::Info => "info",
        };

        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColorSet {
    pub base: Hex,
    pub foreground: Hex,
    pub muted: Hex,
    pub muted_foreground: Hex,
    pub border: Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemanticColors {
    pub success: SemanticColorSet,
    pub danger: SemanticColorSet,
    pub warning: SemanticColorSet,
    pub info: SemanticColorSet,
}

impl SemanticColors {
    pub fn get(&self, kind: SemanticKind) -> &SemanticColorSet {
        match kind {
            SemanticKind::Success => &self.success,
            SemanticKind::Danger => &self.danger,
            SemanticKind::Warning => &self.warning,
            SemanticKind::Info => &self.info,
        }
    }
}

pub fn is_muddy(hue: f64) -> bool {
    hue > MUDDY_ZONE.0 && hue < MUDDY_ZONE.1
}

/// Hue for `kind` given the accent's HSL hue. `None` means the accent is
/// grayscale and nothing needs avoiding.
pub fn semantic_hue(kind: SemanticKind, accent_hue: Option<f64>) -> f64 {
    let target = kind.target_hue();

    let Some(accent_hue) = accent_hue else {
        return target;
    };

    if hue_distance(target, accent_hue) >= MIN_HUE_SEPARATION {
        return target;
    }

    for attempt in 1..=SHIFT_ATTEMPTS {
        let shift = MIN_HUE_SEPARATION * attempt as f64;

        let best = [target + shift, target - shift]
            .into_iter()
            .flat_map(|hue| escape_candidates(kind, normalize_hue(hue)))
            .filter(|hue| hue_distance(*hue, accent_hue) >= MIN_HUE_SEPARATION)
            .max_by(|a, b| {
                hue_distance(*a, accent_hue).total_cmp(&hue_distance(*b, accent_hue))
            });

        if let Some(hue) = best {
            return hue;
        }
    }

    // Opposite the accent is always far enough away
    escape_candidates(kind, normalize_hue(accent_hue + 180.0))
        .into_iter()
        .max_by(|a, b| hue_distance(*a, accent_hue).total_cmp(&hue_distance(*b, accent_hue)))
        .unwrap_or(target)
}

fn escape_candidates(kind: SemanticKind, hue: f64) -> Vec<f64> {
    if !is_muddy(hue) {
        return vec![hue];
    }

    let nearest_edge = if hue - MUDDY_ZONE.0 < MUDDY_ZONE.1 - hue {
        MUDDY_ZONE.0
    } else {
        MUDDY_ZONE.1
    };

    kind.muddy_escape()
        .into_iter()
        .chain(std::iter::once(nearest_edge))
        .collect()
}

/// Builds the four semantic sets for both appearances.
///
/// Foregrounds go through `[ExtremeStep, OppositeExtreme, LuminanceThreshold]`
/// so every pair reaches 4.5:1 even when neither end of the scale does.
pub fn generate_semantic_colors(
    accent: Hex,
    gray: Hex,
    light_background: Hex,
    dark_background: Hex,
) -> Themed<SemanticColors> {
    let generator = ColorGenerator::new();
    let accent_hsl = hex_to_hsl(accent, true);
    let accent_hue = (!accent_hsl.is_grayscale()).then_some(accent_hsl.h);
    let saturation = (accent_hsl.s * SATURATION_SCALE).clamp(MIN_SATURATION, MAX_SATURATION);

    // Step 9 keeps the seed's chroma and hue at a shared lightness, so it is
    // the same in both appearances.
    let solid_step = |seed: Hex| {
        generator
            .generate_scale(&ScaleOptions {
                appearance: Appearance::Light,
                accent: seed,
                gray,
                background: light_background,
            })
            .accent_scale[8]
    };

    let seeds = SemanticKind::ALL
        .map(|kind| semantic_seed(kind, accent_hue, saturation, &solid_step));

    let build = |appearance: Appearance, background: Hex| {
        let [success, danger, warning, info] = seeds.map(|seed| {
            let scale = generator
                .generate_scale(&ScaleOptions {
                    appearance,
                    accent: seed,
                    gray,
                    background,
                })
                .accent_scale;

            semantic_set(&scale)
        });

        SemanticColors {
            success,
            danger,
            warning,
            info,
        }
    };

    Themed {
        light: build(Appearance::Light, light_background),
        dark: build(Appearance::Dark, dark_background),
    }
}

/// Seed color for `kind`. Relighting the seed into step 9 moves its HSL hue
/// slightly, so the hue is pushed further from the accent until step 9 itself
/// keeps [`MIN_HUE_SEPARATION`].
fn semantic_seed(
    kind: SemanticKind,
    accent_hue: Option<f64>,
    saturation: f64,
    solid_step: impl Fn(Hex) -> Hex,
) -> Hex {
    let seed_for = |hue: f64| hsl_to_hex(Hsl::new(hue, saturation, kind.lightness()));
    let mut hue = semantic_hue(kind, accent_hue);

    let Some(accent_hue) = accent_hue else {
        return seed_for(hue);
    };

    for _ in 0..SETTLE_ATTEMPTS {
        let seed = seed_for(hue);
        let distance = hue_distance(hex_to_hsl(solid_step(seed), true).h, accent_hue);

        if distance >= MIN_HUE_SEPARATION {
            return seed;
        }

        let away = (hue - accent_hue + 180.0).rem_euclid(360.0) - 180.0;
        let pushed = normalize_hue(
            hue + (MIN_HUE_SEPARATION - distance + SEPARATION_MARGIN).copysign(away),
        );

        hue = if is_muddy(pushed) {
            escape_candidates(kind, pushed)
                .into_iter()
                .chain([MUDDY_ZONE.0, MUDDY_ZONE.1])
                .max_by(|a, b| {
                    hue_distance(*a, accent_hue).total_cmp(&hue_distance(*b, accent_hue))
                })
                .unwrap_or(pushed)
        } else {
            pushed
        };
    }

    seed_for(hue)
}

fn semantic_set(scale: &ColorScale) -> SemanticColorSet {
    let base = scale[8];
    let muted = scale[2];

    SemanticColorSet {
        base,
        foreground: resolve_with_retry(base, scale, false).color,
        muted,
        muted_foreground: resolve_with_retry(muted, scale, true).color,
        border: scale[6],
    }
}

fn resolve_with_retry(background: Hex, scale: &ColorScale, is_subtle: bool) -> ForegroundResult {
    let chain = [
        ForegroundStrategy::ExtremeStep {
            scale,
            source: ForegroundSource::Accent,
            is_subtle,
        },
        ForegroundStrategy::OppositeExtreme {
            scale,
            source: ForegroundSource::Accent,
            is_subtle,
        },
        ForegroundStrategy::LuminanceThreshold,
    ];

    resolve_foreground(background, &chain, WCAG_AA)
        .unwrap_or_else(|| black_or_white_by_luminance(background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::get_contrast_ratio;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Hex {
        s.parse().unwrap()
    }

    #[test]
    fn targets_are_kept_when_far_from_the_accent() {
        for kind in SemanticKind::ALL {
            assert_eq!(semantic_hue(kind, Some(290.0)), kind.target_hue());
            assert_eq!(semantic_hue(kind, None), kind.target_hue());
        }
    }

    #[test]
    fn red_accent_pushes_danger_away() {
        let hue = semantic_hue(SemanticKind::Danger, Some(5.0));

        assert!(hue_distance(hue, 5.0) >= MIN_HUE_SEPARATION);
        assert!(!is_muddy(hue));
    }

    #[test]
    fn success_escapes_the_muddy_zone_to_its_preferred_hue() {
        // 140 and 175 are too close and 105 is muddy, so the first shift fails
        let hue = semantic_hue(SemanticKind::Success, Some(150.0));

        assert!(hue_distance(hue, 150.0) >= MIN_HUE_SEPARATION, "{hue}");
        assert!(!is_muddy(hue), "{hue}");
    }

    #[test]
    fn every_accent_hue_keeps_semantic_hues_separated() {
        for degree in 0..720 {
            let accent = degree as f64 / 2.0;

            for kind in SemanticKind::ALL {
                let hue = semantic_hue(kind, Some(accent));

                assert!(
                    hue_distance(hue, accent) >= MIN_HUE_SEPARATION,
                    "{kind} for accent {accent}: {hue}"
                );
                assert!(!is_muddy(hue), "{kind} for accent {accent}: {hue}");
            }
        }
    }

    #[test]
    fn solid_steps_keep_their_distance_from_the_accent() {
        for accent in ["#FF0000", "#FF8000", "#0021B8", "#00B897", "#B8007D"] {
            let accent_hue = hex_to_hsl(hex(accent), true).h;
            let colors =
                generate_semantic_colors(hex(accent), hex("#7A7F85"), hex("#F9F5FA"), hex("#111113"));

            for appearance in Appearance::ALL {
                for kind in SemanticKind::ALL {
                    let base_hue = hex_to_hsl(colors.get(appearance).get(kind).base, true).h;

                    assert!(
                        hue_distance(base_hue, accent_hue) >= MIN_HUE_SEPARATION,
                        "{accent} {appearance} {kind}: {base_hue}"
                    );
                }
            }
        }
    }

    #[test]
    fn seed_is_pushed_out_when_the_solid_step_drifts() {
        // a solid step that always lands 2 degrees closer to a red accent
        let drift = |seed: Hex| {
            let hsl = hex_to_hsl(seed, true);
            hsl_to_hex(Hsl::new(hsl.h - 2.0, hsl.s, hsl.l))
        };

        let seed = semantic_seed(SemanticKind::Warning, Some(0.0), 70.0, drift);
        let solid_hue = hex_to_hsl(drift(seed), true).h;

        assert!(hue_distance(solid_hue, 0.0) >= MIN_HUE_SEPARATION, "{solid_hue}");
        assert!(!is_muddy(hex_to_hsl(seed, true).h));
    }

    #[test]
    fn muddy_zone_bounds_are_exclusive() {
        assert!(!is_muddy(60.0));
        assert!(!is_muddy(140.0));
        assert!(is_muddy(100.0));
    }

    #[test]
    fn semantic_pairs_meet_aa() {
        for accent in ["#007DB8", "#E5484D", "#FFE629", "#30A46C", "#808080"] {
            let colors =
                generate_semantic_colors(hex(accent), hex("#7A7F85"), hex("#F9F9FB"), hex("#111113"));

            for appearance in Appearance::ALL {
                for kind in SemanticKind::ALL {
                    let set = colors.get(appearance).get(kind);

                    assert!(
                        get_contrast_ratio(set.base, set.foreground) >= WCAG_AA,
                        "{accent} {appearance} {kind}: {set:?}"
                    );
                    assert!(
                        get_contrast_ratio(set.muted, set.muted_foreground) >= WCAG_AA,
                        "{accent} {appearance} {kind}: {set:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn sets_come_from_the_expected_steps() {
        let scale: ColorScale = core::array::from_fn(|i| {
            let v = 250 - i as u8 * 20;
            Hex::from_rgb(v, v, v)
        });
        let set = semantic_set(&scale);

        assert_eq!(set.base, scale[8]);
        assert_eq!(set.muted, scale[2]);
        assert_eq!(set.border, scale[6]);
    }

    #[test]
    fn retry_reaches_for_black_or_white() {
        // Mid-gray scale: neither extreme clears 4.5 against step 9
        let scale: ColorScale = core::array::from_fn(|i| {
            let v = 150 - i as u8 * 4;
            Hex::from_rgb(v, v, v)
        });
        let result = resolve_with_retry(scale[8], &scale, false);

        assert!(matches!(
            result.source,
            ForegroundSource::Black | ForegroundSource::White
        ));
        assert!(result.meets(WCAG_AA));
    }
}
