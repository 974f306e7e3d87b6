//! The twelve-step scale generator.
//!
//! Chroma and hue come from the reference families closest to the target
//! color. Lightness is an explicit progression anchored on the background, so
//! every scale is evenly spaced regardless of where its profile came from.

use std::fmt;
use std::str::FromStr;

use palette::{OklabHue, Oklch};
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_apca;
use crate::convert::{delta_e_ok, gamut_map, hex_to_oklch, mix_hues, oklch_to_hex, AlphaHex, Hex};
use crate::reference::{self, is_gray_family, ReferenceScale};
use crate::{Error, Result};

pub type ArrayOf12<T> = [T; 12];

/// Twelve opaque steps, index 0 is step 1.
pub type ColorScale = ArrayOf12<Hex>;

/// Twelve steps expressed as translucent colors over the scale's background.
pub type AlphaColorScale = ArrayOf12<AlphaHex>;

/// Step 1 sits this far below a light background.
pub const LIGHT_STEP1_OFFSET: f64 = 0.008;
/// Step 1 sits this far above a dark background.
pub const DARK_STEP1_OFFSET: f64 = 0.025;
/// Extra lightness added to each delta after step 9, so text steps separate.
pub const TAIL_BOOST: f64 = 0.036;

pub const SOLID_MIN_LIGHTNESS: f64 = 0.54;
pub const SOLID_MAX_LIGHTNESS: f64 = 0.66;
pub const TEXT_MIN_LIGHTNESS: f64 = 0.18;
pub const TEXT_MAX_LIGHTNESS: f64 = 0.96;

/// Chroma ceiling for steps 1 and 2.
pub const NEUTRAL_STEP_MAX_CHROMA: f32 = 0.01;
const HOVER_CHROMA_FACTOR: f32 = 0.93;
const PROFILE_CHROMA_CAP: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub const ALL: [Appearance; 2] = [Appearance::Light, Appearance::Dark];
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Light => write!(f, "light"),
            Appearance::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Appearance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(Error::UnknownAppearance(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub appearance: Appearance,
    pub accent: Hex,
    pub gray: Hex,
    pub background: Hex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub accent_scale: ColorScale,
    pub accent_scale_alpha: AlphaColorScale,
    pub accent_contrast: Hex,

    pub gray_scale: ColorScale,
    pub gray_scale_alpha: AlphaColorScale,

    pub background: Hex,
}

pub struct ColorGenerator {
    light_colors: &'static [ReferenceScale],
    dark_colors: &'static [ReferenceScale],
    light_gray_colors: &'static [ReferenceScale],
    dark_gray_colors: &'static [ReferenceScale],
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `ColorGenerator::new().generate_scale(options)`.
pub fn generate_scale(options: &ScaleOptions) -> Scale {
    ColorGenerator::new().generate_scale(options)
}

impl ColorGenerator {
    pub fn new() -> Self {
        ColorGenerator {
            light_colors: reference::light_scales(),
            dark_colors: reference::dark_scales(),
            light_gray_colors: reference::light_gray_scales(),
            dark_gray_colors: reference::dark_gray_scales(),
        }
    }

    pub fn generate_scale(&self, options: &ScaleOptions) -> Scale {
        let appearance = options.appearance;

        let (all_scales, gray_scales) = match appearance {
            Appearance::Light => (self.light_colors, self.light_gray_colors),
            Appearance::Dark => (self.dark_colors, self.dark_gray_colors),
        };

        let background_color = hex_to_oklch(options.background);
        let gray_base_color = hex_to_oklch(options.gray);
        let accent_base_color = hex_to_oklch(options.accent);

        let gray_scale_colors = shape_scale(
            self.get_scale_from_color(gray_base_color, gray_scales),
            gray_base_color,
            background_color,
            appearance,
        );

        // Pure white and black have no hue to build a profile from
        let accent_scale_colors = if options.accent == Hex::BLACK || options.accent == Hex::WHITE {
            gray_scale_colors
        } else {
            shape_scale(
                self.get_scale_from_color(accent_base_color, all_scales),
                accent_base_color,
                background_color,
                appearance,
            )
        };

        let accent_scale = accent_scale_colors.map(oklch_to_hex);
        let gray_scale = gray_scale_colors.map(oklch_to_hex);

        Scale {
            accent_scale,
            accent_scale_alpha: accent_scale.map(|step| get_alpha_color(step, options.background)),
            accent_contrast: oklch_to_hex(get_text_color(accent_scale_colors[8])),
            gray_scale,
            gray_scale_alpha: gray_scale.map(|step| get_alpha_color(step, options.background)),
            background: options.background,
        }
    }

    /// Mixes the two reference families nearest to `source` and recolors the
    /// result to its hue and chroma. Lightness is left as the references had
    /// it; [`shape_scale`] replaces it.
    fn get_scale_from_color(&self, source: Oklch, scales: &[ReferenceScale]) -> ArrayOf12<Oklch> {
        // Closest step of every family, nearest family first
        let mut closest_colors: Vec<(&ReferenceScale, Oklch, f32)> = scales
            .iter()
            .filter_map(|scale| {
                scale
                    .steps
                    .iter()
                    .map(|color| (*color, delta_e_ok(source, *color)))
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(color, distance)| (scale, color, distance))
            })
            .collect();

        closest_colors.sort_by(|a, b| a.2.total_cmp(&b.2));

        // A gray nearest neighbour pairs with the closest chromatic family, not another gray
        let all_are_grays = closest_colors
            .iter()
            .all(|(scale, _, _)| is_gray_family(scale.name));
        let first_is_gray = closest_colors
            .first()
            .is_some_and(|(scale, _, _)| is_gray_family(scale.name));

        if first_is_gray && !all_are_grays {
            let mut position = 0;
            closest_colors.retain(|(scale, _, _)| {
                position += 1;
                position == 1 || !is_gray_family(scale.name)
            });
        }

        let (color_a, color_b) = match closest_colors.as_slice() {
            [a, b, ..] => (*a, *b),
            [only] => (*only, *only),
            [] => return [source; 12],
        };

        // Triangulation logic to determine mixing ratio
        let a = color_b.2;
        let b = color_a.2;
        let c = delta_e_ok(color_a.1, color_b.1);

        let cos_a = (b * b + c * c - a * a) / (2.0 * b * c);
        let sin_a = cos_a.acos().sin();

        let cos_b = (a * a + c * c - b * b) / (2.0 * a * c);
        let sin_b = cos_b.acos().sin();

        let tan_c1 = cos_a / sin_a;
        let tan_c2 = cos_b / sin_b;

        // Exact hits and degenerate triangles produce NaN; stay on family A
        let ratio = tan_c1 / tan_c2 * 0.5;
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let scale_a = &color_a.0.steps;
        let scale_b = &color_b.0.steps;

        let mut scale: ArrayOf12<Oklch> =
            core::array::from_fn(|i| mix_colors(scale_a[i], scale_b[i], ratio));

        let base_color = scale
            .iter()
            .copied()
            .min_by(|x, y| delta_e_ok(source, *x).total_cmp(&delta_e_ok(source, *y)))
            .unwrap_or(source);

        let ratio_c = if base_color.chroma > 0.0 {
            source.chroma / base_color.chroma
        } else {
            1.0
        };

        for color in &mut scale {
            color.chroma = (color.chroma * ratio_c).min(source.chroma * PROFILE_CHROMA_CAP);
            color.hue = source.hue;
        }

        scale
    }
}

/// Applies the lightness progression to a chroma profile and pins step 9 to
/// the solid color.
fn shape_scale(
    profile: ArrayOf12<Oklch>,
    solid: Oklch,
    background: Oklch,
    appearance: Appearance,
) -> ArrayOf12<Oklch> {
    let lightness = lightness_progression(background.l as f64, solid.l as f64, appearance);

    let mut steps = profile;
    for (step, l) in steps.iter_mut().zip(lightness) {
        step.l = l as f32;
    }

    steps[8] = Oklch::new(lightness[8] as f32, solid.chroma, solid.hue);
    steps[9] = Oklch::new(
        lightness[9] as f32,
        solid.chroma * HOVER_CHROMA_FACTOR,
        solid.hue,
    );

    // Limit saturation of text colors
    let text_chroma = steps[8].chroma.max(steps[7].chroma);
    for step in &mut steps[10..] {
        step.chroma = step.chroma.min(text_chroma);
    }

    for step in &mut steps[..2] {
        step.chroma = step.chroma.min(NEUTRAL_STEP_MAX_CHROMA);
    }

    steps.map(gamut_map)
}

/// OKLCH lightness of the twelve steps.
///
/// Step 1 is anchored just off the background, step 9 is the target's
/// lightness held inside `[SOLID_MIN_LIGHTNESS, SOLID_MAX_LIGHTNESS]`. Steps
/// 1 through 9 are equally spaced, and steps 9 through 12 are equally spaced
/// with a delta [`TAIL_BOOST`] larger in magnitude. Step 12 is kept inside
/// `[TEXT_MIN_LIGHTNESS, TEXT_MAX_LIGHTNESS]`.
pub fn lightness_progression(
    background_l: f64,
    target_l: f64,
    appearance: Appearance,
) -> ArrayOf12<f64> {
    let first = match appearance {
        Appearance::Light => background_l - LIGHT_STEP1_OFFSET,
        Appearance::Dark => background_l + DARK_STEP1_OFFSET,
    }
    .clamp(0.0, 1.0);

    let solid = target_l.clamp(SOLID_MIN_LIGHTNESS, SOLID_MAX_LIGHTNESS);

    let head = (solid - first) / 8.0;
    let boosted = head + TAIL_BOOST.copysign(head);
    let last = (solid + 3.0 * boosted).clamp(TEXT_MIN_LIGHTNESS, TEXT_MAX_LIGHTNESS);
    let tail = (last - solid) / 3.0;

    core::array::from_fn(|i| {
        if i < 8 {
            first + head * i as f64
        } else {
            solid + tail * (i - 8) as f64
        }
    })
}

fn mix_colors(color1: Oklch, color2: Oklch, ratio: f32) -> Oklch {
    let hue = mix_hues(
        color1.hue.into_positive_degrees() as f64,
        color2.hue.into_positive_degrees() as f64,
        ratio as f64,
    );

    Oklch::new(
        color1.l * (1.0 - ratio) + color2.l * ratio,
        color1.chroma * (1.0 - ratio) + color2.chroma * ratio,
        OklabHue::from_degrees(hue as f32),
    )
}

/// Text color for a solid step: white when APCA finds enough contrast,
/// otherwise a dark tint of the step's own hue.
pub(crate) fn get_text_color(background: Oklch) -> Oklch {
    let white = Oklch::new(1.0, 0.0, 0.0);

    if contrast_apca(white, background).abs() < 40.0 {
        let c = (0.08 * background.chroma).max(0.04);
        Oklch::new(0.25, c, background.hue)
    } else {
        white
    }
}

// Browser-specific alpha blending that matches how browsers composite colors
fn blend_alpha(foreground: f64, alpha: f64, background: f64) -> f64 {
    // Browsers round each component separately, not the final result
    (background * (1.0 - alpha)).round() + (foreground * alpha).round()
}

/// The least-opaque color that composites over `background` to `target`.
///
/// Channels are solved separately, so a step that moves some channels up and
/// others down from the background still composites back to itself.
pub fn get_alpha_color(target: Hex, background: Hex) -> AlphaHex {
    if target == background {
        return AlphaHex {
            rgb: target.channels(),
            alpha: 0,
        };
    }

    let targets = target.channels().map(f64::from);
    let backgrounds = background.channels().map(f64::from);

    // Lowest alpha at which each channel is reachable with a foreground in 0..=255
    let required: [f64; 3] = core::array::from_fn(|i| {
        let (t, b) = (targets[i], backgrounds[i]);
        if t > b {
            (t - b) / (255.0 - b)
        } else if t < b {
            (b - t) / b
        } else {
            0.0
        }
    });

    let lightening = targets.iter().zip(&backgrounds).all(|(t, b)| t >= b);
    let darkening = targets.iter().zip(&backgrounds).all(|(t, b)| t <= b);
    let is_pure_gray = (required[0] - required[1]).abs() < 0.001
        && (required[1] - required[2]).abs() < 0.001;

    if is_pure_gray && (lightening || darkening) {
        let v = if lightening { 255 } else { 0 };
        return AlphaHex {
            rgb: [v, v, v],
            alpha: to_byte(required[0] * 255.0),
        };
    }

    let max_alpha = required.iter().copied().fold(0.0, f64::max);
    let a = (max_alpha * 255.0).ceil().clamp(1.0, 255.0) / 255.0;

    let rgb: [f64; 3] = core::array::from_fn(|i| {
        let (t, b) = (targets[i], backgrounds[i]);
        let mut value = ((t - b * (1.0 - a)) / a).clamp(0.0, 255.0).round();

        // Correct for browser rounding, unless that pulls the exact blend off target
        let blended = blend_alpha(value, a, b);
        if (t - blended).abs() > 0.5 {
            let nudged = if t > blended { value + 1.0 } else { value - 1.0 };
            if (0.0..=255.0).contains(&nudged) && (b + a * (nudged - b) - t).abs() <= 1.0 {
                value = nudged;
            }
        }

        value
    });

    AlphaHex {
        rgb: rgb.map(to_byte),
        alpha: to_byte(a * 255.0),
    }
}

fn to_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
