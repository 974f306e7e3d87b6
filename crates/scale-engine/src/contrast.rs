//! WCAG contrast and foreground resolution.
//!
//! Foregrounds are resolved by walking an ordered chain of
//! [`ForegroundStrategy`] values and taking the first one that produces a
//! result. The chains used by the rest of the crate always end in a strategy
//! that cannot fail, so resolution is total.

use palette::{IntoColor, LinSrgb, Oklch, Srgb};
use serde::Serialize;

use crate::convert::Hex;
use crate::scale::ColorScale;

/// Minimum contrast for normal-size text (WCAG 2.1 AA).
pub const WCAG_AA: f64 = 4.5;
/// Enhanced contrast (WCAG 2.1 AAA).
pub const WCAG_AAA: f64 = 7.0;

/// Relative luminance above which black text beats white. At exactly this
/// point both black and white clear 4.5:1.
pub const LUMINANCE_THRESHOLD: f64 = 0.18;

pub fn relative_luminance(color: Hex) -> f64 {
    let linear: LinSrgb<f64> = color.to_srgb_f64().into_linear();

    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

/// WCAG 2.1 contrast ratio, in `[1, 21]` regardless of argument order.
pub fn get_contrast_ratio(a: Hex, b: Hex) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };

    (lighter + 0.05) / (darker + 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForegroundSource {
    Accent,
    Gray,
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForegroundResult {
    pub color: Hex,
    pub contrast: f64,
    pub source: ForegroundSource,
    /// Index into the source scale. Only set for `Accent` and `Gray`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
}

impl ForegroundResult {
    pub fn meets(&self, min_contrast: f64) -> bool {
        self.contrast >= min_contrast
    }

    fn from_step(background: Hex, scale: &ColorScale, step: usize, source: ForegroundSource) -> Self {
        ForegroundResult {
            color: scale[step],
            contrast: get_contrast_ratio(background, scale[step]),
            source,
            step: Some(step),
        }
    }

    fn absolute(background: Hex, source: ForegroundSource) -> Self {
        let color = match source {
            ForegroundSource::Black => Hex::BLACK,
            _ => Hex::WHITE,
        };

        ForegroundResult {
            color,
            contrast: get_contrast_ratio(background, color),
            source,
            step: None,
        }
    }
}

/// One link of a fallback chain.
#[derive(Debug, Clone, Copy)]
pub enum ForegroundStrategy<'a> {
    /// The highest-contrast step of the scale, if it clears the threshold.
    ScaleSearch {
        scale: &'a ColorScale,
        source: ForegroundSource,
    },
    /// The better of the two extreme steps, as picked by
    /// [`get_best_foreground_step`], if it clears the threshold.
    ExtremeStep {
        scale: &'a ColorScale,
        source: ForegroundSource,
        is_subtle: bool,
    },
    /// The extreme step [`ExtremeStep`](Self::ExtremeStep) did not pick, if it
    /// clears the threshold.
    OppositeExtreme {
        scale: &'a ColorScale,
        source: ForegroundSource,
        is_subtle: bool,
    },
    /// White or black, whichever contrasts more. Never fails.
    BlackOrWhite,
    /// Black when the background luminance is above [`LUMINANCE_THRESHOLD`],
    /// white otherwise. Never fails, and always clears 4.5:1.
    LuminanceThreshold,
}

impl ForegroundStrategy<'_> {
    pub fn attempt(&self, background: Hex, min_contrast: f64) -> Option<ForegroundResult> {
        match *self {
            ForegroundStrategy::ScaleSearch { scale, source } => {
                let step = (0..scale.len()).max_by(|&a, &b| {
                    get_contrast_ratio(background, scale[a])
                        .total_cmp(&get_contrast_ratio(background, scale[b]))
                })?;

                Some(ForegroundResult::from_step(background, scale, step, source))
                    .filter(|result| result.meets(min_contrast))
            }
            ForegroundStrategy::ExtremeStep {
                scale,
                source,
                is_subtle,
            } => {
                let step = get_best_foreground_step(background, scale, is_subtle);

                Some(ForegroundResult::from_step(background, scale, step, source))
                    .filter(|result| result.meets(min_contrast))
            }
            ForegroundStrategy::OppositeExtreme {
                scale,
                source,
                is_subtle,
            } => {
                let step = match get_best_foreground_step(background, scale, is_subtle) {
                    0 => dark_extreme(is_subtle),
                    _ => 0,
                };

                Some(ForegroundResult::from_step(background, scale, step, source))
                    .filter(|result| result.meets(min_contrast))
            }
            ForegroundStrategy::BlackOrWhite => Some(black_or_white(background)),
            ForegroundStrategy::LuminanceThreshold => Some(black_or_white_by_luminance(background)),
        }
    }
}

/// White or black, whichever contrasts more with `background`.
pub fn black_or_white(background: Hex) -> ForegroundResult {
    let white = ForegroundResult::absolute(background, ForegroundSource::White);
    let black = ForegroundResult::absolute(background, ForegroundSource::Black);

    if white.contrast >= black.contrast {
        white
    } else {
        black
    }
}

/// Black above [`LUMINANCE_THRESHOLD`], white at or below it.
pub fn black_or_white_by_luminance(background: Hex) -> ForegroundResult {
    let source = if relative_luminance(background) > LUMINANCE_THRESHOLD {
        ForegroundSource::Black
    } else {
        ForegroundSource::White
    };

    ForegroundResult::absolute(background, source)
}

/// Tries each strategy in order and returns the first result.
pub fn resolve_foreground(
    background: Hex,
    chain: &[ForegroundStrategy<'_>],
    min_contrast: f64,
) -> Option<ForegroundResult> {
    chain
        .iter()
        .find_map(|strategy| strategy.attempt(background, min_contrast))
}

/// Best readable foreground for `background`: the accent scale first, then the
/// gray scale, then white or black.
///
/// With `min_contrast <= 4.5` the result always meets the threshold, because
/// white or black reaches at least √21 ≈ 4.58:1 against any color. Above
/// that, the white/black result is returned even when it falls short; check
/// [`ForegroundResult::meets`].
pub fn get_best_foreground(
    background: Hex,
    accent_scale: &ColorScale,
    gray_scale: &ColorScale,
    min_contrast: f64,
) -> ForegroundResult {
    let chain = [
        ForegroundStrategy::ScaleSearch {
            scale: accent_scale,
            source: ForegroundSource::Accent,
        },
        ForegroundStrategy::ScaleSearch {
            scale: gray_scale,
            source: ForegroundSource::Gray,
        },
        ForegroundStrategy::BlackOrWhite,
    ];

    resolve_foreground(background, &chain, min_contrast)
        .unwrap_or_else(|| black_or_white(background))
}

/// Picks between step 1 and step 12 (step 11 when `is_subtle`) by contrast.
///
/// This is the weaker, legacy resolver: it never looks at the middle of the
/// scale and does not guarantee any minimum contrast. Callers that need
/// 4.5:1 must follow it with a fallback.
pub fn get_best_foreground_step(background: Hex, scale: &ColorScale, is_subtle: bool) -> usize {
    let dark = dark_extreme(is_subtle);

    if get_contrast_ratio(background, scale[0]) >= get_contrast_ratio(background, scale[dark]) {
        0
    } else {
        dark
    }
}

fn dark_extreme(is_subtle: bool) -> usize {
    if is_subtle {
        10
    } else {
        11
    }
}

/// APCA lightness contrast (Lc) of `text` on `background`.
pub(crate) fn contrast_apca(text: Oklch, background: Oklch) -> f32 {
    let text_srgb: Srgb = text.into_color();
    let bg_srgb: Srgb = background.into_color();

    let text_lin: LinSrgb = text_srgb.into_linear();
    let bg_lin: LinSrgb = bg_srgb.into_linear();

    let text_y = 0.2126 * text_lin.red + 0.7152 * text_lin.green + 0.0722 * text_lin.blue;
    let bg_y = 0.2126 * bg_lin.red + 0.7152 * bg_lin.green + 0.0722 * bg_lin.blue;

    const N_TXT: f32 = 0.57;
    const N_BG: f32 = 0.56;
    const R_SCALE: f32 = 1.14;
    const W_OFFSET: f32 = 0.027;
    const W_SCALE: f32 = 1.14;

    let soft_clamp = |y: f32| -> f32 {
        if y >= W_OFFSET {
            y
        } else {
            y + (W_OFFSET - y).powf(W_SCALE)
        }
    };

    let y_txt = soft_clamp(text_y);
    let y_bg = soft_clamp(bg_y);

    let (s_txt, s_bg, s_map) = if y_bg > y_txt {
        // Dark text on light background
        (y_txt.powf(N_TXT), y_bg.powf(N_BG), R_SCALE)
    } else {
        // Light text on dark background
        (y_bg.powf(N_BG), y_txt.powf(N_TXT), 1.0)
    };

    (s_bg - s_txt) * 108.0 * s_map
}
