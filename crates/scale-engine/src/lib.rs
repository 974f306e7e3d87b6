//! Color-scale synthesis.
//!
//! From a single seed color this crate derives an accent and a gray, light and
//! dark backgrounds, twelve-step scales for both appearances (opaque and alpha),
//! semantic feedback colors and contrast-resolved foregrounds. Every function is
//! a pure mapping from its inputs: nothing is cached across calls and no state
//! is shared between requests.

use thiserror::Error;

pub mod background;
pub mod bundle;
pub mod contrast;
pub mod convert;
pub mod harmony;
pub mod metrics;
mod reference;
pub mod scale;
pub mod semantic;

pub use background::{generate_backgrounds_oklch, Backgrounds};
pub use bundle::{generate_palette, PaletteBundle, PaletteRequest, Themed, ThemeRoles};
pub use contrast::{
    get_best_foreground, get_best_foreground_step, get_contrast_ratio, ForegroundResult,
    ForegroundSource, ForegroundStrategy, WCAG_AA,
};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, is_valid_hex, AlphaHex, Hex, Hsl, Rgb};
pub use harmony::{generate_harmonious_palette, HarmoniousPalette, HarmonyOptions, Scheme};
pub use metrics::ScaleMetrics;
pub use scale::{
    generate_scale, AlphaColorScale, Appearance, ColorGenerator, ColorScale, Scale, ScaleOptions,
};
pub use semantic::{generate_semantic_colors, SemanticColorSet, SemanticColors, SemanticKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid hex color `{0}`. Use #RRGGBB or #RGB")]
    InvalidHex(String),
    #[error("Unknown harmony scheme `{0}`. Expected one of: monochromatic, analogous, complementary, triadic")]
    UnknownScheme(String),
    #[error("Unknown appearance `{0}`. Expected light or dark")]
    UnknownAppearance(String),
}
