//! Measurements of a generated scale, used to check perceptual uniformity.

use serde::Serialize;

use crate::convert::hex_to_oklch;
use crate::scale::{ArrayOf12, ColorScale};

/// Adjacent-delta spread above which a scale reads as uneven.
pub const UNIFORMITY_WARN: f64 = 0.04;
/// Adjacent-delta spread a well-formed scale stays under.
pub const UNIFORMITY_TARGET: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMetrics {
    /// OKLCH lightness of each step.
    pub lightness: ArrayOf12<f64>,
    /// Absolute lightness change between adjacent steps.
    pub deltas: [f64; 11],
    /// Standard deviation of `deltas`.
    pub uniformity: f64,
    /// Lightness of step 9.
    pub solid_lightness: f64,
    /// Highest chroma among steps 1 and 2.
    pub neutral_chroma: f64,
}

impl ScaleMetrics {
    pub fn measure(scale: &ColorScale) -> Self {
        let colors = scale.map(hex_to_oklch);
        let lightness = colors.map(|color| color.l as f64);
        let deltas: [f64; 11] = core::array::from_fn(|i| (lightness[i + 1] - lightness[i]).abs());

        ScaleMetrics {
            lightness,
            deltas,
            uniformity: std_dev(&deltas),
            solid_lightness: lightness[8],
            neutral_chroma: colors[0].chroma.max(colors[1].chroma) as f64,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.uniformity < UNIFORMITY_WARN
    }
}

/// Population standard deviation. Zero for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Hex;

    #[test]
    fn std_dev_of_constant_values_is_zero() {
        assert_eq!(std_dev(&[0.05; 11]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn std_dev_matches_hand_computed_value() {
        assert!((std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn gray_ramp_is_uniform_and_neutral() {
        let ramp: ColorScale = core::array::from_fn(|i| {
            let v = 250 - i as u8 * 20;
            Hex::from_rgb(v, v, v)
        });
        let metrics = ScaleMetrics::measure(&ramp);

        assert!(metrics.neutral_chroma < 1e-3);
        assert!(metrics.lightness.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(metrics.solid_lightness, metrics.lightness[8]);
    }

    #[test]
    fn uneven_scale_is_flagged() {
        let mut ramp: ColorScale = [Hex::WHITE; 12];
        ramp[11] = Hex::BLACK;

        let metrics = ScaleMetrics::measure(&ramp);
        assert!(!metrics.is_uniform());
    }
}
