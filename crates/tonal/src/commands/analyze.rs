use crate::config::Format;
use crate::Result;

use owo_colors::{OwoColorize as _, Stream};
use scale_engine::metrics::{UNIFORMITY_TARGET, UNIFORMITY_WARN};
use scale_engine::{generate_palette, Appearance, PaletteRequest, ScaleMetrics, Scheme};
use serde::Serialize;

/// Largest difference in step 9 lightness between light and dark before
/// the two appearances stop reading as the same color.
pub const APPEARANCE_BALANCE: f64 = 0.15;

pub struct AnalyzeArgs<'a, W: std::io::Write> {
    pub seed: &'a str,
    pub scheme: Scheme,
    pub format: Format,
    pub stdout: &'a mut W,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReport {
    pub name: String,
    pub appearance: Appearance,
    pub metrics: ScaleMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub scales: Vec<ScaleReport>,
    /// Step 9 lightness, light minus dark.
    pub solid_difference: f64,
}

impl Analysis {
    pub fn is_balanced(&self) -> bool {
        self.solid_difference.abs() <= APPEARANCE_BALANCE
    }
}

pub fn analyze(request: &PaletteRequest) -> Result<Analysis> {
    let bundle = generate_palette(request)?;

    let mut scales = Vec::with_capacity(4);
    for appearance in Appearance::ALL {
        scales.push(ScaleReport {
            name: "accent".to_string(),
            appearance,
            metrics: ScaleMetrics::measure(bundle.accent_scale.get(appearance)),
        });
        scales.push(ScaleReport {
            name: "gray".to_string(),
            appearance,
            metrics: ScaleMetrics::measure(bundle.gray_scale.get(appearance)),
        });
    }

    let solid = |appearance: Appearance| {
        ScaleMetrics::measure(bundle.accent_scale.get(appearance)).solid_lightness
    };

    Ok(Analysis {
        scales,
        solid_difference: solid(Appearance::Light) - solid(Appearance::Dark),
    })
}

fn verdict(uniformity: f64) -> String {
    if uniformity < UNIFORMITY_TARGET {
        "good".if_supports_color(Stream::Stdout, |s| s.green()).to_string()
    } else if uniformity < UNIFORMITY_WARN {
        "ok".if_supports_color(Stream::Stdout, |s| s.yellow()).to_string()
    } else {
        "uneven".if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    }
}

pub fn run<W: std::io::Write>(args: AnalyzeArgs<W>) -> Result<()> {
    let analysis = analyze(&PaletteRequest::new(args.seed, args.scheme))?;

    if args.format == Format::Json {
        serde_json::to_writer_pretty(&mut *args.stdout, &analysis)?;
        writeln!(args.stdout)?;
        return Ok(());
    }

    writeln!(args.stdout, "{} {}", args.seed, args.scheme)?;
    for report in &analysis.scales {
        let metrics = &report.metrics;
        writeln!(
            args.stdout,
            "  {:<7}{:<6} uniformity {:.4} {}  solid L {:.3}  neutral C {:.4}",
            report.name,
            report.appearance.to_string(),
            metrics.uniformity,
            verdict(metrics.uniformity),
            metrics.solid_lightness,
            metrics.neutral_chroma,
        )?;
    }

    let mark = if analysis.is_balanced() {
        "✓".if_supports_color(Stream::Stdout, |s| s.green()).to_string()
    } else {
        "✗".if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    };
    writeln!(
        args.stdout,
        "  {} light/dark solid difference {:.3}",
        mark, analysis.solid_difference
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_every_scale() {
        let analysis = analyze(&PaletteRequest::new("#007DB8", Scheme::Analogous)).unwrap();

        assert_eq!(analysis.scales.len(), 4);
        assert!(analysis.scales.iter().all(|r| r.metrics.is_uniform()));
        assert!(analysis.is_balanced());
    }

    #[test]
    fn text_output() {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(AnalyzeArgs {
            seed: "#E5484D",
            scheme: Scheme::Triadic,
            format: Format::Text,
            stdout: &mut fake_stdout,
        })
        .unwrap();

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();
        assert!(output.starts_with("#E5484D triadic"));
        assert_eq!(output.matches("uniformity").count(), 4);
        assert!(output.contains("good"));
    }

    #[test]
    fn invalid_seed_is_an_error() {
        let mut fake_stdout = std::io::sink();

        let result = run(AnalyzeArgs {
            seed: "#12",
            scheme: Scheme::Analogous,
            format: Format::Text,
            stdout: &mut fake_stdout,
        });

        assert!(matches!(
            result,
            Err(crate::Error::Engine(scale_engine::Error::InvalidHex(_)))
        ));
    }
}
