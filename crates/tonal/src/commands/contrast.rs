use crate::Result;

use owo_colors::{OwoColorize as _, Stream};
use scale_engine::contrast::{get_contrast_ratio, WCAG_AA, WCAG_AAA};
use scale_engine::Hex;

/// Minimum ratio for large text (18pt, or 14pt bold).
pub const WCAG_AA_LARGE: f64 = 3.0;

const LEVELS: [(&str, f64); 3] = [
    ("AA large", WCAG_AA_LARGE),
    ("AA", WCAG_AA),
    ("AAA", WCAG_AAA),
];

pub struct ContrastArgs<'a, W: std::io::Write> {
    pub foreground: Hex,
    pub background: Hex,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ContrastArgs<W>) -> Result<()> {
    let ratio = get_contrast_ratio(args.foreground, args.background);

    writeln!(
        args.stdout,
        "{} {} on {} {}  {:.2}:1",
        crate::render::swatch(args.foreground),
        args.foreground,
        crate::render::swatch(args.background),
        args.background,
        ratio
    )?;

    for (name, minimum) in LEVELS {
        if ratio >= minimum {
            writeln!(
                args.stdout,
                "  {} {:<9}{:.1}:1",
                "✓".if_supports_color(Stream::Stdout, |s| s.green()),
                name,
                minimum
            )?;
        } else {
            writeln!(
                args.stdout,
                "  {} {:<9}{:.1}:1",
                "✗".if_supports_color(Stream::Stdout, |s| s.red()),
                name,
                minimum
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(foreground: &str, background: &str) -> String {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(ContrastArgs {
            foreground: foreground.parse().unwrap(),
            background: background.parse().unwrap(),
            stdout: &mut fake_stdout,
        })
        .unwrap();

        String::from_utf8(fake_stdout.into_inner()).unwrap()
    }

    #[test]
    fn black_on_white_passes_everything() {
        let output = check("#000000", "#FFFFFF");

        assert!(output.contains("21.00:1"));
        assert!(!output.contains('✗'));
    }

    #[test]
    fn identical_colors_fail_everything() {
        let output = check("#777777", "#777777");

        assert!(output.contains("1.00:1"));
        assert!(!output.contains('✓'));
    }

    #[test]
    fn mid_gray_only_passes_large_text() {
        // about 3.03:1
        let output = check("#949494", "#FFFFFF");
        let level = |minimum: &str| output.lines().find(|line| line.ends_with(minimum)).unwrap();

        assert!(level("3.0:1").contains('✓'));
        assert!(level("4.5:1").contains('✗'));
        assert!(level("7.0:1").contains('✗'));
    }
}
