use crate::config::Format;
use crate::render::write_scale;
use crate::Result;

use scale_engine::{
    generate_backgrounds_oklch, generate_harmonious_palette, generate_scale, Appearance, Hex,
    HarmonyOptions, ScaleOptions, Scheme,
};

pub struct ScaleArgs<'a, W: std::io::Write> {
    pub accent: Hex,
    pub gray: Option<Hex>,
    pub background: Option<Hex>,
    pub appearance: Appearance,
    pub format: Format,
    pub stdout: &'a mut W,
}

/// Builds the scale options, deriving whatever the caller left out from
/// the accent.
pub fn options(
    accent: Hex,
    gray: Option<Hex>,
    background: Option<Hex>,
    appearance: Appearance,
) -> ScaleOptions {
    let gray = gray.unwrap_or_else(|| {
        generate_harmonious_palette(accent, Scheme::default(), &HarmonyOptions::default()).gray
    });
    let background = background.unwrap_or_else(|| {
        generate_backgrounds_oklch(accent, accent, Scheme::Monochromatic).get(appearance)
    });

    ScaleOptions {
        appearance,
        accent,
        gray,
        background,
    }
}

pub fn run<W: std::io::Write>(args: ScaleArgs<W>) -> Result<()> {
    let scale = generate_scale(&options(
        args.accent,
        args.gray,
        args.background,
        args.appearance,
    ));

    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *args.stdout, &scale)?;
            writeln!(args.stdout)?;
        }
        Format::Text => write_scale(args.stdout, &scale)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(
        accent: Hex,
        gray: Option<Hex>,
        background: Option<Hex>,
        appearance: Appearance,
        format: Format,
    ) -> String {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        run(ScaleArgs {
            accent,
            gray,
            background,
            appearance,
            format,
            stdout: &mut fake_stdout,
        })
        .unwrap();

        String::from_utf8(fake_stdout.into_inner()).unwrap()
    }

    #[test]
    fn uses_the_given_colors() {
        let accent: Hex = "#E5484D".parse().unwrap();
        let gray: Hex = "#8B8D98".parse().unwrap();
        let background: Hex = "#FFFFFF".parse().unwrap();

        let output = render(
            accent,
            Some(gray),
            Some(background),
            Appearance::Light,
            Format::Text,
        );

        let expected = generate_scale(&ScaleOptions {
            appearance: Appearance::Light,
            accent,
            gray,
            background,
        });

        assert!(output.contains(&expected.background.to_string()));
        for step in expected.accent_scale.iter().chain(&expected.gray_scale) {
            assert!(output.contains(&step.to_string()), "{step} missing");
        }
    }

    #[test]
    fn derives_missing_colors_from_the_accent() {
        let accent: Hex = "#007DB8".parse().unwrap();
        let derived = options(accent, None, None, Appearance::Dark);

        let palette =
            generate_harmonious_palette(accent, Scheme::Analogous, &HarmonyOptions::default());
        assert_eq!(derived.gray, palette.gray);
        assert_eq!(
            derived.background,
            generate_backgrounds_oklch(accent, accent, Scheme::Monochromatic).dark_background
        );
    }

    #[test]
    fn json_output_is_the_scale() {
        let accent: Hex = "#30A46C".parse().unwrap();

        let output = render(accent, None, None, Appearance::Light, Format::Json);

        let expected = generate_scale(&options(accent, None, None, Appearance::Light));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed, serde_json::to_value(expected).unwrap());
        assert!(parsed.get("accentScaleAlpha").is_some());
    }
}
