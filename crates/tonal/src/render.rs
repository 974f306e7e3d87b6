//! Plain-text rendering of palettes, with truecolor swatches when the
//! terminal supports them.

use owo_colors::{OwoColorize as _, Stream};
use scale_engine::{Appearance, Hex, PaletteBundle, Scale, SemanticKind};

pub(crate) fn swatch(color: Hex) -> String {
    let [r, g, b] = color.channels();

    format!(
        "{}",
        "  ".if_supports_color(Stream::Stdout, |s| s.on_truecolor(r, g, b))
    )
}

fn labeled(color: Hex) -> String {
    format!("{} {}", swatch(color), color)
}

pub(crate) fn write_bundle<W: std::io::Write>(
    stdout: &mut W,
    bundle: &PaletteBundle,
) -> std::io::Result<()> {
    writeln!(
        stdout,
        "{} {}",
        bundle
            .seed
            .to_string()
            .if_supports_color(Stream::Stdout, |s| s.bold()),
        bundle.scheme
    )?;
    writeln!(stdout, "  accent      {}", labeled(bundle.accent))?;
    writeln!(stdout, "  gray        {}", labeled(bundle.gray))?;
    writeln!(
        stdout,
        "  background  {}  {}",
        labeled(bundle.light_background),
        labeled(bundle.dark_background)
    )?;
    writeln!(stdout)?;

    writeln!(
        stdout,
        "  step  {:<12}{:<12}{:<12}{:<12}",
        "light", "dark", "gray light", "gray dark"
    )?;
    for step in 0..12 {
        writeln!(
            stdout,
            "  {:>4}  {}  {}  {}  {}",
            step + 1,
            labeled(bundle.accent_scale.light[step]),
            labeled(bundle.accent_scale.dark[step]),
            labeled(bundle.gray_scale.light[step]),
            labeled(bundle.gray_scale.dark[step]),
        )?;
    }
    writeln!(stdout)?;

    for appearance in Appearance::ALL {
        let roles = bundle.roles.get(appearance);
        writeln!(
            stdout,
            "  {appearance}: text {} on {}, primary {} on {}",
            roles.foreground, roles.background, roles.primary_foreground, roles.primary
        )?;

        let semantic = bundle.semantic.get(appearance);
        for kind in SemanticKind::ALL {
            let set = semantic.get(kind);
            writeln!(
                stdout,
                "    {:<8} {}  muted {}  border {}",
                kind.to_string(),
                labeled(set.base),
                labeled(set.muted),
                labeled(set.border),
            )?;
        }
    }

    for variant in [&bundle.analogous, &bundle.complementary].into_iter().flatten() {
        writeln!(stdout)?;
        write_bundle(stdout, variant)?;
    }

    Ok(())
}

pub(crate) fn write_scale<W: std::io::Write>(stdout: &mut W, scale: &Scale) -> std::io::Result<()> {
    writeln!(stdout, "  step  {:<12}{:<11}{:<12}alpha", "accent", "alpha", "gray")?;

    for step in 0..12 {
        writeln!(
            stdout,
            "  {:>4}  {}  {}  {}  {}",
            step + 1,
            labeled(scale.accent_scale[step]),
            scale.accent_scale_alpha[step],
            labeled(scale.gray_scale[step]),
            scale.gray_scale_alpha[step],
        )?;
    }

    writeln!(stdout)?;
    writeln!(stdout, "  background  {}", labeled(scale.background))?;
    writeln!(stdout, "  contrast    {}", labeled(scale.accent_contrast))?;

    Ok(())
}
