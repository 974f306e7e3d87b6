use crate::config::{self, Format, GenerateOverrides};
use crate::render::write_bundle;
use crate::Result;

use owo_colors::{OwoColorize as _, Stream};
use rayon::prelude::*;
use scale_engine::{generate_palette, PaletteBundle};

use std::path::Path;

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub config: Option<&'a Path>,
    pub overrides: GenerateOverrides,
    pub stdout: &'a mut W,
}

/// Generates one palette per seed. Seeds are independent, so they are
/// generated in parallel and printed in the order they were given.
pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let options = config::load(args.working_dir, args.config)?.apply(args.overrides);

    if options.seeds.is_empty() {
        return Err(crate::Error::General(format!(
            "No seed colors given. Pass them as arguments or list them under `seeds` in {}",
            config::CONFIG_FILE_NAME
        )));
    }

    let requests = options.requests();
    let results: Vec<scale_engine::Result<PaletteBundle>> =
        requests.par_iter().map(generate_palette).collect();

    let mut bundles = Vec::with_capacity(results.len());
    let mut failures = 0;

    for (request, result) in requests.iter().zip(results) {
        match result {
            Ok(bundle) => bundles.push(bundle),
            Err(e) => {
                failures += 1;
                writeln!(
                    args.stdout,
                    "{} {}: {}",
                    "✗".if_supports_color(Stream::Stdout, |s| s.red()),
                    request.hex,
                    e
                )?;
            }
        }
    }

    if failures > 0 {
        return Err(crate::Error::General(format!(
            "Failed to generate {} of {} palettes",
            failures,
            requests.len()
        )));
    }

    match options.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *args.stdout, &bundles)?;
            writeln!(args.stdout)?;
        }
        Format::Text => {
            for (i, bundle) in bundles.iter().enumerate() {
                if i > 0 {
                    writeln!(args.stdout)?;
                }
                write_bundle(args.stdout, bundle)?;
            }
        }
    }

    Ok(())
}
