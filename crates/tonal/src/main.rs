use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use owo_colors::{OwoColorize as _, Stream};
use std::path::PathBuf;

use scale_engine::{Appearance, Hex, Scheme};
use tonal::commands::analyze::{run as analyze, AnalyzeArgs};
use tonal::commands::contrast::{run as contrast, ContrastArgs};
use tonal::commands::generate::{run as generate, GenerateArgs};
use tonal::commands::scale::{run as scale, ScaleArgs};
use tonal::config::{Format, GenerateOverrides};

#[derive(Parser, Debug, Clone)]
#[command(about = "Tonal, a color scale generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Generate full palettes from one or more seed colors
    Generate {
        /// Seed colors as #RRGGBB or #RGB. Falls back to `seeds` in tonal.yaml
        seeds: Vec<String>,
        #[arg(long)]
        scheme: Option<Scheme>,
        /// Also generate the analogous and complementary variants
        #[arg(long)]
        harmonized: bool,
        /// Rotate hue only, keeping the seed's saturation and lightness
        #[arg(long)]
        pure_color_theory: bool,
        /// Which of the scheme's hue rotations to use
        #[arg(long)]
        harmony_index: Option<usize>,
        #[arg(long)]
        format: Option<Format>,
        /// Config file, relative to the working directory
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value = ".")]
        working_dir: PathBuf,
    },
    /// Generate a single 12-step scale for one appearance
    Scale {
        accent: Hex,
        #[arg(long)]
        gray: Option<Hex>,
        #[arg(long)]
        background: Option<Hex>,
        #[arg(long, default_value = "light")]
        appearance: Appearance,
        #[arg(long, default_value = "text")]
        format: Format,
    },
    /// Check the WCAG contrast ratio between two colors
    Contrast { foreground: Hex, background: Hex },
    /// Measure how evenly a seed's scales step through lightness
    Analyze {
        seed: String,
        #[arg(long, default_value = "analogous")]
        scheme: Scheme,
        #[arg(long, default_value = "text")]
        format: Format,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Generate {
            seeds,
            scheme,
            harmonized,
            pure_color_theory,
            harmony_index,
            format,
            config,
            working_dir,
        }) => generate(GenerateArgs {
            working_dir: &working_dir,
            config: config.as_deref(),
            overrides: GenerateOverrides {
                seeds,
                scheme,
                harmonized,
                pure_color_theory,
                harmony_color_index: harmony_index,
                format,
            },
            stdout: &mut stdout,
        }),
        Some(Commands::Scale {
            accent,
            gray,
            background,
            appearance,
            format,
        }) => scale(ScaleArgs {
            accent,
            gray,
            background,
            appearance,
            format,
            stdout: &mut stdout,
        }),
        Some(Commands::Contrast {
            foreground,
            background,
        }) => contrast(ContrastArgs {
            foreground,
            background,
            stdout: &mut stdout,
        }),
        Some(Commands::Analyze {
            seed,
            scheme,
            format,
        }) => analyze(AnalyzeArgs {
            seed: &seed,
            scheme,
            format,
            stdout: &mut stdout,
        }),
        None => {
            if let Err(e) = Args::command().print_help() {
                eprintln!("Could not print help: {}", e);
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stream::Stderr, |s| s.red()),
            e
        );
        std::process::exit(1);
    }
}
