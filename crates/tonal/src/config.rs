//! Options for `tonal generate`, read from `tonal.yaml` and overridden by
//! command-line flags.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use scale_engine::{PaletteRequest, Scheme};
use serde::Deserialize;

use crate::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "tonal.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(Error::General(format!(
                "Unknown format `{}`. Expected text or json",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct GenerateOptions {
    pub seeds: Vec<String>,
    pub scheme: Scheme,
    pub harmonized: bool,
    pub pure_color_theory: bool,
    pub harmony_color_index: usize,
    pub format: Format,
}

/// Values given on the command line. Anything left unset keeps the value
/// from the config file.
#[derive(Debug, Clone, Default)]
pub struct GenerateOverrides {
    pub seeds: Vec<String>,
    pub scheme: Option<Scheme>,
    pub harmonized: bool,
    pub pure_color_theory: bool,
    pub harmony_color_index: Option<usize>,
    pub format: Option<Format>,
}

impl GenerateOptions {
    pub fn apply(mut self, overrides: GenerateOverrides) -> Self {
        if !overrides.seeds.is_empty() {
            self.seeds = overrides.seeds;
        }

        self.scheme = overrides.scheme.unwrap_or(self.scheme);
        self.harmonized |= overrides.harmonized;
        self.pure_color_theory |= overrides.pure_color_theory;
        self.harmony_color_index = overrides
            .harmony_color_index
            .unwrap_or(self.harmony_color_index);
        self.format = overrides.format.unwrap_or(self.format);

        self
    }

    /// One request per seed, in seed order.
    pub fn requests(&self) -> Vec<PaletteRequest> {
        self.seeds
            .iter()
            .map(|seed| PaletteRequest {
                hex: seed.clone(),
                scheme: self.scheme,
                harmonized: self.harmonized,
                pure_color_theory: self.pure_color_theory,
                harmony_color_index: self.harmony_color_index,
            })
            .collect()
    }
}

/// Reads the config file. Without an explicit path, a missing `tonal.yaml`
/// in `working_dir` means defaults.
pub fn load(working_dir: &Path, explicit: Option<&Path>) -> Result<GenerateOptions> {
    let path = working_dir.join(explicit.unwrap_or(Path::new(CONFIG_FILE_NAME)));

    match std::fs::read_to_string(&path) {
        Ok(contents) => parse(&contents),
        Err(e) if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
            Ok(GenerateOptions::default())
        }
        Err(e) => Err(Error::General(format!(
            "Could not read config file {}: {}",
            path.display(),
            e
        ))),
    }
}

pub fn parse(contents: &str) -> Result<GenerateOptions> {
    // An empty document is null to serde_yaml, not an empty map
    if contents.trim().trim_start_matches("---").trim().is_empty() {
        return Ok(GenerateOptions::default());
    }

    Ok(serde_yaml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use temp_dir::TempDir;

    #[test]
    fn parses_every_key() {
        let options = parse(indoc! {"
            ---
            seeds:
              - '#007DB8'
              - e5484d
            scheme: triadic
            harmonized: true
            pure-color-theory: true
            harmony-color-index: 1
            format: json
        "})
        .unwrap();

        assert_eq!(
            options,
            GenerateOptions {
                seeds: vec!["#007DB8".to_string(), "e5484d".to_string()],
                scheme: Scheme::Triadic,
                harmonized: true,
                pure_color_theory: true,
                harmony_color_index: 1,
                format: Format::Json,
            }
        );
    }

    #[test]
    fn empty_documents_are_defaults() {
        assert_eq!(parse("").unwrap(), GenerateOptions::default());
        assert_eq!(parse("---\n").unwrap(), GenerateOptions::default());
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(matches!(parse("colour: red"), Err(Error::Config(_))));
        assert!(matches!(parse("scheme: tetradic"), Err(Error::Config(_))));
    }

    #[test]
    fn missing_default_file_is_fine() {
        let working_dir = TempDir::new().unwrap();

        let options = load(working_dir.path(), None).unwrap();
        assert_eq!(options, GenerateOptions::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let working_dir = TempDir::new().unwrap();

        let result = load(working_dir.path(), Some(Path::new("palette.yaml")));
        assert!(matches!(result, Err(Error::General(_))));
    }

    #[test]
    fn reads_tonal_yaml_from_the_working_dir() {
        let working_dir = TempDir::new().unwrap();
        std::fs::write(
            working_dir.path().join(CONFIG_FILE_NAME),
            "scheme: complementary\n",
        )
        .unwrap();

        let options = load(working_dir.path(), None).unwrap();
        assert_eq!(options.scheme, Scheme::Complementary);
    }

    #[test]
    fn flags_override_the_file() {
        let from_file = GenerateOptions {
            seeds: vec!["#007DB8".to_string()],
            scheme: Scheme::Triadic,
            harmony_color_index: 1,
            ..Default::default()
        };

        let options = from_file.apply(GenerateOverrides {
            seeds: vec!["#E5484D".to_string()],
            scheme: Some(Scheme::Monochromatic),
            format: Some(Format::Json),
            ..Default::default()
        });

        assert_eq!(options.seeds, vec!["#E5484D".to_string()]);
        assert_eq!(options.scheme, Scheme::Monochromatic);
        assert_eq!(options.harmony_color_index, 1);
        assert_eq!(options.format, Format::Json);
    }

    #[test]
    fn builds_one_request_per_seed() {
        let options = GenerateOptions {
            seeds: vec!["#007DB8".to_string(), "#E5484D".to_string()],
            harmonized: true,
            ..Default::default()
        };

        let requests = options.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].hex, "#E5484D");
        assert!(requests.iter().all(|r| r.harmonized));
    }
}
