//! YAML configuration for the CLI.
//!
//! ```yaml
//! mix_mode: average
//! scheme:
//!   start: 0.0
//!   step: 0.05
//! palette:
//!   brand: "#3366cc"
//!   brandMuted: "hsl(220, 30%, 50%)"
//! ```
//!
//! Every key is optional. Palette entries are registered as color names
//! before any expression is parsed.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dye::{MixMode, SchemeOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "DYE_CONFIG";

/// CLI defaults and extra color names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mix mode used when `mix` is given no `--mode`.
    pub mix_mode: String,
    /// Default shade scheme options.
    pub scheme: SchemeConfig,
    /// Extra names mapped to color expressions.
    pub palette: BTreeMap<String, String>,
}

/// Default `start`/`step` for the `scheme` command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemeConfig {
    /// Generator value for the first color.
    pub start: f64,
    /// Increment between colors.
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mix_mode: MixMode::default().name().to_string(),
            scheme: SchemeConfig::default(),
            palette: BTreeMap::new(),
        }
    }
}

impl Default for SchemeConfig {
    fn default() -> Self {
        let options = SchemeOptions::default();
        Self {
            start: options.start,
            step: options.step,
        }
    }
}

impl Config {
    /// Loads from `path`, else from `$DYE_CONFIG`, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        debug!(path = %path.display(), palette = config.palette.len(), "loaded config");
        Ok(config)
    }

    /// Loads configuration from a YAML string. Blank input yields defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.mix_mode()?;
        Ok(config)
    }

    /// The configured default mix mode.
    pub fn mix_mode(&self) -> Result<MixMode> {
        self.mix_mode
            .parse()
            .with_context(|| format!("Invalid mix_mode '{}'", self.mix_mode))
    }

    /// The configured default scheme options.
    pub fn scheme_options(&self) -> SchemeOptions {
        SchemeOptions::new(self.scheme.start, self.scheme.step)
    }

    /// Registers every palette entry as a color name.
    ///
    /// Entries are processed in name order, so an entry may refer to one
    /// that sorts before it.
    pub fn register_palette(&self) -> Result<()> {
        for (name, expr) in &self.palette {
            let color = dye::parse_color(expr)
                .with_context(|| format!("Invalid palette color '{name}': {expr}"))?;
            debug!(name = %name, color = %color, "registering palette color");
            dye::names::register(name.as_str(), color)
                .with_context(|| format!("Cannot register palette color '{name}'"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dye::Color;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mix_mode().unwrap(), MixMode::Subtractive);
        assert_eq!(config.scheme_options(), SchemeOptions::default());
        assert!(config.palette.is_empty());
        assert_eq!(Config::from_yaml_str("  \n").unwrap(), config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str("scheme:\n  step: 0.05\n").unwrap();
        assert_eq!(config.mix_mode().unwrap(), MixMode::Subtractive);
        assert_eq!(config.scheme_options(), SchemeOptions::new(0.0, 0.05));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r##"
mix_mode: rgbAverage
scheme:
  start: 0.1
  step: 0.2
palette:
  cliTestBrand: "#3366cc"
  cliTestMuted: "hsl(220, 30%, 50%)"
"##;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.mix_mode().unwrap(), MixMode::Average);
        assert_eq!(config.scheme_options(), SchemeOptions::new(0.1, 0.2));
        assert_eq!(config.palette.len(), 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_yaml_str("mix_mode: screen\n").is_err());
        assert!(Config::from_yaml_str("colour: red\n").is_err());
        assert!(Config::from_yaml_str("scheme: fast\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mix_mode: additive").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.mix_mode().unwrap(), MixMode::Additive);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_register_palette() {
        let mut config = Config::default();
        config.palette.insert("cliTestAccent".into(), "#0af".into());
        config.palette.insert("cliTestAccentDim".into(), "cliTestAccent".into());
        config.register_palette().unwrap();

        let expected = Color::rgb(0.0, 170.0, 255.0);
        assert_eq!(dye::parse_color("cliTestAccent").unwrap(), expected);
        assert_eq!(dye::parse_color("cliTestAccentDim").unwrap(), expected);
    }

    #[test]
    fn test_register_palette_errors() {
        let mut config = Config::default();
        config.palette.insert("cliTestBroken".into(), "#12".into());
        assert!(config.register_palette().is_err());

        let mut config = Config::default();
        config.palette.insert("bad name".into(), "#fff".into());
        assert!(config.register_palette().is_err());
    }
}
