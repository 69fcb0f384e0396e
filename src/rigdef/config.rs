//! Resolver and report settings
//!
//! The commented defaults in `defaults/rigref.default.toml` are compiled in;
//! a `--config` file only needs the keys it changes.

use crate::rigdef::resolver::ResolverOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/rigref.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RigrefConfig {
    pub resolver: ResolverConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    pub enabled: bool,
    pub legacy_positional_numbers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub dump_table: bool,
    pub format: String,
}

impl From<&ResolverConfig> for ResolverOptions {
    fn from(config: &ResolverConfig) -> Self {
        ResolverOptions {
            enabled: config.enabled,
            legacy_positional_numbers: config.legacy_positional_numbers,
        }
    }
}

/// Sources for one [`RigrefConfig`], lowest priority first: the embedded
/// defaults, an optional user file, then command-line flags.
#[derive(Debug, Clone)]
pub struct ConfigLayers {
    builder: ConfigBuilder<DefaultState>,
}

impl ConfigLayers {
    pub fn defaults() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// The file must exist and be TOML.
    pub fn user_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        self
    }

    /// `--disable`: wins over both the defaults and the user file
    pub fn resolver_enabled(mut self, enabled: bool) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("resolver.enabled", enabled)?;
        Ok(self)
    }

    pub fn resolve(self) -> Result<RigrefConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = ConfigLayers::defaults().resolve().expect("defaults to deserialize");
        assert!(config.resolver.enabled);
        assert!(!config.resolver.legacy_positional_numbers);
        assert!(!config.report.dump_table);
        assert_eq!(config.report.format, "text");
    }

    #[test]
    fn flag_overrides_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[resolver]\nenabled = true").unwrap();

        let config = ConfigLayers::defaults()
            .user_file(file.path())
            .resolver_enabled(false)
            .expect("override to apply")
            .resolve()
            .expect("config to build");
        let options = ResolverOptions::from(&config.resolver);
        assert!(!options.enabled);
        assert!(!options.legacy_positional_numbers);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\nformat = \"json\"").unwrap();

        let config = ConfigLayers::defaults().user_file(file.path()).resolve().unwrap();
        assert_eq!(config.report.format, "json");
        assert!(config.resolver.enabled);
    }

    #[test]
    fn missing_user_file_is_an_error() {
        let result = ConfigLayers::defaults()
            .user_file("/nonexistent/rigref.toml")
            .resolve();
        assert!(result.is_err());
    }
}
