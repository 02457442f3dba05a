//! Shared configuration loader for the saga outline tools.
//!
//! `defaults/saga.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SagaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use saga_parser::outline::parsing::ParserOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/saga.default.toml");

/// Top-level configuration consumed by saga applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SagaConfig {
    pub output: OutputConfig,
    pub parser: ParserConfig,
}

/// Where and how the converted artifacts are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub base_name: String,
    pub json_indent: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub reserved_sections: Vec<String>,
}

impl ParserConfig {
    pub fn to_options(&self) -> ParserOptions {
        ParserOptions {
            reserved_sections: self.reserved_sections.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SagaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SagaConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.directory, "Output");
        assert_eq!(config.output.base_name, "Casual Roleplay");
        assert_eq!(config.output.json_indent, 4);
        assert_eq!(
            config.parser.to_options(),
            ParserOptions::default(),
            "defaults must match the parser's own reserved sections"
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.base_name", "Season Notes")
            .expect("override to apply")
            .set_override("output.json_indent", 2i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.base_name, "Season Notes");
        assert_eq!(config.output.json_indent, 2);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nbase_name = \"Notes\"").expect("write");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");

        assert_eq!(config.output.base_name, "Notes");
        // Untouched keys keep their defaults
        assert_eq!(config.output.directory, "Output");
        assert_eq!(config.parser.reserved_sections.len(), 2);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/no/such/saga.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/no/such/saga.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.json_indent, 4);
    }
}
