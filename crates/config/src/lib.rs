//! Parameter-source implementations for the nl2sql prompt pipeline.
//!
//! Provides two `ParameterSource` backends:
//!
//! - [`TomlParameterSource`] — a flat `[parameters]` table loaded from a
//!   TOML file, with `NL2SQL_PARAM_*` environment variables taking
//!   priority over file values.
//! - [`StaticParameterSource`] — an in-memory map for tests and for hosts
//!   that already own their own configuration layer.
//!
//! Both are read-through: the sampler re-reads parameters on every call,
//! so a source that refreshes its backing data changes behavior live.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use nl2sql_core::error::ConfigError;
use nl2sql_core::params::ParameterSource;

/// Environment-variable prefix for parameter overrides. A parameter named
/// `few-shot-shown-width` is overridden by `NL2SQL_PARAM_FEW_SHOT_SHOWN_WIDTH`.
pub const ENV_PREFIX: &str = "NL2SQL_PARAM_";

/// Errors from loading a parameter file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read parameter file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse parameter file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Parameter {key} has unsupported type (expected string or integer)")]
    UnsupportedValue { key: String },
}

/// On-disk shape: a single flat `[parameters]` table.
#[derive(Debug, Default, Deserialize)]
struct ParametersFile {
    #[serde(default)]
    parameters: HashMap<String, toml::Value>,
}

/// A `ParameterSource` backed by a TOML file plus environment overrides.
#[derive(Debug, Clone, Default)]
pub struct TomlParameterSource {
    values: HashMap<String, String>,
}

impl TomlParameterSource {
    /// Load parameters from a specific file path.
    ///
    /// A missing file is not an error: the source starts empty and
    /// environment overrides still apply.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::info!(
                "No parameter file found at {}, starting empty",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let file: ParametersFile =
            toml::from_str(&content).map_err(|e| SettingsError::ParseError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut values = HashMap::new();
        for (key, value) in file.parameters {
            let rendered = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                _ => return Err(SettingsError::UnsupportedValue { key }),
            };
            values.insert(key, rendered);
        }

        Ok(Self { values })
    }

    fn env_override(name: &str) -> Option<String> {
        let var = format!(
            "{ENV_PREFIX}{}",
            name.to_ascii_uppercase().replace('-', "_")
        );
        std::env::var(var).ok()
    }
}

impl ParameterSource for TomlParameterSource {
    fn parameter(&self, name: &str) -> Result<Option<String>, ConfigError> {
        if let Some(value) = Self::env_override(name) {
            return Ok(Some(value));
        }
        Ok(self.values.get(name).cloned())
    }
}

/// An in-memory `ParameterSource`.
#[derive(Debug, Clone, Default)]
pub struct StaticParameterSource {
    values: HashMap<String, String>,
}

impl StaticParameterSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any existing value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl<const N: usize> From<[(&str, &str); N]> for StaticParameterSource {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { values }
    }
}

impl ParameterSource for StaticParameterSource {
    fn parameter(&self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.values.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn static_source_returns_set_values() {
        let source = StaticParameterSource::new()
            .set("exemplar-recall-width", "10")
            .set("few-shot-shown-width", "3");
        assert_eq!(
            source.parameter("exemplar-recall-width").unwrap(),
            Some("10".into())
        );
        assert_eq!(source.parameter("self-consistency-round-count").unwrap(), None);
    }

    #[test]
    fn static_source_from_pairs() {
        let source = StaticParameterSource::from([("few-shot-shown-width", "5")]);
        assert_eq!(
            source.parameter("few-shot-shown-width").unwrap(),
            Some("5".into())
        );
    }

    #[test]
    fn toml_source_loads_strings_and_integers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[parameters]\nexemplar-recall-width = 15\nfew-shot-shown-width = \"3\""
        )
        .unwrap();

        let source = TomlParameterSource::load_from(file.path()).unwrap();
        assert_eq!(
            source.parameter("exemplar-recall-width").unwrap(),
            Some("15".into())
        );
        assert_eq!(
            source.parameter("few-shot-shown-width").unwrap(),
            Some("3".into())
        );
    }

    #[test]
    fn toml_source_rejects_non_scalar_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[parameters]\nwidths = [1, 2]").unwrap();

        let err = TomlParameterSource::load_from(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedValue { .. }));
    }

    #[test]
    fn missing_file_yields_empty_source() {
        let source =
            TomlParameterSource::load_from(Path::new("/nonexistent/parameters.toml")).unwrap();
        assert_eq!(source.parameter("exemplar-recall-width").unwrap(), None);
    }

    #[test]
    fn env_var_overrides_file_value() {
        let source = TomlParameterSource::default();
        // SAFETY: test-local variable name, no concurrent reader depends on it.
        unsafe { std::env::set_var("NL2SQL_PARAM_ENV_OVERRIDE_PROBE", "42") };
        assert_eq!(
            source.parameter("env-override-probe").unwrap(),
            Some("42".into())
        );
        unsafe { std::env::remove_var("NL2SQL_PARAM_ENV_OVERRIDE_PROBE") };
    }
}
