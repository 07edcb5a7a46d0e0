//! Configuration: identifier domains, enforcement mode, policy overrides, logging.
//!
//! Loaded from TOML. Every section is optional and falls back to defaults.
//!
//! ```toml
//! [identifiers]
//! external_base = "http://localhost:8080/rest/"
//! internal_prefix = "info:fedora"
//!
//! [policy]
//! mode = "relaxed"
//!
//! [logger]
//! level = "debug"
//! format = "json"
//! ```

use std::path::Path;

use fedora_vocab::PolicyTable;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::identifier::{IdentifierTranslator, DEFAULT_INTERNAL_PREFIX};
use crate::mode::ModePolicy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// External/internal identifier domains.
    pub identifiers: IdentifierConfig,
    /// Enforcement of server-managed statements.
    pub policy: PolicyConfig,
    /// Log output.
    pub logger: LoggerConfig,
}

/// Identifier domain settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentifierConfig {
    /// Public base URI of the repository.
    pub external_base: String,
    /// Internal identifier root.
    pub internal_prefix: String,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            external_base: "http://localhost:8080/rest/".to_string(),
            internal_prefix: DEFAULT_INTERNAL_PREFIX.to_string(),
        }
    }
}

/// Server-managed property settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Process-wide enforcement mode.
    pub mode: ModePolicy,
    /// Replaces the built-in policy table when present.
    pub table: Option<PolicyTable>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logger settings. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Filter directive, e.g. `"info"` or `"fedora_translate=trace"`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Toml`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses a TOML configuration string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if it is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the identifier translator for the configured domains.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Identifiers`] if a configured base is not an absolute IRI.
    pub fn identifier_translator(&self) -> Result<IdentifierTranslator, ConfigError> {
        Ok(IdentifierTranslator::new(
            self.identifiers.external_base.as_str(),
            self.identifiers.internal_prefix.as_str(),
        )?)
    }

    /// The policy table in force: the configured override or the built-in table.
    #[must_use]
    pub fn policy_table(&self) -> &PolicyTable {
        match &self.policy.table {
            Some(table) => table,
            None => PolicyTable::fedora(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.policy.mode, ModePolicy::Strict);
        assert_eq!(config.policy_table(), PolicyTable::fedora());
        let ids = config.identifier_translator().unwrap();
        assert_eq!(ids.external_base(), "http://localhost:8080/rest/");
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml_str(
            r#"
            [identifiers]
            external_base = "http://ext"

            [policy]
            mode = "relaxed"

            [policy.table]
            managed_predicates = ["http://example.org/managed#lastModified"]

            [logger]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.policy.mode, ModePolicy::Relaxed);
        assert_eq!(config.logger.format, LogFormat::Json);
        assert_eq!(config.logger.level, "info");
        let table = config.policy_table();
        assert!(table.is_managed_predicate("http://example.org/managed#lastModified"));
        assert!(table.is_type_predicate(fedora_vocab::namespaces::rdf::TYPE));
        let ids = config.identifier_translator().unwrap();
        assert_eq!(ids.to_internal("http://ext/1").unwrap(), "info:fedora/1");
    }

    #[test]
    fn unknown_keys_and_modes_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("[policy]\nmode = \"loose\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(Config::from_toml_str("[identifiers]\nbase = \"x\"").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Path::new("/nonexistent/fedora-translate.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn relative_base_is_rejected() {
        let config = Config::from_toml_str("[identifiers]\nexternal_base = \"rest/\"").unwrap();
        assert!(matches!(
            config.identifier_translator(),
            Err(ConfigError::Identifiers(_))
        ));
    }

    #[test]
    fn shipped_example_parses() {
        let config = Config::from_toml_str(include_str!("../../clients/fedora-translate.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
