//! Error types for translation, parsing and configuration.
//!
//! Constraint violations are not errors on their own: they are collected into
//! a [`ViolationReport`] and surface only once a whole body has been scanned,
//! as [`RewriteError::Constraint`].

use std::path::PathBuf;

use thiserror::Error;

use crate::report::ViolationReport;

/// A term cannot be carried into the internal request because it is not
/// well-formed.
///
/// Everything the serializers write verbatim is checked, so a rewritten
/// request can never contain text the storage layer would read as extra
/// syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The URI failed IRI syntax validation.
    #[error("invalid URI: {0}")]
    InvalidUri(String),
    /// A literal carries a malformed language tag.
    #[error("invalid language tag: {0}")]
    InvalidLanguageTag(String),
    /// A blank node label, variable name or prefix label is malformed.
    #[error("invalid name: {0}")]
    InvalidName(String),
    /// A FILTER expression does not stay inside its parentheses.
    #[error("invalid FILTER expression: {0}")]
    InvalidFilter(String),
}

/// Failure of a graph or update translation.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// One or more statements may not be written; every offender is listed.
    #[error("{} constraint violation(s) in request body", .0.len())]
    Constraint(ViolationReport),
    /// A term could not be translated.
    ///
    /// This aborts the scan at the offending term, so violations found
    /// before it are not reported.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl RewriteError {
    /// Returns the collected violations, if this is a constraint failure.
    #[must_use]
    pub fn violations(&self) -> Option<&ViolationReport> {
        match self {
            RewriteError::Constraint(report) => Some(report),
            RewriteError::Translation(_) => None,
        }
    }
}

/// A request body could not be turned into a graph or update tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No RDF syntax is registered for the declared media type.
    #[error("media type {0} is not a valid RDF format")]
    UnsupportedMediaType(String),
    /// The body does not parse in its declared syntax.
    #[error("RDF was not parsable: {0}")]
    MalformedInput(String),
}

/// An unrecognised enforcement mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown server-managed properties mode {0:?} (expected strict, lenient or relaxed)")]
pub struct ParseModeError(pub String);

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid TOML for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// A configured identifier base is not an absolute IRI.
    #[error("invalid [identifiers] section: {0}")]
    Identifiers(#[from] TranslationError),
}
