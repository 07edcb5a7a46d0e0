//! Mapping between external URIs and internal resource identifiers.
//!
//! An external URI lies in the repository's domain when it starts with the
//! configured base (e.g. `http://localhost:8080/rest/`). Its path below the
//! base is appended to the internal root (`info:fedora`), so
//! `http://localhost:8080/rest/a/b` becomes `info:fedora/a/b` and the base
//! itself becomes the bare root. Anything outside the domain is returned
//! unchanged. The translator holds no mutable state and can be shared freely.

use fedora_vocab::Term;
use crate::error::TranslationError;
use crate::syntax::check_iri;

/// Internal root used by the repository when none is configured.
pub const DEFAULT_INTERNAL_PREFIX: &str = "info:fedora";

/// Rewrites URIs between the external and internal domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierTranslator {
    /// External base, always ending in `/`.
    external_base: String,
    /// Internal root, never ending in `/`.
    internal_root: String,
}

impl IdentifierTranslator {
    /// Creates a translator for the given external base and internal prefix.
    ///
    /// A missing trailing `/` is added to the base; trailing slashes are
    /// stripped from the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidUri`] if either is not an absolute IRI.
    pub fn new(
        external_base: impl Into<String>,
        internal_prefix: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let mut external_base = external_base.into();
        check_iri(&external_base)?;
        if !external_base.ends_with('/') {
            external_base.push('/');
        }
        let internal_prefix = internal_prefix.into();
        let internal_root = internal_prefix.trim_end_matches('/').to_string();
        check_iri(&internal_root)?;
        Ok(Self {
            external_base,
            internal_root,
        })
    }

    /// Creates a translator onto the default `info:fedora` root.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidUri`] if the base is not an absolute IRI.
    pub fn fedora(external_base: impl Into<String>) -> Result<Self, TranslationError> {
        Self::new(external_base, DEFAULT_INTERNAL_PREFIX)
    }

    /// The external base, with its trailing `/`.
    #[must_use]
    pub fn external_base(&self) -> &str {
        &self.external_base
    }

    /// The internal root identifier.
    #[must_use]
    pub fn internal_root(&self) -> &str {
        &self.internal_root
    }

    /// True if the URI is inside the external domain.
    #[must_use]
    pub fn is_external_domain(&self, uri: &str) -> bool {
        uri.starts_with(self.external_base.as_str())
    }

    /// True if the identifier is the internal root or below it.
    #[must_use]
    pub fn is_internal_domain(&self, uri: &str) -> bool {
        match uri.strip_prefix(self.internal_root.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Translates an external URI to an internal identifier.
    ///
    /// URIs outside the external domain are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidUri`] if `uri` is not an absolute IRI.
    pub fn to_internal(&self, uri: &str) -> Result<String, TranslationError> {
        check_iri(uri)?;
        Ok(match uri.strip_prefix(self.external_base.as_str()) {
            Some("") => self.internal_root.clone(),
            Some(path) => format!("{}/{}", self.internal_root, path),
            None => uri.to_string(),
        })
    }

    /// Translates an internal identifier to its external URI.
    ///
    /// Identifiers outside the internal domain are returned unchanged.
    #[must_use]
    pub fn to_external(&self, id: &str) -> String {
        match id.strip_prefix(self.internal_root.as_str()) {
            Some("") => self.external_base.clone(),
            Some(rest) if rest.starts_with('/') => format!("{}{}", self.external_base, &rest[1..]),
            _ => id.to_string(),
        }
    }

    /// Translates an IRI term to the internal domain. Other terms pass through.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidUri`] for a malformed IRI term.
    pub fn internal_term(&self, term: Term) -> Result<Term, TranslationError> {
        match term {
            Term::Iri(uri) => self.to_internal(&uri).map(Term::Iri),
            other => Ok(other),
        }
    }

    /// Translates an IRI term to the external domain. Other terms pass through.
    #[must_use]
    pub fn external_term(&self, term: Term) -> Term {
        match term {
            Term::Iri(id) if self.is_internal_domain(&id) => Term::Iri(self.to_external(&id)),
            other => other,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn translator() -> IdentifierTranslator {
        IdentifierTranslator::fedora("http://ext/").unwrap()
    }

    #[test]
    fn resource_maps_below_internal_root() {
        let ids = translator();
        assert_eq!(ids.to_internal("http://ext/42").unwrap(), "info:fedora/42");
        assert_eq!(ids.to_internal("http://ext/a/b#frag").unwrap(), "info:fedora/a/b#frag");
        assert_eq!(ids.to_external("info:fedora/42"), "http://ext/42");
    }

    #[test]
    fn base_maps_to_root() {
        let ids = translator();
        assert_eq!(ids.to_internal("http://ext/").unwrap(), "info:fedora");
        assert_eq!(ids.to_external("info:fedora"), "http://ext/");
    }

    #[test]
    fn outside_domain_is_unchanged() {
        let ids = translator();
        assert_eq!(
            ids.to_internal("http://purl.org/dc/terms/title").unwrap(),
            "http://purl.org/dc/terms/title"
        );
        assert_eq!(ids.to_external("info:fedoraX/1"), "info:fedoraX/1");
        assert_eq!(ids.to_external("urn:uuid:1234"), "urn:uuid:1234");
    }

    #[test]
    fn base_without_slash_is_normalized() {
        let ids = IdentifierTranslator::new("http://ext", "info:fedora/").unwrap();
        assert_eq!(ids.external_base(), "http://ext/");
        assert_eq!(ids.internal_root(), "info:fedora");
        assert!(!ids.is_external_domain("http://extra/1"));
    }

    #[test]
    fn domain_predicates() {
        let ids = translator();
        assert!(ids.is_internal_domain("info:fedora"));
        assert!(ids.is_internal_domain("info:fedora/42"));
        assert!(!ids.is_internal_domain("info:fedoraX"));
        assert!(!ids.is_internal_domain("http://ext/42"));
        assert!(ids.is_external_domain("http://ext/42"));
    }

    #[test]
    fn malformed_uri_is_rejected() {
        let ids = translator();
        assert_eq!(
            ids.to_internal("http://ext/has space"),
            Err(TranslationError::InvalidUri("http://ext/has space".into()))
        );
        assert!(IdentifierTranslator::fedora("not a base").is_err());
    }

    #[test]
    fn only_iri_terms_translate() {
        let ids = translator();
        assert_eq!(
            ids.internal_term(Term::iri("http://ext/42")).unwrap(),
            Term::iri("info:fedora/42")
        );
        assert_eq!(ids.internal_term(Term::literal("http://ext/42")).unwrap(), Term::literal("http://ext/42"));
        assert_eq!(ids.internal_term(Term::blank("b0")).unwrap(), Term::blank("b0"));
        assert_eq!(ids.external_term(Term::iri("info:fedora/42")), Term::iri("http://ext/42"));
    }
}
