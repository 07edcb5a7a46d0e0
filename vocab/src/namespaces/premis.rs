//! `premis:` namespace: binary fixity properties computed on ingest.

use super::{Namespace, NamespaceModule};

/// The PREMIS namespace.
pub const NS: &str = "http://www.loc.gov/premis/rdf/v1#";

/// `premis:hasSize`.
pub const HAS_SIZE: &str = "http://www.loc.gov/premis/rdf/v1#hasSize";
/// `premis:hasMessageDigest`.
pub const HAS_MESSAGE_DIGEST: &str = "http://www.loc.gov/premis/rdf/v1#hasMessageDigest";

/// Returns the `premis:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "premis",
            iri: NS,
            label: "PREMIS preservation metadata",
            managed: false,
        },
        managed_predicates: &[HAS_SIZE, HAS_MESSAGE_DIGEST],
        restricted_types: &[],
        relaxable_types: &[],
    }
}
