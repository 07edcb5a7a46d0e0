//! `ldp:` namespace: Linked Data Platform containment and interaction models.
//!
//! Only part of LDP is server managed. Membership predicates such as
//! `ldp:membershipResource` stay client writable; `ldp:contains` does not.
//! Interaction-model types are relaxable so migration tooling can replay them.

use super::{Namespace, NamespaceModule};

/// The LDP namespace.
pub const NS: &str = "http://www.w3.org/ns/ldp#";

/// `ldp:contains`.
pub const CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";

/// `ldp:NonRDFSource`.
pub const NON_RDF_SOURCE: &str = "http://www.w3.org/ns/ldp#NonRDFSource";
/// `ldp:Resource`.
pub const RESOURCE: &str = "http://www.w3.org/ns/ldp#Resource";
/// `ldp:RDFSource`.
pub const RDF_SOURCE: &str = "http://www.w3.org/ns/ldp#RDFSource";
/// `ldp:Container`.
pub const CONTAINER: &str = "http://www.w3.org/ns/ldp#Container";
/// `ldp:BasicContainer`.
pub const BASIC_CONTAINER: &str = "http://www.w3.org/ns/ldp#BasicContainer";
/// `ldp:DirectContainer`.
pub const DIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#DirectContainer";
/// `ldp:IndirectContainer`.
pub const INDIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#IndirectContainer";

/// Returns the `ldp:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "ldp",
            iri: NS,
            label: "Linked Data Platform",
            managed: false,
        },
        managed_predicates: &[CONTAINS],
        restricted_types: &[NON_RDF_SOURCE],
        relaxable_types: &[
            RESOURCE,
            RDF_SOURCE,
            CONTAINER,
            BASIC_CONTAINER,
            DIRECT_CONTAINER,
            INDIRECT_CONTAINER,
        ],
    }
}
