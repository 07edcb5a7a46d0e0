//! `rdf:` and `xsd:` terms used by the engine and serializers.

use super::{Namespace, NamespaceModule};

/// The RDF syntax namespace.
pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// `rdf:type`.
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdf:langString`.
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Returns the `rdf:` namespace module. Nothing in it is server managed.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "rdf",
            iri: NS,
            label: "RDF syntax",
            managed: false,
        },
        managed_predicates: &[],
        restricted_types: &[],
        relaxable_types: &[],
    }
}
