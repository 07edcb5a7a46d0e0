//! Namespaces the repository reads or protects.
//!
//! Each submodule exposes its IRIs as constants plus a [`NamespaceModule`]
//! describing which of its terms the server manages. [`all`] returns the
//! modules in the order the default [`PolicyTable`](crate::PolicyTable) is
//! assembled from.

pub mod fedora;
pub mod ldp;
pub mod memento;
pub mod premis;
pub mod rdf;

/// A vocabulary namespace.
#[derive(Debug, Clone)]
pub struct Namespace {
    /// Conventional prefix (e.g., `"fedora"`).
    pub prefix: &'static str,
    /// Full namespace IRI, including the trailing `#` or `/`.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Whether every term in the namespace is server managed.
    pub managed: bool,
}

/// A namespace together with the server-managed terms it contributes.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// The namespace itself.
    pub namespace: Namespace,
    /// Predicates clients may never write.
    pub managed_predicates: &'static [&'static str],
    /// `rdf:type` objects clients may never assert.
    pub restricted_types: &'static [&'static str],
    /// `rdf:type` objects clients may assert only under relaxed enforcement.
    pub relaxable_types: &'static [&'static str],
}

/// Returns every namespace module known to the repository.
#[must_use]
pub fn all() -> Vec<NamespaceModule> {
    vec![
        rdf::module(),
        fedora::module(),
        ldp::module(),
        memento::module(),
        premis::module(),
    ]
}
