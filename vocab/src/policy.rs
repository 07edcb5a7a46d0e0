//! The server-managed policy table.
//!
//! A [`PolicyTable`] is the static lookup the constraint checker consults:
//! which namespaces are wholly managed, which predicates are managed, which
//! `rdf:type` objects are hard-restricted and which are relaxable. It is
//! immutable once built and safe to share across concurrent requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::namespaces;

/// Sets of IRIs describing what clients may not write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyTable {
    /// Namespace IRIs whose every term is server managed.
    pub managed_namespaces: BTreeSet<String>,
    /// Predicates clients may never write.
    pub managed_predicates: BTreeSet<String>,
    /// Type objects clients may never assert.
    pub restricted_types: BTreeSet<String>,
    /// Type objects clients may assert only under relaxed enforcement.
    pub relaxable_types: BTreeSet<String>,
    /// Predicates whose objects are type assertions (normally just `rdf:type`).
    pub type_predicates: BTreeSet<String>,
}

impl PolicyTable {
    /// Returns the default repository policy, assembled from
    /// [`namespaces::all`].
    #[must_use]
    pub fn fedora() -> &'static PolicyTable {
        static POLICY: std::sync::OnceLock<PolicyTable> = std::sync::OnceLock::new();
        POLICY.get_or_init(|| {
            let mut table = PolicyTable::empty();
            for module in namespaces::all() {
                if module.namespace.managed {
                    table.managed_namespaces.insert(module.namespace.iri.to_string());
                }
                table
                    .managed_predicates
                    .extend(module.managed_predicates.iter().map(|p| p.to_string()));
                table
                    .restricted_types
                    .extend(module.restricted_types.iter().map(|t| t.to_string()));
                table
                    .relaxable_types
                    .extend(module.relaxable_types.iter().map(|t| t.to_string()));
            }
            table
        })
    }

    /// Returns a table that manages nothing; `rdf:type` is still the type predicate.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            managed_namespaces: BTreeSet::new(),
            managed_predicates: BTreeSet::new(),
            restricted_types: BTreeSet::new(),
            relaxable_types: BTreeSet::new(),
            type_predicates: BTreeSet::from([namespaces::rdf::TYPE.to_string()]),
        }
    }

    /// True if the IRI falls inside a wholly managed namespace.
    #[must_use]
    pub fn in_managed_namespace(&self, iri: &str) -> bool {
        self.managed_namespaces.iter().any(|ns| iri.starts_with(ns.as_str()))
    }

    /// True if the predicate is listed as managed or lives in a managed namespace.
    #[must_use]
    pub fn is_managed_predicate(&self, iri: &str) -> bool {
        self.managed_predicates.contains(iri) || self.in_managed_namespace(iri)
    }

    /// True if asserting this type is never allowed.
    ///
    /// Relaxable types win over namespace membership so a soft type can be
    /// declared inside a managed namespace.
    #[must_use]
    pub fn is_restricted_type(&self, iri: &str) -> bool {
        !self.relaxable_types.contains(iri)
            && (self.restricted_types.contains(iri) || self.in_managed_namespace(iri))
    }

    /// True if asserting this type is allowed only under relaxed enforcement.
    #[must_use]
    pub fn is_relaxable_type(&self, iri: &str) -> bool {
        self.relaxable_types.contains(iri)
    }

    /// True if the predicate asserts a type.
    #[must_use]
    pub fn is_type_predicate(&self, iri: &str) -> bool {
        self.type_predicates.contains(iri)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::{fedora, ldp, memento, premis, rdf};

    #[test]
    fn fedora_table_manages_repository_namespace() {
        let table = PolicyTable::fedora();
        assert!(table.is_managed_predicate(fedora::LAST_MODIFIED));
        assert!(table.is_managed_predicate(
            "http://fedora.info/definitions/v4/repository#somethingUnlisted"
        ));
        assert!(table.is_managed_predicate(ldp::CONTAINS));
        assert!(table.is_managed_predicate(premis::HAS_SIZE));
        assert!(!table.is_managed_predicate("http://www.w3.org/ns/ldp#membershipResource"));
        assert!(!table.is_managed_predicate("http://purl.org/dc/terms/title"));
    }

    #[test]
    fn fedora_table_splits_hard_and_soft_types() {
        let table = PolicyTable::fedora();
        assert!(table.is_restricted_type(fedora::BINARY));
        assert!(table.is_restricted_type(memento::MEMENTO));
        assert!(table.is_restricted_type(ldp::NON_RDF_SOURCE));
        assert!(!table.is_relaxable_type(ldp::NON_RDF_SOURCE));
        assert!(table.is_relaxable_type(ldp::BASIC_CONTAINER));
        assert!(!table.is_restricted_type(ldp::BASIC_CONTAINER));
        assert!(!table.is_restricted_type("http://example.org/Book"));
    }

    #[test]
    fn relaxable_type_wins_over_managed_namespace() {
        let mut table = PolicyTable::empty();
        table.managed_namespaces.insert("http://example.org/managed#".into());
        table.relaxable_types.insert("http://example.org/managed#Soft".into());
        assert!(table.is_restricted_type("http://example.org/managed#Hard"));
        assert!(!table.is_restricted_type("http://example.org/managed#Soft"));
    }

    #[test]
    fn empty_table_still_knows_rdf_type() {
        let table = PolicyTable::empty();
        assert!(table.is_type_predicate(rdf::TYPE));
        assert!(!table.is_managed_predicate(fedora::LAST_MODIFIED));
    }
}
