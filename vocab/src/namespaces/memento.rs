//! `memento:` namespace: versioning resources (RFC 7089). Entirely server managed.

use super::{Namespace, NamespaceModule};

/// The Memento namespace.
pub const NS: &str = "http://mementoweb.org/ns#";

/// `memento:mementoDatetime`.
pub const MEMENTO_DATETIME: &str = "http://mementoweb.org/ns#mementoDatetime";
/// `memento:Memento`.
pub const MEMENTO: &str = "http://mementoweb.org/ns#Memento";
/// `memento:TimeMap`.
pub const TIME_MAP: &str = "http://mementoweb.org/ns#TimeMap";
/// `memento:TimeGate`.
pub const TIME_GATE: &str = "http://mementoweb.org/ns#TimeGate";
/// `memento:OriginalResource`.
pub const ORIGINAL_RESOURCE: &str = "http://mementoweb.org/ns#OriginalResource";

/// Returns the `memento:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "memento",
            iri: NS,
            label: "Memento",
            managed: true,
        },
        managed_predicates: &[MEMENTO_DATETIME],
        restricted_types: &[MEMENTO, TIME_MAP, TIME_GATE, ORIGINAL_RESOURCE],
        relaxable_types: &[],
    }
}
