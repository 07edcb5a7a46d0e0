//! `fedora:` namespace: repository-computed properties and resource types.
//!
//! The whole namespace is server managed: any predicate or type inside it is
//! rejected on write, whether or not it is listed below.

use super::{Namespace, NamespaceModule};

/// The Fedora repository namespace.
pub const NS: &str = "http://fedora.info/definitions/v4/repository#";

/// `fedora:created`.
pub const CREATED: &str = "http://fedora.info/definitions/v4/repository#created";
/// `fedora:createdBy`.
pub const CREATED_BY: &str = "http://fedora.info/definitions/v4/repository#createdBy";
/// `fedora:lastModified`.
pub const LAST_MODIFIED: &str = "http://fedora.info/definitions/v4/repository#lastModified";
/// `fedora:lastModifiedBy`.
pub const LAST_MODIFIED_BY: &str = "http://fedora.info/definitions/v4/repository#lastModifiedBy";
/// `fedora:hasParent`.
pub const HAS_PARENT: &str = "http://fedora.info/definitions/v4/repository#hasParent";
/// `fedora:hasFixityService`.
pub const HAS_FIXITY_SERVICE: &str =
    "http://fedora.info/definitions/v4/repository#hasFixityService";
/// `fedora:writable`.
pub const WRITABLE: &str = "http://fedora.info/definitions/v4/repository#writable";

/// `fedora:Resource`.
pub const RESOURCE: &str = "http://fedora.info/definitions/v4/repository#Resource";
/// `fedora:Container`.
pub const CONTAINER: &str = "http://fedora.info/definitions/v4/repository#Container";
/// `fedora:Binary`.
pub const BINARY: &str = "http://fedora.info/definitions/v4/repository#Binary";
/// `fedora:NonRdfSourceDescription`.
pub const NON_RDF_SOURCE_DESCRIPTION: &str =
    "http://fedora.info/definitions/v4/repository#NonRdfSourceDescription";
/// `fedora:Pairtree`.
pub const PAIRTREE: &str = "http://fedora.info/definitions/v4/repository#Pairtree";
/// `fedora:Tombstone`.
pub const TOMBSTONE: &str = "http://fedora.info/definitions/v4/repository#Tombstone";

/// Returns the `fedora:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "fedora",
            iri: NS,
            label: "Fedora Repository",
            managed: true,
        },
        managed_predicates: &[
            CREATED,
            CREATED_BY,
            LAST_MODIFIED,
            LAST_MODIFIED_BY,
            HAS_PARENT,
            HAS_FIXITY_SERVICE,
            WRITABLE,
        ],
        restricted_types: &[
            RESOURCE,
            CONTAINER,
            BINARY,
            NON_RDF_SOURCE_DESCRIPTION,
            PAIRTREE,
            TOMBSTONE,
        ],
        relaxable_types: &[],
    }
}
