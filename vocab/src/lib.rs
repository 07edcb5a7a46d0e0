//! Fedora repository vocabulary encoded as typed Rust data.
//!
//! The `fedora-vocab` crate provides the RDF data model shared by the
//! translation engine (terms, triples, quads, graphs), the SPARQL Update
//! operation tree handed over by the update parser, the repository's
//! server-managed vocabulary, and serializers that produce N-Triples and
//! SPARQL Update text.
//!
//! # Entry Point
//!
//! ```
//! let policy = fedora_vocab::PolicyTable::fedora();
//! assert!(policy.is_managed_predicate(fedora_vocab::namespaces::fedora::LAST_MODIFIED));
//! ```
//!
//! # Serialization
//!
//! ```
//! use fedora_vocab::{Graph, Term, Triple};
//!
//! let graph: Graph = vec![Triple::new(
//!     Term::iri("info:fedora/42"),
//!     Term::iri("http://purl.org/dc/terms/title"),
//!     Term::literal("A"),
//! )]
//! .into_iter()
//! .collect();
//! let nt = fedora_vocab::serializer::ntriples::to_ntriples(&graph);
//! assert!(nt.starts_with("<info:fedora/42>"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;
pub mod policy;
pub mod serializer;
pub mod update;

pub use model::{Graph, GraphName, Literal, Quad, Term, Triple};
pub use policy::PolicyTable;
pub use update::{Modify, PatternElement, Prefix, UpdateOperation, UpdateRequest};
