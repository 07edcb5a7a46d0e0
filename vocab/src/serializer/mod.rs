//! Serializers for translated request bodies.
//!
//! Two output formats are supported:
//! - **N-Triples** ([`ntriples`]): translated graphs, handed to the storage layer
//! - **SPARQL Update** ([`sparql`]): rewritten update requests, executed internally

pub mod ntriples;
pub mod sparql;
