//! Fedora repository request translation engine.
//!
//! Converts RDF graph bodies and SPARQL Update requests between the external
//! representation clients see (public HTTP URIs) and the internal one the
//! storage layer uses (`info:fedora/...` identifiers), while enforcing which
//! statements clients may write.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`IdentifierTranslator`] | external URI ⇄ internal identifier |
//! | [`ConstraintChecker`] | classifies one statement against the policy table |
//! | [`GraphTranslator`] | rewrites graph bodies |
//! | [`UpdateRewriter`] | rewrites SPARQL Update operation trees |
//! | [`ModePolicy`] | strict / lenient / relaxed enforcement |
//! | [`syntax`] | rejects terms that would break out of the serialized request |
//!
//! Violations are collected across the whole body and returned together.
//!
//! # Entry Point
//!
//! ```
//! use fedora_translate::{translate_graph, IdentifierTranslator, ModePolicy};
//! use fedora_vocab::{Graph, Term, Triple};
//!
//! let ids = IdentifierTranslator::fedora("http://ext/").expect("valid base");
//! let graph: Graph = vec![Triple::new(
//!     Term::iri("http://ext/42"),
//!     Term::iri("http://ext/title"),
//!     Term::literal("A"),
//! )]
//! .into();
//! let internal = translate_graph(graph, &ids, ModePolicy::Strict).expect("no violations");
//! assert_eq!(internal.iter().next().map(|t| &t.subject), Some(&Term::iri("info:fedora/42")));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod constraint;
pub mod error;
pub mod graph;
pub mod identifier;
pub mod mode;
pub mod parse;
pub mod report;
pub mod syntax;
pub mod update;

pub use config::Config;
pub use constraint::{Classification, ConstraintChecker};
pub use error::{ConfigError, ParseError, RewriteError, TranslationError};
pub use graph::GraphTranslator;
pub use identifier::IdentifierTranslator;
pub use mode::ModePolicy;
pub use report::{Violation, ViolationKind, ViolationReport};
pub use update::UpdateRewriter;

use fedora_vocab::{Graph, UpdateRequest};

/// Translates a client graph body to internal identifiers under the default policy.
///
/// # Errors
///
/// Returns [`RewriteError::Constraint`] with every violation found, or
/// [`RewriteError::Translation`] for a malformed URI.
pub fn translate_graph(
    graph: Graph,
    ids: &IdentifierTranslator,
    mode: ModePolicy,
) -> Result<Graph, RewriteError> {
    GraphTranslator::fedora().translate(graph, ids, mode)
}

/// Rewrites a SPARQL Update request to internal identifiers under the default policy.
///
/// # Errors
///
/// Returns [`RewriteError::Constraint`] with every violation found across all
/// operations, or [`RewriteError::Translation`] for a malformed URI.
pub fn rewrite_update(
    request: UpdateRequest,
    ids: &IdentifierTranslator,
    mode: ModePolicy,
) -> Result<UpdateRequest, RewriteError> {
    UpdateRewriter::fedora().rewrite(request, ids, mode)
}
