//! Translation of RDF graph bodies.
//!
//! Inbound bodies are checked statement by statement and rewritten to
//! internal identifiers; the result is a new graph built in one pass over the
//! input. Outbound graphs are only rewritten to external URIs.

use fedora_vocab::{Graph, Triple};
use tracing::{debug, trace};

use crate::constraint::{Classification, ConstraintChecker};
use crate::error::{RewriteError, TranslationError};
use crate::identifier::IdentifierTranslator;
use crate::mode::ModePolicy;
use crate::report::{Rewritten, Violation, ViolationReport};
use crate::syntax;

/// Rewrites inbound graphs to internal identifiers while enforcing the policy.
#[derive(Debug, Clone, Copy)]
pub struct GraphTranslator<'a> {
    checker: ConstraintChecker<'a>,
}

impl<'a> GraphTranslator<'a> {
    /// Creates a translator using the given checker.
    pub fn new(checker: ConstraintChecker<'a>) -> Self {
        Self { checker }
    }

    /// Creates a translator over the default repository policy.
    #[must_use]
    pub fn fedora() -> GraphTranslator<'static> {
        GraphTranslator::new(ConstraintChecker::fedora())
    }

    /// Translates a client graph to internal identifiers.
    ///
    /// Under [`ModePolicy::Lenient`] managed statements are dropped without a
    /// violation. Otherwise every disallowed statement is recorded and kept
    /// untranslated; allowed ones (and relaxable ones under
    /// [`ModePolicy::Relaxed`]) have their subject and object rewritten.
    /// Predicates are never rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Constraint`] listing every violation once the
    /// whole graph has been scanned, or [`RewriteError::Translation`] for a
    /// malformed URI.
    pub fn translate(
        &self,
        graph: Graph,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<Graph, RewriteError> {
        let total = graph.len();
        let mut dropped = 0usize;
        let mut violations = ViolationReport::new();
        let mut translated = Graph::new();

        for triple in graph {
            if mode.drops_managed() && self.checker.touches_managed(&triple) {
                trace!(%triple, "dropping server managed statement");
                dropped += 1;
                continue;
            }
            let admitted = admit(&self.checker, triple, ids, mode)?;
            violations.extend(admitted.violations);
            translated.insert(admitted.value);
        }

        debug!(
            total,
            dropped,
            violations = violations.len(),
            %mode,
            "translated graph body to internal identifiers"
        );
        if !violations.is_empty() {
            return Err(RewriteError::Constraint(violations));
        }
        Ok(translated)
    }
}

/// Rewrites an internal graph to external URIs for a response body.
#[must_use]
pub fn to_external(graph: Graph, ids: &IdentifierTranslator) -> Graph {
    graph
        .into_iter()
        .map(|triple| {
            let Triple {
                subject,
                predicate,
                object,
            } = triple;
            Triple::new(ids.external_term(subject), predicate, ids.external_term(object))
        })
        .collect()
}

/// Classifies one statement and either translates it or records why not.
///
/// Shared by graph and update translation so both apply identical rules.
/// Malformed terms in any position fail before classification.
pub(crate) fn admit(
    checker: &ConstraintChecker<'_>,
    triple: Triple,
    ids: &IdentifierTranslator,
    mode: ModePolicy,
) -> Result<Rewritten<Triple>, TranslationError> {
    syntax::check_triple(&triple)?;
    match checker.classify(&triple) {
        Classification::Violation(kind) if !mode.relaxes(kind) => {
            let violation = Violation::new(kind, triple.clone());
            Ok(Rewritten::rejected(triple, violation))
        }
        _ => {
            let translated = to_internal(triple, ids)?;
            trace!(%translated, "translated statement");
            Ok(Rewritten::clean(translated))
        }
    }
}

fn to_internal(triple: Triple, ids: &IdentifierTranslator) -> Result<Triple, TranslationError> {
    let Triple {
        subject,
        predicate,
        object,
    } = triple;
    Ok(Triple::new(
        ids.internal_term(subject)?,
        predicate,
        ids.internal_term(object)?,
    ))
}
