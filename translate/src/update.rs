//! Rewriting of SPARQL Update requests.
//!
//! Each operation is rewritten by a pure recursive traversal that returns the
//! rebuilt node together with the violations found beneath it. The request
//! fails only after every operation has been visited, so a batch update
//! reports all of its problems at once.
//!
//! Updates have no lenient drop path: [`ModePolicy::Lenient`] is applied as
//! [`ModePolicy::Strict`].

use fedora_vocab::{Modify, PatternElement, Quad, Triple, UpdateOperation, UpdateRequest};
use tracing::{debug, trace};

use crate::constraint::ConstraintChecker;
use crate::error::{RewriteError, TranslationError};
use crate::graph::admit;
use crate::identifier::IdentifierTranslator;
use crate::mode::ModePolicy;
use crate::report::{Rewritten, ViolationReport};
use crate::syntax;

/// Rewrites update requests to internal identifiers while enforcing the policy.
#[derive(Debug, Clone, Copy)]
pub struct UpdateRewriter<'a> {
    checker: ConstraintChecker<'a>,
}

impl<'a> UpdateRewriter<'a> {
    /// Creates a rewriter using the given checker.
    pub fn new(checker: ConstraintChecker<'a>) -> Self {
        Self { checker }
    }

    /// Creates a rewriter over the default repository policy.
    #[must_use]
    pub fn fedora() -> UpdateRewriter<'static> {
        UpdateRewriter::new(ConstraintChecker::fedora())
    }

    /// Rewrites every operation of a request.
    ///
    /// The prologue (`BASE`, `PREFIX`) is kept as-is once it has been checked.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Constraint`] with the violations of all
    /// operations, or [`RewriteError::Translation`] for a malformed URI.
    pub fn rewrite(
        &self,
        request: UpdateRequest,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<UpdateRequest, RewriteError> {
        let mode = mode.for_update();
        let UpdateRequest {
            base,
            prefixes,
            operations,
        } = request;
        syntax::check_prologue(base.as_deref(), &prefixes)?;

        let mut violations = ViolationReport::new();
        let mut rewritten = Vec::with_capacity(operations.len());
        for operation in operations {
            let keyword = operation.keyword();
            let result = self.rewrite_operation(operation, ids, mode)?;
            trace!(
                operation = keyword,
                violations = result.violations.len(),
                "rewrote update operation"
            );
            violations.extend(result.violations);
            rewritten.push(result.value);
        }

        debug!(
            operations = rewritten.len(),
            violations = violations.len(),
            %mode,
            "rewrote update request to internal identifiers"
        );
        if !violations.is_empty() {
            return Err(RewriteError::Constraint(violations));
        }
        Ok(UpdateRequest {
            base,
            prefixes,
            operations: rewritten,
        })
    }

    /// Rewrites one operation into the same variant.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] for a malformed URI.
    pub fn rewrite_operation(
        &self,
        operation: UpdateOperation,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<Rewritten<UpdateOperation>, TranslationError> {
        Ok(match operation {
            UpdateOperation::InsertData(quads) => self
                .rewrite_quads(quads, ids, mode)?
                .map(UpdateOperation::InsertData),
            UpdateOperation::DeleteData(quads) => self
                .rewrite_quads(quads, ids, mode)?
                .map(UpdateOperation::DeleteData),
            UpdateOperation::DeleteWhere(quads) => self
                .rewrite_quads(quads, ids, mode)?
                .map(UpdateOperation::DeleteWhere),
            UpdateOperation::Modify(modify) => self
                .rewrite_modify(*modify, ids, mode)?
                .map(|modify| UpdateOperation::Modify(Box::new(modify))),
        })
    }

    fn rewrite_modify(
        &self,
        modify: Modify,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<Rewritten<Modify>, TranslationError> {
        let Modify {
            with_graph,
            using,
            using_named,
            delete,
            insert,
            where_pattern,
        } = modify;
        for graph in with_graph.iter().chain(&using).chain(&using_named) {
            syntax::check_iri(graph)?;
        }

        let mut violations = ViolationReport::new();
        let delete = match delete {
            Some(quads) => {
                let result = self.rewrite_quads(quads, ids, mode)?;
                violations.extend(result.violations);
                Some(result.value)
            }
            None => None,
        };
        let insert = match insert {
            Some(quads) => {
                let result = self.rewrite_quads(quads, ids, mode)?;
                violations.extend(result.violations);
                Some(result.value)
            }
            None => None,
        };
        let where_pattern = {
            let result = self.rewrite_pattern(where_pattern, ids, mode)?;
            violations.extend(result.violations);
            result.value
        };

        Ok(Rewritten {
            value: Modify {
                with_graph,
                using,
                using_named,
                delete,
                insert,
                where_pattern,
            },
            violations,
        })
    }

    /// Rewrites a WHERE pattern tree, preserving its shape and child order.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] for a malformed URI.
    pub fn rewrite_pattern(
        &self,
        element: PatternElement,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<Rewritten<PatternElement>, TranslationError> {
        Ok(match element {
            PatternElement::Group(children) => children
                .into_iter()
                .map(|child| self.rewrite_pattern(child, ids, mode))
                .collect::<Result<Rewritten<Vec<_>>, _>>()?
                .map(PatternElement::Group),
            PatternElement::BasicBlock(triples) => self
                .rewrite_triples(triples, ids, mode)?
                .map(PatternElement::BasicBlock),
            PatternElement::Optional(pattern) => self
                .rewrite_pattern(*pattern, ids, mode)?
                .map(|pattern| PatternElement::Optional(Box::new(pattern))),
            PatternElement::Graph { name, pattern } => {
                syntax::check_term(&name)?;
                self.rewrite_pattern(*pattern, ids, mode)?
                    .map(|pattern| PatternElement::Graph {
                        name,
                        pattern: Box::new(pattern),
                    })
            }
            PatternElement::Filter(expression) => {
                syntax::check_filter(&expression)?;
                Rewritten::clean(PatternElement::Filter(expression))
            }
        })
    }

    /// Rewrites quads; graph names pass through untouched.
    fn rewrite_quads(
        &self,
        quads: Vec<Quad>,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<Rewritten<Vec<Quad>>, TranslationError> {
        quads
            .into_iter()
            .map(|Quad { graph, triple }| {
                syntax::check_graph_name(&graph)?;
                admit(&self.checker, triple, ids, mode).map(|r| r.map(|triple| Quad { graph, triple }))
            })
            .collect()
    }

    fn rewrite_triples(
        &self,
        triples: Vec<Triple>,
        ids: &IdentifierTranslator,
        mode: ModePolicy,
    ) -> Result<Rewritten<Vec<Triple>>, TranslationError> {
        triples
            .into_iter()
            .map(|triple| admit(&self.checker, triple, ids, mode))
            .collect()
    }
}
