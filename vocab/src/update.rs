//! SPARQL Update operation tree.
//!
//! The update parser (an external collaborator) produces an [`UpdateRequest`];
//! the translation engine rewrites it and the [`sparql`](crate::serializer::sparql)
//! serializer turns it back into update text. The operation set is closed:
//! - INSERT DATA
//! - DELETE DATA
//! - DELETE WHERE
//! - DELETE/INSERT ... WHERE (Modify)

use serde::{Deserialize, Serialize};

use crate::model::{Quad, Term, Triple};

/// A `PREFIX` declaration carried through from the original request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    /// Prefix label without the colon.
    pub label: String,
    /// Namespace IRI.
    pub iri: String,
}

/// A parsed update request: a sequence of operations sharing one prologue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// `BASE` IRI, usually the external URI of the target resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// `PREFIX` declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<Prefix>,
    /// Operations, in request order.
    pub operations: Vec<UpdateOperation>,
}

impl UpdateRequest {
    /// Creates a request with no prologue.
    pub fn new(operations: Vec<UpdateOperation>) -> Self {
        Self {
            base: None,
            prefixes: Vec::new(),
            operations,
        }
    }
}

/// A single SPARQL Update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "body", rename_all = "snake_case")]
pub enum UpdateOperation {
    /// `INSERT DATA { quads }`, ground quads only.
    InsertData(Vec<Quad>),
    /// `DELETE DATA { quads }`, ground quads only.
    DeleteData(Vec<Quad>),
    /// `DELETE WHERE { quad pattern }`, variables allowed.
    DeleteWhere(Vec<Quad>),
    /// `DELETE { } INSERT { } WHERE { }`.
    /// Boxed so the other variants stay small.
    Modify(Box<Modify>),
}

impl UpdateOperation {
    /// The SPARQL keyword naming this operation, for diagnostics.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            UpdateOperation::InsertData(_) => "INSERT DATA",
            UpdateOperation::DeleteData(_) => "DELETE DATA",
            UpdateOperation::DeleteWhere(_) => "DELETE WHERE",
            UpdateOperation::Modify(_) => "MODIFY",
        }
    }
}

/// The general `DELETE/INSERT ... WHERE` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modify {
    /// `WITH <graph>`; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_graph: Option<String>,
    /// `USING <graph>` clauses; passed through untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub using: Vec<String>,
    /// `USING NAMED <graph>` clauses; passed through untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub using_named: Vec<String>,
    /// DELETE template, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Vec<Quad>>,
    /// INSERT template, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<Vec<Quad>>,
    /// The WHERE pattern tree.
    pub where_pattern: PatternElement,
}

impl Modify {
    /// Creates a modify operation with no dataset clauses.
    pub fn new(
        delete: Option<Vec<Quad>>,
        insert: Option<Vec<Quad>>,
        where_pattern: PatternElement,
    ) -> Self {
        Self {
            with_graph: None,
            using: Vec::new(),
            using_named: Vec::new(),
            delete,
            insert,
            where_pattern,
        }
    }

    /// Sets the `WITH` graph.
    pub fn with_graph(mut self, iri: impl Into<String>) -> Self {
        self.with_graph = Some(iri.into());
        self
    }
}

/// A node of a WHERE pattern tree.
///
/// Only [`PatternElement::BasicBlock`] leaves hold statements; every other
/// variant is structure that rewriting must reproduce as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "element", content = "body", rename_all = "snake_case")]
pub enum PatternElement {
    /// `{ ... }` with ordered children.
    Group(Vec<PatternElement>),
    /// A block of triple patterns, which may contain variables.
    BasicBlock(Vec<Triple>),
    /// `OPTIONAL { ... }`.
    Optional(Box<PatternElement>),
    /// `GRAPH name { ... }`; the graph name is never rewritten.
    Graph {
        /// Graph IRI or variable.
        name: Term,
        /// The nested pattern.
        pattern: Box<PatternElement>,
    },
    /// `FILTER(expr)`; the expression text is opaque.
    ///
    /// IRIs inside the expression are not rewritten to internal identifiers.
    Filter(String),
}
