//! N-Triples serializer for graphs.
//!
//! Produces one triple per line with absolute IRIs. N-Triples is what the
//! translation engine hands on after rewriting a request body, because it
//! is trivially diffable and needs no prefix bookkeeping.

use crate::model::{Graph, Triple};

/// Serializes a graph to an N-Triples string, in the graph's insertion order.
///
/// # Errors
///
/// This function is infallible; it always returns a valid N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for t in graph {
        triple(&mut out, t);
    }
    out
}

fn triple(out: &mut String, t: &Triple) {
    out.push_str(&t.subject.to_string());
    out.push(' ');
    out.push_str(&t.predicate.to_string());
    out.push(' ');
    out.push_str(&t.object.to_string());
    out.push_str(" .\n");
}

/// Escapes a literal's lexical form for N-Triples and SPARQL string syntax.
#[must_use]
pub fn escape_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
