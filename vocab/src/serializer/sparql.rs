//! SPARQL Update serializer.
//!
//! Renders an [`UpdateRequest`] back to update text. All IRIs are written in
//! full, so the prologue is reproduced only to keep the request recognizable.
//! Operations are separated by ` ;` as the SPARQL grammar requires.

use std::fmt;

use crate::model::{GraphName, Quad};
use crate::update::{Modify, PatternElement, UpdateOperation, UpdateRequest};

/// Serializes an update request to SPARQL Update text.
#[must_use]
pub fn to_sparql(request: &UpdateRequest) -> String {
    request.to_string()
}

impl fmt::Display for UpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(base) = &self.base {
            writeln!(f, "BASE <{}>", base)?;
        }
        for prefix in &self.prefixes {
            writeln!(f, "PREFIX {}: <{}>", prefix.label, prefix.iri)?;
        }
        for (i, operation) in self.operations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ;\n")?;
            }
            fmt::Display::fmt(operation, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for UpdateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOperation::InsertData(quads)
            | UpdateOperation::DeleteData(quads)
            | UpdateOperation::DeleteWhere(quads) => {
                write!(f, "{} ", self.keyword())?;
                write_quads(f, quads)
            }
            UpdateOperation::Modify(modify) => fmt::Display::fmt(modify.as_ref(), f),
        }
    }
}

impl fmt::Display for Modify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(graph) = &self.with_graph {
            writeln!(f, "WITH <{}>", graph)?;
        }
        if let Some(delete) = &self.delete {
            f.write_str("DELETE ")?;
            write_quads(f, delete)?;
            f.write_str("\n")?;
        }
        if let Some(insert) = &self.insert {
            f.write_str("INSERT ")?;
            write_quads(f, insert)?;
            f.write_str("\n")?;
        }
        for graph in &self.using {
            writeln!(f, "USING <{}>", graph)?;
        }
        for graph in &self.using_named {
            writeln!(f, "USING NAMED <{}>", graph)?;
        }
        f.write_str("WHERE ")?;
        write_group(f, &self.where_pattern)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.graph {
            GraphName::Default => write!(f, "{} .", self.triple),
            GraphName::Named(name) => write!(f, "GRAPH {} {{ {} . }}", name, self.triple),
        }
    }
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternElement::Group(children) => {
                f.write_str("{")?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                f.write_str(" }")
            }
            PatternElement::BasicBlock(triples) => {
                for (i, triple) in triples.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{} .", triple)?;
                }
                Ok(())
            }
            PatternElement::Optional(pattern) => {
                f.write_str("OPTIONAL ")?;
                write_group(f, pattern)
            }
            PatternElement::Graph { name, pattern } => {
                write!(f, "GRAPH {} ", name)?;
                write_group(f, pattern)
            }
            PatternElement::Filter(expression) => write!(f, "FILTER({})", expression),
        }
    }
}

fn write_quads(f: &mut fmt::Formatter<'_>, quads: &[Quad]) -> fmt::Result {
    f.write_str("{\n")?;
    for quad in quads {
        writeln!(f, "  {}", quad)?;
    }
    f.write_str("}")
}

/// Writes a pattern that must appear in braces, adding them unless it is a group.
fn write_group(f: &mut fmt::Formatter<'_>, pattern: &PatternElement) -> fmt::Result {
    match pattern {
        PatternElement::Group(_) => fmt::Display::fmt(pattern, f),
        other => write!(f, "{{ {} }}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Term, Triple};
    use crate::update::Prefix;

    fn triple(s: Term, p: &str, o: Term) -> Triple {
        Triple::new(s, Term::iri(p), o)
    }

    #[test]
    fn insert_data_lists_one_quad_per_line() {
        let request = UpdateRequest::new(vec![UpdateOperation::InsertData(vec![
            Quad::in_default_graph(triple(
                Term::iri("info:fedora/42"),
                "http://ext/p",
                Term::iri("info:fedora/43"),
            )),
            Quad::in_graph(
                Term::iri("http://ext/g"),
                triple(Term::iri("info:fedora/42"), "http://ext/p", Term::literal("x")),
            ),
        ])]);
        assert_eq!(
            to_sparql(&request),
            "INSERT DATA {\n  <info:fedora/42> <http://ext/p> <info:fedora/43> .\n  \
             GRAPH <http://ext/g> { <info:fedora/42> <http://ext/p> \"x\" . }\n}"
        );
    }

    #[test]
    fn operations_are_separated_and_prologue_kept() {
        let mut request = UpdateRequest::new(vec![
            UpdateOperation::DeleteData(vec![]),
            UpdateOperation::DeleteWhere(vec![]),
        ]);
        request.base = Some("http://ext/42".into());
        request.prefixes.push(Prefix {
            label: "dc".into(),
            iri: "http://purl.org/dc/elements/1.1/".into(),
        });
        assert_eq!(
            to_sparql(&request),
            "BASE <http://ext/42>\nPREFIX dc: <http://purl.org/dc/elements/1.1/>\n\
             DELETE DATA {\n} ;\nDELETE WHERE {\n}"
        );
    }

    #[test]
    fn modify_renders_nested_where_tree() {
        let where_pattern = PatternElement::Group(vec![
            PatternElement::BasicBlock(vec![triple(
                Term::variable("s"),
                "http://ext/p",
                Term::variable("o"),
            )]),
            PatternElement::Optional(Box::new(PatternElement::BasicBlock(vec![triple(
                Term::variable("s"),
                "http://ext/q",
                Term::variable("x"),
            )]))),
            PatternElement::Filter("?o != \"a\"".into()),
        ]);
        let modify = Modify::new(
            Some(vec![Quad::in_default_graph(triple(
                Term::variable("s"),
                "http://ext/p",
                Term::variable("o"),
            ))]),
            None,
            where_pattern,
        )
        .with_graph("http://ext/g");
        let text = UpdateOperation::Modify(Box::new(modify)).to_string();
        assert_eq!(
            text,
            "WITH <http://ext/g>\nDELETE {\n  ?s <http://ext/p> ?o .\n}\n\
             WHERE { ?s <http://ext/p> ?o . OPTIONAL { ?s <http://ext/q> ?x . } FILTER(?o != \"a\") }"
        );
    }

    #[test]
    fn bare_block_where_gets_braces() {
        let modify = Modify::new(
            None,
            Some(vec![]),
            PatternElement::Graph {
                name: Term::variable("g"),
                pattern: Box::new(PatternElement::BasicBlock(vec![])),
            },
        );
        let text = modify.to_string();
        assert!(text.ends_with("WHERE { GRAPH ?g {  } }"), "{}", text);
    }

    #[test]
    fn nested_groups_keep_a_single_pair_of_braces() {
        let modify = Modify::new(
            None,
            Some(vec![]),
            PatternElement::Optional(Box::new(PatternElement::Group(vec![
                PatternElement::BasicBlock(vec![triple(
                    Term::variable("s"),
                    "http://ext/p",
                    Term::variable("o"),
                )]),
            ]))),
        );
        let text = modify.to_string();
        assert!(
            text.ends_with("WHERE { OPTIONAL { ?s <http://ext/p> ?o . } }"),
            "{}",
            text
        );
    }
}
