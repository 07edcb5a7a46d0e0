//! Request-body parsing.
//!
//! Maps a declared content type to an RDF syntax and parses the body with
//! `sophia_turtle`, resolving relative IRIs against the target resource's
//! external URI. Pre-parsed update requests arrive as JSON.

use fedora_vocab::namespaces::rdf::XSD_STRING;
use fedora_vocab::{Graph, Literal, Term, Triple, UpdateRequest};
use sophia::iri::Iri;
use sophia_api::parser::TripleParser;
use sophia_api::source::{StreamError, TripleSource};
use sophia_api::term::{Term as RdfTerm, TermKind};
use sophia_api::triple::Triple as RdfTriple;
use sophia_turtle::parser::nt::NTriplesParser;
use sophia_turtle::parser::turtle::TurtleParser;
use tracing::debug;

use crate::error::ParseError;

/// RDF syntaxes accepted in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// `text/turtle`.
    Turtle,
    /// `application/n-triples`.
    NTriples,
}

impl MediaType {
    /// Resolves a `Content-Type` value, ignoring parameters such as `charset`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedMediaType`] for anything that is not
    /// a supported RDF syntax.
    pub fn from_content_type(content_type: &str) -> Result<Self, ParseError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "text/turtle" | "application/x-turtle" => Ok(MediaType::Turtle),
            "application/n-triples" | "text/plain" => Ok(MediaType::NTriples),
            _ => Err(ParseError::UnsupportedMediaType(essence)),
        }
    }

    /// The canonical media type string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Turtle => "text/turtle",
            MediaType::NTriples => "application/n-triples",
        }
    }
}

/// Parses a request body into a graph.
///
/// `base` is the external URI of the resource the body is sent to; relative
/// IRIs in Turtle bodies resolve against it. N-Triples has no relative IRIs.
///
/// # Errors
///
/// Returns [`ParseError::MalformedInput`] if the body does not parse or the
/// base is not an absolute IRI.
pub fn parse_graph(
    body: &[u8],
    media_type: MediaType,
    base: Option<&str>,
) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    match media_type {
        MediaType::Turtle => {
            let base = base
                .map(|b| {
                    Iri::new(b.to_string())
                        .map_err(|_| ParseError::MalformedInput(format!("invalid base IRI {}", b)))
                })
                .transpose()?;
            let parser = TurtleParser { base };
            collect(parser.parse(body), &mut graph)?;
        }
        MediaType::NTriples => {
            let parser = NTriplesParser {};
            collect(parser.parse(body), &mut graph)?;
        }
    }
    debug!(
        media_type = media_type.as_str(),
        triples = graph.len(),
        "parsed request body"
    );
    Ok(graph)
}

/// Parses a content type and body in one step.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedMediaType`] or [`ParseError::MalformedInput`].
pub fn parse_body(body: &[u8], content_type: &str, base: Option<&str>) -> Result<Graph, ParseError> {
    parse_graph(body, MediaType::from_content_type(content_type)?, base)
}

/// Deserializes an update request handed over by the SPARQL parser.
///
/// # Errors
///
/// Returns [`ParseError::MalformedInput`] if the JSON does not describe an update.
pub fn parse_update_json(text: &str) -> Result<UpdateRequest, ParseError> {
    serde_json::from_str(text).map_err(|e| ParseError::MalformedInput(e.to_string()))
}

fn collect<S: TripleSource>(mut source: S, graph: &mut Graph) -> Result<(), ParseError> {
    source
        .try_for_each_triple(|t| -> Result<(), ParseError> {
            graph.insert(Triple::new(
                convert(t.s())?,
                convert(t.p())?,
                convert(t.o())?,
            ));
            Ok(())
        })
        .map_err(|err| match err {
            StreamError::SourceError(e) => ParseError::MalformedInput(e.to_string()),
            StreamError::SinkError(e) => e,
        })
}

fn convert<T: RdfTerm>(term: T) -> Result<Term, ParseError> {
    let converted = match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::BlankNode(id.as_str().to_owned())),
        TermKind::Literal => term.lexical_form().map(|lexical| {
            let lexical = String::from(&*lexical);
            match term.language_tag() {
                Some(tag) => Term::Literal(Literal::tagged(lexical, tag.as_str())),
                None => Term::Literal(Literal {
                    lexical,
                    datatype: term
                        .datatype()
                        .map(|dt| dt.as_str().to_owned())
                        .filter(|dt| dt != XSD_STRING),
                    language: None,
                }),
            }
        }),
        TermKind::Triple | TermKind::Variable => None,
    };
    converted.ok_or_else(|| {
        ParseError::MalformedInput(format!("unsupported term kind {:?} in request body", term.kind()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parameters_are_ignored() {
        assert_eq!(
            MediaType::from_content_type("text/turtle; charset=UTF-8").unwrap(),
            MediaType::Turtle
        );
        assert_eq!(
            MediaType::from_content_type("application/n-triples").unwrap(),
            MediaType::NTriples
        );
        assert_eq!(
            MediaType::from_content_type("application/pdf"),
            Err(ParseError::UnsupportedMediaType("application/pdf".into()))
        );
    }

    #[test]
    fn turtle_resolves_against_resource_uri() {
        let body = br#"@prefix dc: <http://purl.org/dc/terms/> .
            <> dc:title "A"@en ; dc:relation <child> , _:b0 ."#;
        let graph = parse_graph(body, MediaType::Turtle, Some("http://ext/42")).unwrap();
        assert_eq!(graph.len(), 3);
        assert!(graph.contains(&Triple::new(
            Term::iri("http://ext/42"),
            Term::iri("http://purl.org/dc/terms/title"),
            Term::Literal(Literal::tagged("A", "en")),
        )));
        assert!(graph.contains(&Triple::new(
            Term::iri("http://ext/42"),
            Term::iri("http://purl.org/dc/terms/relation"),
            Term::iri("http://ext/child"),
        )));
    }

    #[test]
    fn simple_literals_have_no_datatype() {
        let body = b"<http://ext/42> <http://ext/title> \"A\" .\n";
        let graph = parse_graph(body, MediaType::NTriples, None).unwrap();
        assert_eq!(graph.iter().next().unwrap().object, Term::literal("A"));
    }

    #[test]
    fn ntriples_keeps_datatypes() {
        let body = b"<http://ext/42> <http://ext/size> \"7\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n";
        let graph = parse_graph(body, MediaType::NTriples, None).unwrap();
        let triple = graph.iter().next().unwrap();
        assert_eq!(
            triple.object,
            Term::Literal(Literal::typed("7", "http://www.w3.org/2001/XMLSchema#integer"))
        );
    }

    #[test]
    fn syntax_errors_are_malformed_input() {
        let err = parse_body(b"<http://ext/42> <http://ext/p> .", "text/turtle", None).unwrap_err();
        assert!(matches!(err, ParseError::MalformedInput(_)));
    }

    #[test]
    fn update_json_errors_are_malformed_input() {
        assert!(matches!(
            parse_update_json("{\"operations\": 3}"),
            Err(ParseError::MalformedInput(_))
        ));
        assert!(parse_update_json("{\"operations\": []}").unwrap().operations.is_empty());
    }
}
