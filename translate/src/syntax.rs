//! Well-formedness checks for text the serializers write verbatim.
//!
//! IRIs end up between `<` and `>`, language tags after `@`, names after
//! `?`, `_:` or before `:`, and FILTER expressions between parentheses.
//! Each check here guarantees the text cannot terminate its enclosing
//! syntax early.

use fedora_vocab::{GraphName, Prefix, Term, Triple};
use sophia::iri::Iri;
use sophia_api::term::{BnodeId, LanguageTag, VarName};

use crate::error::TranslationError;

/// Checks that `iri` is an absolute IRI.
///
/// # Errors
///
/// Returns [`TranslationError::InvalidUri`] otherwise.
pub fn check_iri(iri: &str) -> Result<(), TranslationError> {
    Iri::new(iri)
        .map(|_| ())
        .map_err(|_| TranslationError::InvalidUri(iri.to_string()))
}

/// Checks one term: IRI syntax, blank node labels, variable names, and the
/// datatype and language tag of literals.
///
/// # Errors
///
/// Returns the [`TranslationError`] describing the first malformed part.
pub fn check_term(term: &Term) -> Result<(), TranslationError> {
    match term {
        Term::Iri(iri) => check_iri(iri),
        Term::BlankNode(label) => BnodeId::new(label.as_str())
            .map(|_| ())
            .map_err(|_| TranslationError::InvalidName(format!("_:{}", label))),
        Term::Variable(name) => VarName::new(name.as_str())
            .map(|_| ())
            .map_err(|_| TranslationError::InvalidName(format!("?{}", name))),
        Term::Literal(literal) => {
            if let Some(datatype) = &literal.datatype {
                check_iri(datatype)?;
            }
            if let Some(language) = &literal.language {
                LanguageTag::new(language.as_str())
                    .map_err(|_| TranslationError::InvalidLanguageTag(language.clone()))?;
            }
            Ok(())
        }
    }
}

/// Checks all three positions of a statement.
///
/// # Errors
///
/// Returns the [`TranslationError`] of the first malformed term.
pub fn check_triple(triple: &Triple) -> Result<(), TranslationError> {
    check_term(&triple.subject)?;
    check_term(&triple.predicate)?;
    check_term(&triple.object)
}

/// Checks a quad's graph name.
///
/// # Errors
///
/// Returns the [`TranslationError`] of a malformed named graph.
pub fn check_graph_name(graph: &GraphName) -> Result<(), TranslationError> {
    match graph {
        GraphName::Default => Ok(()),
        GraphName::Named(name) => check_term(name),
    }
}

/// Checks the `BASE` IRI and every `PREFIX` declaration.
///
/// # Errors
///
/// Returns [`TranslationError::InvalidUri`] or [`TranslationError::InvalidName`].
pub fn check_prologue(base: Option<&str>, prefixes: &[Prefix]) -> Result<(), TranslationError> {
    if let Some(base) = base {
        check_iri(base)?;
    }
    for prefix in prefixes {
        if !is_prefix_label(&prefix.label) {
            return Err(TranslationError::InvalidName(format!("{}:", prefix.label)));
        }
        check_iri(&prefix.iri)?;
    }
    Ok(())
}

/// Checks that a FILTER expression is a single line whose brackets balance
/// outside string literals, so it cannot close the `FILTER(` it is written in.
///
/// Brackets inside IRIs count too; such filters are rejected.
///
/// # Errors
///
/// Returns [`TranslationError::InvalidFilter`] otherwise.
pub fn check_filter(expression: &str) -> Result<(), TranslationError> {
    let invalid = || TranslationError::InvalidFilter(expression.to_string());
    let mut open: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in expression.chars() {
        if c.is_control() && c != '\t' {
            return Err(invalid());
        }
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => open.push(')'),
            '{' => open.push('}'),
            '[' => open.push(']'),
            ')' | '}' | ']' => {
                if open.pop() != Some(c) {
                    return Err(invalid());
                }
            }
            _ => {}
        }
    }
    if quote.is_some() || !open.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// `PN_PREFIX`, or the empty label.
fn is_prefix_label(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.is_alphabetic()
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !label.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedora_vocab::Literal;

    #[test]
    fn iri_cannot_close_its_angle_brackets() {
        assert!(check_iri("http://ext/p").is_ok());
        assert_eq!(
            check_iri("http://ext/p> \"x\" . } ; DROP ALL"),
            Err(TranslationError::InvalidUri("http://ext/p> \"x\" . } ; DROP ALL".into()))
        );
        assert!(check_iri("relative/path").is_err());
    }

    #[test]
    fn literal_parts_are_checked() {
        assert!(check_term(&Term::Literal(Literal::tagged("chat", "fr-CA"))).is_ok());
        assert!(matches!(
            check_term(&Term::Literal(Literal::tagged("y", "en . } ; CLEAR DEFAULT"))),
            Err(TranslationError::InvalidLanguageTag(_))
        ));
        assert!(matches!(
            check_term(&Term::Literal(Literal::typed("1", "xsd:int> . }"))),
            Err(TranslationError::InvalidUri(_))
        ));
        assert!(check_term(&Term::literal("any \"text\" } ; DROP ALL")).is_ok());
    }

    #[test]
    fn names_are_checked() {
        assert!(check_term(&Term::variable("s")).is_ok());
        assert!(check_term(&Term::variable("s } ; DROP ALL ; ?x")).is_err());
        assert!(check_term(&Term::blank("b0")).is_ok());
        assert!(check_term(&Term::blank("b0 . }")).is_err());
    }

    #[test]
    fn prologue_is_checked() {
        let good = Prefix {
            label: "dc".into(),
            iri: "http://purl.org/dc/terms/".into(),
        };
        assert!(check_prologue(Some("http://ext/42"), &[good.clone()]).is_ok());
        let empty = Prefix {
            label: String::new(),
            iri: "http://ext/".into(),
        };
        assert!(check_prologue(None, &[empty]).is_ok());
        let bad_label = Prefix {
            label: "dc: <x>\nDROP ALL ; PREFIX z".into(),
            ..good.clone()
        };
        assert!(matches!(
            check_prologue(None, &[bad_label]),
            Err(TranslationError::InvalidName(_))
        ));
        assert!(check_prologue(Some("http://ext/> DROP ALL"), &[]).is_err());
    }

    #[test]
    fn filter_must_stay_inside_its_parentheses() {
        assert!(check_filter("?o = <http://ext/1>").is_ok());
        assert!(check_filter("regex(?t, \"^a)\") && bound(?x)").is_ok());
        assert!(check_filter("EXISTS { ?s ?p ?o }").is_ok());
        assert!(check_filter("true) } ; DROP ALL ; INSERT DATA { <a> <b> <c> . ").is_err());
        assert!(check_filter("(true").is_err());
        assert!(check_filter("\"open").is_err());
        assert!(check_filter("true\n").is_err());
    }
}
