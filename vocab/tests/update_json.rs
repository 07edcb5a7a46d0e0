//! Update requests arrive from the parser as JSON; these tests pin the wire shape.

use fedora_vocab::{GraphName, PatternElement, Term, UpdateOperation, UpdateRequest};

#[test]
fn delete_where_with_named_graph_deserializes() {
    let json = r#"{
        "operations": [{
            "operation": "delete_where",
            "body": [{
                "graph": {"type": "named", "value": {"type": "variable", "value": "g"}},
                "subject": {"type": "variable", "value": "s"},
                "predicate": {"type": "iri", "value": "http://ext/p"},
                "object": {"type": "iri", "value": "http://ext/43"}
            }]
        }]
    }"#;
    let request: UpdateRequest = serde_json::from_str(json).expect("valid update JSON");
    let UpdateOperation::DeleteWhere(quads) = &request.operations[0] else {
        panic!("expected DELETE WHERE, got {:?}", request.operations[0]);
    };
    assert_eq!(quads[0].graph, GraphName::Named(Term::variable("g")));
    assert_eq!(quads[0].triple.object, Term::iri("http://ext/43"));
}

#[test]
fn modify_where_tree_deserializes_in_order() {
    let json = r#"{
        "base": "http://ext/42",
        "operations": [{
            "operation": "modify",
            "body": {
                "insert": [],
                "where_pattern": {"element": "group", "body": [
                    {"element": "basic_block", "body": []},
                    {"element": "filter", "body": "bound(?x)"}
                ]}
            }
        }]
    }"#;
    let request: UpdateRequest = serde_json::from_str(json).expect("valid update JSON");
    assert_eq!(request.base.as_deref(), Some("http://ext/42"));
    let UpdateOperation::Modify(modify) = &request.operations[0] else {
        panic!("expected MODIFY");
    };
    assert!(modify.delete.is_none());
    assert_eq!(modify.insert.as_deref(), Some(&[][..]));
    assert_eq!(
        modify.where_pattern,
        PatternElement::Group(vec![
            PatternElement::BasicBlock(vec![]),
            PatternElement::Filter("bound(?x)".into()),
        ])
    );
}
