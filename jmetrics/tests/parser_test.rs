//! Tests for CST lowering into the owned syntax tree.

#![allow(clippy::unwrap_used)]

use jmetrics::parser::parse_source;
use jmetrics::syntax::{base_type_name, LoopKind, Node};

#[test]
fn test_lower_class_shape() {
    let code = r"
class Account extends Asset implements Closeable, Auditable {
    long balance;
    String owner;

    Account(String owner) {
        this.owner = owner;
    }

    long balance() {
        return balance;
    }
}
";
    let unit = parse_source(code).unwrap();
    assert_eq!(unit.classes.len(), 1);

    let class = &unit.classes[0];
    assert_eq!(class.name, "Account");
    assert_eq!(class.superclass.as_deref(), Some("Asset"));
    assert_eq!(class.interfaces, vec!["Closeable", "Auditable"]);
    assert!(!class.is_interface);
    assert_eq!(class.fields.len(), 2);
    assert_eq!(class.fields[0].name, "balance");
    assert_eq!(class.fields[0].type_name, "long");

    // Constructor and method both land in `methods`
    assert_eq!(class.methods.len(), 2);
    assert_eq!(class.methods[0].name, "Account");
    assert_eq!(class.methods[0].params.len(), 1);
    assert_eq!(class.methods[1].name, "balance");
    assert!(class.methods[1].start_line < class.methods[1].end_line);
}

#[test]
fn test_lower_interface_flag() {
    let code = r"
interface Runner {
    void run();
}
";
    let unit = parse_source(code).unwrap();
    assert_eq!(unit.classes.len(), 1);
    assert!(unit.classes[0].is_interface);
    assert_eq!(unit.classes[0].methods.len(), 1);
    assert!(unit.classes[0].methods[0].body.is_empty());
}

#[test]
fn test_nested_class_follows_outer() {
    let code = r"
class Outer {
    void act() {}

    class Inner {
        void helper() {}
    }
}
";
    let unit = parse_source(code).unwrap();
    let names: Vec<&str> = unit.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Outer", "Inner"]);
}

#[test]
fn test_lower_loop_kinds() {
    let code = r"
class Loops {
    void all(int[] xs) {
        for (int i = 0; i < 3; i++) {}
        for (int x : xs) {}
        while (true) {}
        do {} while (false);
    }
}
";
    let unit = parse_source(code).unwrap();
    let body = &unit.classes[0].methods[0].body;

    let kinds: Vec<LoopKind> = body
        .iter()
        .filter_map(|n| match n {
            Node::Loop { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            LoopKind::For,
            LoopKind::ForEach,
            LoopKind::While,
            LoopKind::DoWhile
        ]
    );
}

#[test]
fn test_lower_call_receiver_and_args() {
    let code = r"
class Caller {
    void go(Worker w) {
        w.run(1, 2);
        help();
    }
}
";
    let unit = parse_source(code).unwrap();
    let body = &unit.classes[0].methods[0].body;

    match &body[0] {
        Node::Call {
            receiver: Some(recv),
            name,
            args,
        } => {
            assert_eq!(recv.receiver_text(), "w");
            assert_eq!(name, "run");
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected qualified call, got {other:?}"),
    }
    match &body[1] {
        Node::Call { receiver: None, name, .. } => assert_eq!(name, "help"),
        other => panic!("expected unqualified call, got {other:?}"),
    }
}

#[test]
fn test_lower_division_literal() {
    let code = r"
class Halver {
    int halve(int n) {
        return n / 2;
    }
}
";
    let unit = parse_source(code).unwrap();
    let body = &unit.classes[0].methods[0].body;
    match &body[0] {
        Node::Return(Some(expr)) => match expr.as_ref() {
            Node::Binary { op, rhs, .. } => {
                assert_eq!(op.token(), "/");
                assert_eq!(
                    **rhs,
                    Node::Literal(jmetrics::syntax::Literal::Int(2))
                );
            }
            other => panic!("expected division, got {other:?}"),
        },
        other => panic!("expected return, got {other:?}"),
    }
}

#[test]
fn test_parse_failure_reports_diagnostics() {
    let err = parse_source("class Broken { void x( {").unwrap_err();
    assert!(!err.is_empty());
    assert!(err[0].line >= 1);
}

#[test]
fn test_base_type_name_strips_generics_and_arrays() {
    assert_eq!(base_type_name("List<Foo>"), "List");
    assert_eq!(base_type_name("int[]"), "int");
    assert_eq!(base_type_name("Map<String, List<Foo>>"), "Map");
    assert_eq!(base_type_name("Plain"), "Plain");
}

#[test]
fn test_method_signature_extent() {
    let code = r"
class Extent {
    void span(int a,
              int b) {
        int c = a + b;
    }
}
";
    let unit = parse_source(code).unwrap();
    let sig = unit.classes[0].methods[0].signature();
    assert_eq!(sig.name, "span");
    assert_eq!(sig.param_count, 2);
    assert_eq!(sig.start_line, 3);
    assert_eq!(sig.end_line, 6);
    assert_eq!(sig.line_count(), 4);
}
