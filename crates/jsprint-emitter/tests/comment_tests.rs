//! Leading comment re-emission in formatted mode.

mod common;

use common::*;
use jsprint_ast::*;
use jsprint_common::{Comment, Comments};
use jsprint_emitter::{PrintOptions, print_with_comments};

/// `name();` whose span starts at `start` on `line`.
fn call_at(name: &str, start: u32, line: u32) -> Stmt {
    let span = Span::new(start, start + name.len() as u32 + 2, line, line);
    expr_stmt(Expr::Call(CallExpr {
        span,
        callee: Box::new(Expr::Ident(Ident::new(name).with_span(span))),
        arguments: Vec::new(),
        type_arguments: None,
    }))
}

fn print_formatted(program: &Program, comments: &Comments) -> String {
    print_with_comments(program, comments, PrintOptions::formatted())
        .expect("print")
        .code
}

#[test]
fn test_line_comment_before_statement() {
    let source = "// hello\nfoo();";
    let comments = Comments::from_source(source);
    let program = script(vec![call_at("foo", 9, 2)]);

    assert_eq!(print_formatted(&program, &comments), "// hello\nfoo();");
}

#[test]
fn test_block_comment_stays_on_the_statement_line() {
    let source = "/* a */ foo();";
    let comments = Comments::from_source(source);
    let program = script(vec![call_at("foo", 8, 1)]);

    assert_eq!(print_formatted(&program, &comments), "/* a */ foo();");
}

#[test]
fn test_consecutive_comments_share_one_anchor() {
    let source = "// a\n// b\nfoo();";
    let comments = Comments::from_source(source);
    let program = script(vec![call_at("foo", 10, 3)]);

    assert_eq!(print_formatted(&program, &comments), "// a\n// b\nfoo();");
}

#[test]
fn test_comment_is_emitted_once_for_nested_lists_at_same_offset() {
    // The statement and the first sequence element both start at offset 5.
    let source = "// c\na, b;";
    let comments = Comments::from_source(source);
    let a = Expr::Ident(Ident::new("a").with_span(Span::new(5, 6, 2, 2)));
    let b = Expr::Ident(Ident::new("b").with_span(Span::new(8, 9, 2, 2)));
    let stmt = expr_stmt(Expr::Seq(SeqExpr {
        span: Span::new(5, 9, 2, 2),
        expressions: vec![Box::new(a), Box::new(b)],
    }));
    let program = script(vec![stmt]);

    assert_eq!(print_formatted(&program, &comments), "// c\na, b;");
}

#[test]
fn test_comment_inside_function_body_is_indented() {
    let source = "function f() {\n    // inside\n    a();\n}";
    let comments = Comments::from_source(source);
    let inner = call_at("a", 33, 3);
    let program = script(vec![fn_decl("f", function(vec![], vec![inner]))]);

    assert_eq!(
        print_formatted(&program, &comments),
        "function f() {\n    // inside\n    a();\n}"
    );
}

#[test]
fn test_compact_mode_drops_comments() {
    let comments = Comments::from_source("// hello\nfoo();");
    let program = script(vec![call_at("foo", 9, 2)]);

    let output = print_with_comments(&program, &comments, PrintOptions::compact())
        .expect("print")
        .code;
    assert_eq!(output, "foo();");
}

#[test]
fn test_synthesized_nodes_do_not_pick_up_comments() {
    let mut comments = Comments::new();
    comments.add_leading(0, Comment::line("// stray"));

    let stmt = expr_stmt(Expr::Call(CallExpr {
        span: Span::synthesized(),
        callee: Box::new(id("foo")),
        arguments: Vec::new(),
        type_arguments: None,
    }));
    let program = script(vec![stmt]);

    assert_eq!(print_formatted(&program, &comments), "foo();");
}

#[test]
fn test_comments_without_matching_node_are_dropped() {
    let comments = Comments::from_source("foo(); // trailing");
    let program = script(vec![call_at("foo", 0, 1)]);

    assert_eq!(print_formatted(&program, &comments), "foo();");
}
