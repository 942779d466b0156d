//! Tests for reading the tagged JSON tree shape.

use jsprint_ast::*;

fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).expect("valid tree JSON")
}

#[test]
fn test_module_items_dispatch_on_type_tag() {
    let module: Program = from_json(
        r#"{
            "type": "Module",
            "span": { "start": 0, "end": 30, "ctxt": 0 },
            "body": [
                {
                    "type": "ImportDeclaration",
                    "specifiers": [
                        { "type": "ImportNamespaceSpecifier", "local": { "type": "Identifier", "value": "Foo" } }
                    ],
                    "source": { "type": "StringLiteral", "value": "bar" }
                },
                { "type": "Identifier", "value": "x" }
            ]
        }"#,
    );

    let Program::Module(module) = module else {
        panic!("expected a module");
    };
    assert_eq!(module.body.len(), 2);
    assert!(matches!(
        &module.body[0],
        ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl { specifiers, .. }))
            if matches!(&specifiers[0], ImportSpecifier::Namespace(ns) if ns.local.value == "Foo")
    ));
    assert!(matches!(
        &module.body[1],
        ModuleItem::Stmt(Stmt::Expr(expr)) if matches!(&**expr, Expr::Ident(id) if id.value == "x")
    ));
}

#[test]
fn test_missing_span_is_dummy() {
    let ident: Ident = from_json(r#"{ "value": "a" }"#);
    assert_eq!(ident.span, Span::DUMMY);
    assert!(!ident.span.is_synthesized());
}

#[test]
fn test_array_holes_are_none() {
    let expr: Expr = from_json(
        r#"{
            "type": "ArrayExpression",
            "elements": [
                { "type": "NumericLiteral", "value": 1 },
                null,
                { "type": "SpreadElement", "arguments": { "type": "Identifier", "value": "rest" } }
            ]
        }"#,
    );
    let Expr::Array(array) = expr else {
        panic!("expected an array literal");
    };
    assert!(matches!(&array.elements[0], Some(ExprOrSpread::Expr(e)) if matches!(&**e, Expr::Num(n) if n.value == 1.0)));
    assert!(array.elements[1].is_none());
    assert!(matches!(&array.elements[2], Some(ExprOrSpread::Spread(_))));
}

#[test]
fn test_declarations_are_statements() {
    let stmt: Stmt = from_json(
        r#"{
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [
                {
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "value": "a" },
                    "init": { "type": "BooleanLiteral", "value": true }
                }
            ]
        }"#,
    );
    let Stmt::Decl(Decl::Var(var)) = stmt else {
        panic!("expected a variable declaration");
    };
    assert_eq!(var.kind, VarDeclKind::Const);
    assert_eq!(var.declarations.len(), 1);
}

#[test]
fn test_function_fields_are_flattened() {
    let decl: Decl = from_json(
        r#"{
            "type": "FunctionDeclaration",
            "ident": { "type": "Identifier", "value": "f" },
            "params": [],
            "async": true,
            "generator": false,
            "body": { "type": "BlockStatement", "stmts": [] }
        }"#,
    );
    let Decl::Fn(func) = decl else {
        panic!("expected a function declaration");
    };
    assert_eq!(func.ident.value, "f");
    assert!(func.function.is_async);
    assert!(func.function.body.is_some());
}

#[test]
fn test_computed_property_name_falls_through() {
    let prop: Prop = from_json(
        r#"{
            "type": "KeyValueProperty",
            "key": { "type": "BinaryExpression", "operator": "+", "left": { "type": "Identifier", "value": "a" }, "right": { "type": "Identifier", "value": "b" } },
            "value": { "type": "NullLiteral" }
        }"#,
    );
    let Prop::KeyValue(kv) = prop else {
        panic!("expected a key/value property");
    };
    assert!(matches!(kv.key, PropName::Computed(_)));
}

#[test]
fn test_typescript_payload_is_opaque() {
    let decl: Decl = from_json(
        r#"{
            "type": "TsInterfaceDeclaration",
            "span": { "start": 3, "end": 20 },
            "id": { "type": "Identifier", "value": "I" },
            "declare": false,
            "extends": [],
            "body": { "type": "TsInterfaceBody", "body": [] }
        }"#,
    );
    let Decl::TsInterface(node) = &decl else {
        panic!("expected an interface");
    };
    assert_eq!(node.span.start, 3);
    assert!(node.fields.contains_key("body"));
    assert_eq!(decl.kind(), NodeKind::TsInterfaceDeclaration);
}

#[test]
fn test_export_namespace_specifier_accepts_legacy_tag() {
    let spec: ExportSpecifier = from_json(
        r#"{ "type": "ExportNamespaceSpecifer", "name": { "type": "Identifier", "value": "ns" } }"#,
    );
    assert!(matches!(spec, ExportSpecifier::Namespace(ns) if ns.name.value == "ns"));
}

#[test]
fn test_unknown_type_tag_is_rejected() {
    let result: Result<Expr, _> = serde_json::from_str(r#"{ "type": "NoSuchExpression" }"#);
    assert!(result.is_err());
}

#[test]
fn test_operators_use_source_tokens() {
    let op: BinaryOp = from_json(r#""instanceof""#);
    assert_eq!(op, BinaryOp::InstanceOf);
    assert!(op.is_keyword());
    assert_eq!(AssignOp::ZeroFillRShiftAssign.as_str(), ">>>=");
    assert_eq!(UnaryOp::TypeOf.to_string(), "typeof");
}

#[test]
fn test_node_kind_families() {
    assert!(NodeKind::TsAsExpression.is_typescript());
    assert!(!NodeKind::TemplateLiteral.is_typescript());
    assert!(NodeKind::JSXFragment.is_jsx());
    assert!(!NodeKind::Identifier.is_jsx());
    assert_eq!(NodeKind::ForOfStatement.to_string(), "ForOfStatement");
}

#[test]
fn test_spread_span_starts_at_dots() {
    let spread = SpreadElement {
        spread: Span::new(4, 7, 2, 2),
        arguments: Box::new(Expr::Ident(Ident::new("xs").with_span(Span::new(7, 9, 2, 2)))),
    };
    let span = spread.span();
    assert_eq!((span.start, span.end), (4, 9));
}
