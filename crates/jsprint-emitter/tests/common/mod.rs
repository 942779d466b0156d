//! Tree builders shared by the emitter integration tests.

#![allow(dead_code)]

use jsprint_ast::*;
use jsprint_emitter::printer::{PrintOptions, print_expr, print_stmt, print_to_string};

// =============================================================================
// Printing
// =============================================================================

pub fn compact(program: &Program) -> String {
    print_to_string(program, PrintOptions::compact()).expect("compact print")
}

pub fn formatted(program: &Program) -> String {
    print_to_string(program, PrintOptions::formatted()).expect("formatted print")
}

pub fn compact_expr(expr: &Expr) -> String {
    print_expr(expr, PrintOptions::compact()).expect("compact print")
}

pub fn formatted_expr(expr: &Expr) -> String {
    print_expr(expr, PrintOptions::formatted()).expect("formatted print")
}

pub fn compact_stmt(stmt: &Stmt) -> String {
    print_stmt(stmt, PrintOptions::compact()).expect("compact print")
}

pub fn formatted_stmt(stmt: &Stmt) -> String {
    print_stmt(stmt, PrintOptions::formatted()).expect("formatted print")
}

// =============================================================================
// Programs
// =============================================================================

pub fn script(body: Vec<Stmt>) -> Program {
    Program::Script(Script {
        span: Span::DUMMY,
        body,
        interpreter: None,
    })
}

pub fn module(body: Vec<ModuleItem>) -> Program {
    Program::Module(Module {
        span: Span::DUMMY,
        body,
        interpreter: None,
    })
}

// =============================================================================
// Expressions
// =============================================================================

pub fn ident(name: &str) -> Ident {
    Ident::new(name)
}

pub fn id(name: &str) -> Expr {
    Expr::Ident(Ident::new(name))
}

pub fn num(value: f64) -> Expr {
    Expr::Num(Number::new(value))
}

pub fn string(value: &str) -> Expr {
    Expr::Str(Str::new(value))
}

pub fn bin(operator: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Bin(BinExpr {
        span: Span::DUMMY,
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn unary(operator: UnaryOp, argument: Expr) -> Expr {
    Expr::Unary(UnaryExpr {
        span: Span::DUMMY,
        operator,
        argument: Box::new(argument),
    })
}

pub fn update(operator: UpdateOp, prefix: bool, argument: Expr) -> Expr {
    Expr::Update(UpdateExpr {
        span: Span::DUMMY,
        operator,
        prefix,
        argument: Box::new(argument),
    })
}

pub fn assign(operator: AssignOp, left: Pat, right: Expr) -> Expr {
    Expr::Assign(AssignExpr {
        span: Span::DUMMY,
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
        span: Span::DUMMY,
        callee: Box::new(callee),
        arguments: arguments.into_iter().map(ExprOrSpread::from).collect(),
        type_arguments: None,
    })
}

pub fn new_expr(callee: Expr, arguments: Option<Vec<Expr>>) -> Expr {
    Expr::New(NewExpr {
        span: Span::DUMMY,
        callee: Box::new(callee),
        arguments: arguments.map(|args| args.into_iter().map(ExprOrSpread::from).collect()),
        type_arguments: None,
    })
}

pub fn member(object: Expr, property: &str) -> Expr {
    Expr::Member(MemberExpr {
        span: Span::DUMMY,
        object: Box::new(object),
        property: Box::new(id(property)),
        computed: false,
    })
}

pub fn computed_member(object: Expr, property: Expr) -> Expr {
    Expr::Member(MemberExpr {
        span: Span::DUMMY,
        object: Box::new(object),
        property: Box::new(property),
        computed: true,
    })
}

pub fn paren(expression: Expr) -> Expr {
    Expr::Paren(ParenExpr {
        span: Span::DUMMY,
        expression: Box::new(expression),
    })
}

pub fn seq(expressions: Vec<Expr>) -> Expr {
    Expr::Seq(SeqExpr {
        span: Span::DUMMY,
        expressions: expressions.into_iter().map(Box::new).collect(),
    })
}

pub fn spread(argument: Expr) -> SpreadElement {
    SpreadElement {
        spread: Span::DUMMY,
        arguments: Box::new(argument),
    }
}

pub fn array(elements: Vec<Option<Expr>>) -> Expr {
    Expr::Array(ArrayLit {
        span: Span::DUMMY,
        elements: elements
            .into_iter()
            .map(|e| e.map(ExprOrSpread::from))
            .collect(),
    })
}

pub fn object(properties: Vec<Prop>) -> Expr {
    Expr::Object(ObjectLit {
        span: Span::DUMMY,
        properties: properties.into_iter().map(PropOrSpread::from).collect(),
    })
}

pub fn key_value(key: &str, value: Expr) -> Prop {
    Prop::KeyValue(KeyValueProp {
        key: PropName::Ident(Ident::new(key)),
        value: Box::new(value),
    })
}

pub fn arrow(params: Vec<Pat>, body: BlockStmtOrExpr) -> Expr {
    Expr::Arrow(ArrowExpr {
        span: Span::DUMMY,
        params,
        body,
        is_async: false,
        is_generator: false,
        type_parameters: None,
        return_type: None,
    })
}

pub fn fn_expr(name: Option<&str>, function: Function) -> Expr {
    Expr::Fn(FnExpr {
        identifier: name.map(Ident::new),
        function,
    })
}

// =============================================================================
// Functions and classes
// =============================================================================

pub fn function(params: Vec<Pat>, stmts: Vec<Stmt>) -> Function {
    Function {
        params,
        body: Some(block(stmts)),
        ..Default::default()
    }
}

pub fn fn_decl(name: &str, function: Function) -> Stmt {
    Stmt::Decl(Decl::Fn(FnDecl {
        ident: Ident::new(name),
        declare: false,
        function,
    }))
}

pub fn class_decl(name: &str, super_class: Option<Expr>, body: Vec<ClassMember>) -> Stmt {
    Stmt::Decl(Decl::Class(ClassDecl {
        identifier: Ident::new(name),
        declare: false,
        class: Class {
            body,
            super_class: super_class.map(Box::new),
            ..Default::default()
        },
    }))
}

pub fn method(key: &str, kind: MethodKind, is_static: bool, function: Function) -> ClassMember {
    ClassMember::Method(ClassMethod {
        span: Span::DUMMY,
        key: PropName::Ident(Ident::new(key)),
        function,
        kind,
        is_static,
        accessibility: None,
        is_abstract: false,
        is_optional: false,
    })
}

pub fn constructor(params: Vec<Pat>, stmts: Vec<Stmt>) -> ClassMember {
    ClassMember::Constructor(Constructor {
        span: Span::DUMMY,
        key: PropName::Ident(Ident::new("constructor")),
        params: params.into_iter().map(ParamOrTsParamProp::Param).collect(),
        body: Some(block(stmts)),
        accessibility: None,
        is_optional: false,
    })
}

pub fn class_prop(key: Expr, value: Option<Expr>, is_static: bool, computed: bool) -> ClassMember {
    ClassMember::ClassProp(ClassProp {
        span: Span::DUMMY,
        key: Box::new(key),
        value: value.map(Box::new),
        type_annotation: None,
        is_static,
        decorators: Vec::new(),
        computed,
        accessibility: None,
        is_abstract: false,
        is_optional: false,
        readonly: false,
        definite: false,
    })
}

pub fn private_name(name: &str) -> PrivateName {
    PrivateName {
        span: Span::DUMMY,
        id: Ident::new(name),
    }
}

pub fn private_prop(name: &str, value: Option<Expr>) -> ClassMember {
    ClassMember::PrivateProp(PrivateProp {
        span: Span::DUMMY,
        key: private_name(name),
        value: value.map(Box::new),
        type_annotation: None,
        is_static: false,
        decorators: Vec::new(),
        computed: false,
        accessibility: None,
        is_abstract: false,
        is_optional: false,
        readonly: false,
        definite: false,
    })
}

// =============================================================================
// Patterns
// =============================================================================

pub fn pat(name: &str) -> Pat {
    Pat::Ident(Ident::new(name))
}

pub fn assign_pat(left: Pat, right: Expr) -> Pat {
    Pat::Assign(AssignPat {
        span: Span::DUMMY,
        left: Box::new(left),
        right: Box::new(right),
        type_annotation: None,
    })
}

pub fn rest_pat(argument: Pat) -> Pat {
    Pat::Rest(RestPat {
        span: Span::DUMMY,
        rest: Span::DUMMY,
        argument: Box::new(argument),
        type_annotation: None,
    })
}

// =============================================================================
// Statements
// =============================================================================

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(Box::new(expr))
}

pub fn block(stmts: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        span: Span::DUMMY,
        stmts,
    }
}

pub fn block_stmt(stmts: Vec<Stmt>) -> Stmt {
    Stmt::Block(block(stmts))
}

pub fn var_decl(kind: VarDeclKind, declarators: Vec<(Pat, Option<Expr>)>) -> VarDecl {
    VarDecl {
        span: Span::DUMMY,
        kind,
        declare: false,
        declarations: declarators
            .into_iter()
            .map(|(id, init)| VarDeclarator {
                span: Span::DUMMY,
                id,
                init: init.map(Box::new),
                definite: false,
            })
            .collect(),
    }
}

pub fn var(kind: VarDeclKind, name: &str, init: Option<Expr>) -> Stmt {
    Stmt::Decl(Decl::Var(var_decl(kind, vec![(pat(name), init)])))
}

pub fn ret(argument: Option<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt {
        span: Span::DUMMY,
        argument: argument.map(Box::new),
    })
}

pub fn if_stmt(test: Expr, consequent: Stmt, alternate: Option<Stmt>) -> Stmt {
    Stmt::If(IfStmt {
        span: Span::DUMMY,
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: alternate.map(Box::new),
    })
}

pub fn switch_case(test: Option<Expr>, consequent: Vec<Stmt>) -> SwitchCase {
    SwitchCase {
        span: Span::DUMMY,
        test: test.map(Box::new),
        consequent,
    }
}

pub fn switch_stmt(discriminant: Expr, cases: Vec<SwitchCase>) -> Stmt {
    Stmt::Switch(SwitchStmt {
        span: Span::DUMMY,
        discriminant: Box::new(discriminant),
        cases,
    })
}

pub fn break_stmt(label: Option<&str>) -> Stmt {
    Stmt::Break(BreakStmt {
        span: Span::DUMMY,
        label: label.map(Ident::new),
    })
}

// =============================================================================
// Module items
// =============================================================================

pub fn import(specifiers: Vec<ImportSpecifier>, source: &str) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
        span: Span::DUMMY,
        specifiers,
        source: Str::new(source),
    }))
}

pub fn import_default(local: &str) -> ImportSpecifier {
    ImportSpecifier::Default(ImportDefaultSpecifier {
        span: Span::DUMMY,
        local: Ident::new(local),
    })
}

pub fn import_namespace(local: &str) -> ImportSpecifier {
    ImportSpecifier::Namespace(ImportNamespaceSpecifier {
        span: Span::DUMMY,
        local: Ident::new(local),
    })
}

pub fn import_named(imported: Option<&str>, local: &str) -> ImportSpecifier {
    ImportSpecifier::Named(ImportNamedSpecifier {
        span: Span::DUMMY,
        local: Ident::new(local),
        imported: imported.map(Ident::new),
    })
}

pub fn export_named(specifiers: Vec<ExportSpecifier>, source: Option<&str>) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::ExportNamed(NamedExport {
        span: Span::DUMMY,
        specifiers,
        source: source.map(Str::new),
    }))
}

pub fn export_specifier(orig: &str, exported: Option<&str>) -> ExportSpecifier {
    ExportSpecifier::Named(ExportNamedSpecifier {
        span: Span::DUMMY,
        orig: Ident::new(orig),
        exported: exported.map(Ident::new),
    })
}
