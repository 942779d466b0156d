//! Node kind identifiers.
//!
//! `NodeKind` names every node in the closed set by its `"type"` tag. The
//! printer uses it for error reporting and trace output.

use std::fmt;

use crate::decl::{ClassMember, Decl};
use crate::expr::Expr;
use crate::module::ModuleDecl;
use crate::stmt::Stmt;

macro_rules! node_kinds {
    ($($variant:ident => $tag:literal,)*) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($variant,)*
        }

        impl NodeKind {
            /// The `"type"` tag of this kind.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $tag,)*
                }
            }
        }
    };
}

node_kinds! {
    Module => "Module",
    Script => "Script",

    // Statements
    BlockStatement => "BlockStatement",
    EmptyStatement => "EmptyStatement",
    DebuggerStatement => "DebuggerStatement",
    WithStatement => "WithStatement",
    ReturnStatement => "ReturnStatement",
    LabeledStatement => "LabeledStatement",
    BreakStatement => "BreakStatement",
    ContinueStatement => "ContinueStatement",
    IfStatement => "IfStatement",
    SwitchStatement => "SwitchStatement",
    SwitchCase => "SwitchCase",
    ThrowStatement => "ThrowStatement",
    TryStatement => "TryStatement",
    CatchClause => "CatchClause",
    WhileStatement => "WhileStatement",
    DoWhileStatement => "DoWhileStatement",
    ForStatement => "ForStatement",
    ForInStatement => "ForInStatement",
    ForOfStatement => "ForOfStatement",

    // Declarations
    ClassDeclaration => "ClassDeclaration",
    FunctionDeclaration => "FunctionDeclaration",
    VariableDeclaration => "VariableDeclaration",
    VariableDeclarator => "VariableDeclarator",
    TsInterfaceDeclaration => "TsInterfaceDeclaration",
    TsTypeAliasDeclaration => "TsTypeAliasDeclaration",
    TsEnumDeclaration => "TsEnumDeclaration",
    TsModuleDeclaration => "TsModuleDeclaration",

    // Expressions
    ThisExpression => "ThisExpression",
    ArrayExpression => "ArrayExpression",
    ObjectExpression => "ObjectExpression",
    FunctionExpression => "FunctionExpression",
    UnaryExpression => "UnaryExpression",
    UpdateExpression => "UpdateExpression",
    BinaryExpression => "BinaryExpression",
    AssignmentExpression => "AssignmentExpression",
    MemberExpression => "MemberExpression",
    ConditionalExpression => "ConditionalExpression",
    CallExpression => "CallExpression",
    NewExpression => "NewExpression",
    SequenceExpression => "SequenceExpression",
    Identifier => "Identifier",
    StringLiteral => "StringLiteral",
    BooleanLiteral => "BooleanLiteral",
    NullLiteral => "NullLiteral",
    NumericLiteral => "NumericLiteral",
    RegExpLiteral => "RegExpLiteral",
    TemplateLiteral => "TemplateLiteral",
    TemplateElement => "TemplateElement",
    TaggedTemplateExpression => "TaggedTemplateExpression",
    ArrowFunctionExpression => "ArrowFunctionExpression",
    ClassExpression => "ClassExpression",
    YieldExpression => "YieldExpression",
    MetaProperty => "MetaProperty",
    AwaitExpression => "AwaitExpression",
    ParenthesisExpression => "ParenthesisExpression",
    PrivateName => "PrivateName",
    Super => "Super",
    SpreadElement => "SpreadElement",

    // JSX
    JSXMemberExpression => "JSXMemberExpression",
    JSXNamespacedName => "JSXNamespacedName",
    JSXEmptyExpression => "JSXEmptyExpression",
    JSXElement => "JSXElement",
    JSXFragment => "JSXFragment",
    JSXText => "JSXText",
    JSXOpeningElement => "JSXOpeningElement",
    JSXClosingElement => "JSXClosingElement",
    JSXAttribute => "JSXAttribute",
    JSXExpressionContainer => "JSXExpressionContainer",
    JSXSpreadChild => "JSXSpreadChild",
    JSXOpeningFragment => "JSXOpeningFragment",
    JSXClosingFragment => "JSXClosingFragment",

    // TypeScript expressions
    TsTypeAssertion => "TsTypeAssertion",
    TsNonNullExpression => "TsNonNullExpression",
    TsTypeCastExpression => "TsTypeCastExpression",
    TsAsExpression => "TsAsExpression",

    // Patterns
    ArrayPattern => "ArrayPattern",
    ObjectPattern => "ObjectPattern",
    AssignmentPattern => "AssignmentPattern",
    RestElement => "RestElement",
    KeyValuePatternProperty => "KeyValuePatternProperty",
    AssignmentPatternProperty => "AssignmentPatternProperty",

    // Object literal properties
    KeyValueProperty => "KeyValueProperty",
    AssignmentProperty => "AssignmentProperty",
    GetterProperty => "GetterProperty",
    SetterProperty => "SetterProperty",
    MethodProperty => "MethodProperty",

    // Class members
    Constructor => "Constructor",
    ClassMethod => "ClassMethod",
    PrivateMethod => "PrivateMethod",
    ClassProperty => "ClassProperty",
    PrivateProperty => "PrivateProperty",
    TsIndexSignature => "TsIndexSignature",
    TsParameterProperty => "TsParameterProperty",
    Decorator => "Decorator",

    // Module items
    ImportDeclaration => "ImportDeclaration",
    ImportSpecifier => "ImportSpecifier",
    ImportDefaultSpecifier => "ImportDefaultSpecifier",
    ImportNamespaceSpecifier => "ImportNamespaceSpecifier",
    ExportDeclaration => "ExportDeclaration",
    ExportNamedDeclaration => "ExportNamedDeclaration",
    ExportDefaultDeclaration => "ExportDefaultDeclaration",
    ExportDefaultExpression => "ExportDefaultExpression",
    ExportAllDeclaration => "ExportAllDeclaration",
    ExportSpecifier => "ExportSpecifier",
    ExportDefaultSpecifier => "ExportDefaultSpecifier",
    ExportNamespaceSpecifier => "ExportNamespaceSpecifier",
    TsImportEqualsDeclaration => "TsImportEqualsDeclaration",
    TsExportAssignment => "TsExportAssignment",
    TsNamespaceExportDeclaration => "TsNamespaceExportDeclaration",

    // Type-level syntax and modifiers
    TsTypeAnnotation => "TsTypeAnnotation",
    TsTypeParameterDeclaration => "TsTypeParameterDeclaration",
    TsTypeParameterInstantiation => "TsTypeParameterInstantiation",
    TsExpressionWithTypeArguments => "TsExpressionWithTypeArguments",
    TsAccessibility => "TsAccessibility",
    TsModifier => "TsModifier",
}

impl NodeKind {
    pub const fn is_typescript(self) -> bool {
        self.as_str().as_bytes()[0] == b'T' && self.as_str().as_bytes()[1] == b's'
    }

    pub const fn is_jsx(self) -> bool {
        let tag = self.as_str().as_bytes();
        tag[0] == b'J' && tag[1] == b'S' && tag[2] == b'X'
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Expr {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Expr::This(_) => NodeKind::ThisExpression,
            Expr::Array(_) => NodeKind::ArrayExpression,
            Expr::Object(_) => NodeKind::ObjectExpression,
            Expr::Fn(_) => NodeKind::FunctionExpression,
            Expr::Unary(_) => NodeKind::UnaryExpression,
            Expr::Update(_) => NodeKind::UpdateExpression,
            Expr::Bin(_) => NodeKind::BinaryExpression,
            Expr::Assign(_) => NodeKind::AssignmentExpression,
            Expr::Member(_) => NodeKind::MemberExpression,
            Expr::Cond(_) => NodeKind::ConditionalExpression,
            Expr::Call(_) => NodeKind::CallExpression,
            Expr::New(_) => NodeKind::NewExpression,
            Expr::Seq(_) => NodeKind::SequenceExpression,
            Expr::Ident(_) => NodeKind::Identifier,
            Expr::Str(_) => NodeKind::StringLiteral,
            Expr::Bool(_) => NodeKind::BooleanLiteral,
            Expr::Null(_) => NodeKind::NullLiteral,
            Expr::Num(_) => NodeKind::NumericLiteral,
            Expr::Regex(_) => NodeKind::RegExpLiteral,
            Expr::Tpl(_) => NodeKind::TemplateLiteral,
            Expr::TaggedTpl(_) => NodeKind::TaggedTemplateExpression,
            Expr::Arrow(_) => NodeKind::ArrowFunctionExpression,
            Expr::Class(_) => NodeKind::ClassExpression,
            Expr::Yield(_) => NodeKind::YieldExpression,
            Expr::MetaProp(_) => NodeKind::MetaProperty,
            Expr::Await(_) => NodeKind::AwaitExpression,
            Expr::Paren(_) => NodeKind::ParenthesisExpression,
            Expr::PrivateName(_) => NodeKind::PrivateName,
            Expr::Super(_) => NodeKind::Super,
            Expr::JSXMember(_) => NodeKind::JSXMemberExpression,
            Expr::JSXNamespacedName(_) => NodeKind::JSXNamespacedName,
            Expr::JSXEmpty(_) => NodeKind::JSXEmptyExpression,
            Expr::JSXElement(_) => NodeKind::JSXElement,
            Expr::JSXFragment(_) => NodeKind::JSXFragment,
            Expr::JSXText(_) => NodeKind::JSXText,
            Expr::TsTypeAssertion(_) => NodeKind::TsTypeAssertion,
            Expr::TsNonNull(_) => NodeKind::TsNonNullExpression,
            Expr::TsTypeCast(_) => NodeKind::TsTypeCastExpression,
            Expr::TsAs(_) => NodeKind::TsAsExpression,
        }
    }
}

impl Decl {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Decl::Class(_) => NodeKind::ClassDeclaration,
            Decl::Fn(_) => NodeKind::FunctionDeclaration,
            Decl::Var(_) => NodeKind::VariableDeclaration,
            Decl::TsInterface(_) => NodeKind::TsInterfaceDeclaration,
            Decl::TsTypeAlias(_) => NodeKind::TsTypeAliasDeclaration,
            Decl::TsEnum(_) => NodeKind::TsEnumDeclaration,
            Decl::TsModule(_) => NodeKind::TsModuleDeclaration,
        }
    }
}

impl Stmt {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Stmt::Block(_) => NodeKind::BlockStatement,
            Stmt::Empty(_) => NodeKind::EmptyStatement,
            Stmt::Debugger(_) => NodeKind::DebuggerStatement,
            Stmt::With(_) => NodeKind::WithStatement,
            Stmt::Return(_) => NodeKind::ReturnStatement,
            Stmt::Labeled(_) => NodeKind::LabeledStatement,
            Stmt::Break(_) => NodeKind::BreakStatement,
            Stmt::Continue(_) => NodeKind::ContinueStatement,
            Stmt::If(_) => NodeKind::IfStatement,
            Stmt::Switch(_) => NodeKind::SwitchStatement,
            Stmt::Throw(_) => NodeKind::ThrowStatement,
            Stmt::Try(_) => NodeKind::TryStatement,
            Stmt::While(_) => NodeKind::WhileStatement,
            Stmt::DoWhile(_) => NodeKind::DoWhileStatement,
            Stmt::For(_) => NodeKind::ForStatement,
            Stmt::ForIn(_) => NodeKind::ForInStatement,
            Stmt::ForOf(_) => NodeKind::ForOfStatement,
            Stmt::Decl(decl) => decl.kind(),
            Stmt::Expr(expr) => expr.kind(),
        }
    }
}

impl ModuleDecl {
    pub const fn kind(&self) -> NodeKind {
        match self {
            ModuleDecl::Import(_) => NodeKind::ImportDeclaration,
            ModuleDecl::ExportDecl(_) => NodeKind::ExportDeclaration,
            ModuleDecl::ExportNamed(_) => NodeKind::ExportNamedDeclaration,
            ModuleDecl::ExportDefaultDecl(_) => NodeKind::ExportDefaultDeclaration,
            ModuleDecl::ExportDefaultExpr(_) => NodeKind::ExportDefaultExpression,
            ModuleDecl::ExportAll(_) => NodeKind::ExportAllDeclaration,
            ModuleDecl::TsImportEquals(_) => NodeKind::TsImportEqualsDeclaration,
            ModuleDecl::TsExportAssignment(_) => NodeKind::TsExportAssignment,
            ModuleDecl::TsNamespaceExport(_) => NodeKind::TsNamespaceExportDeclaration,
        }
    }
}

impl ClassMember {
    pub const fn kind(&self) -> NodeKind {
        match self {
            ClassMember::Constructor(_) => NodeKind::Constructor,
            ClassMember::Method(_) => NodeKind::ClassMethod,
            ClassMember::PrivateMethod(_) => NodeKind::PrivateMethod,
            ClassMember::ClassProp(_) => NodeKind::ClassProperty,
            ClassMember::PrivateProp(_) => NodeKind::PrivateProperty,
            ClassMember::TsIndexSignature(_) => NodeKind::TsIndexSignature,
        }
    }
}
