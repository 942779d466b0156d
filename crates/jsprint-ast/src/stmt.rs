//! Statement nodes.

use serde::{Deserialize, Serialize};

use crate::decl::{Decl, VarDecl};
use crate::expr::{Expr, Ident};
use crate::impl_spanned;
use crate::pat::Pat;
use jsprint_common::{Span, Spanned};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    #[serde(rename = "BlockStatement")]
    Block(BlockStmt),
    #[serde(rename = "EmptyStatement")]
    Empty(EmptyStmt),
    #[serde(rename = "DebuggerStatement")]
    Debugger(DebuggerStmt),
    #[serde(rename = "WithStatement")]
    With(WithStmt),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStmt),
    #[serde(rename = "LabeledStatement")]
    Labeled(LabeledStmt),
    #[serde(rename = "BreakStatement")]
    Break(BreakStmt),
    #[serde(rename = "ContinueStatement")]
    Continue(ContinueStmt),
    #[serde(rename = "IfStatement")]
    If(IfStmt),
    #[serde(rename = "SwitchStatement")]
    Switch(SwitchStmt),
    #[serde(rename = "ThrowStatement")]
    Throw(ThrowStmt),
    #[serde(rename = "TryStatement")]
    Try(TryStmt),
    #[serde(rename = "WhileStatement")]
    While(WhileStmt),
    #[serde(rename = "DoWhileStatement")]
    DoWhile(DoWhileStmt),
    #[serde(rename = "ForStatement")]
    For(ForStmt),
    #[serde(rename = "ForInStatement")]
    ForIn(ForInStmt),
    #[serde(rename = "ForOfStatement")]
    ForOf(ForOfStmt),
    #[serde(untagged)]
    Decl(Decl),
    /// Expression statement. The tree has no wrapper node for these.
    #[serde(untagged)]
    Expr(Box<Expr>),
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Block(n) => n.span,
            Stmt::Empty(n) => n.span,
            Stmt::Debugger(n) => n.span,
            Stmt::With(n) => n.span,
            Stmt::Return(n) => n.span,
            Stmt::Labeled(n) => n.span,
            Stmt::Break(n) => n.span,
            Stmt::Continue(n) => n.span,
            Stmt::If(n) => n.span,
            Stmt::Switch(n) => n.span,
            Stmt::Throw(n) => n.span,
            Stmt::Try(n) => n.span,
            Stmt::While(n) => n.span,
            Stmt::DoWhile(n) => n.span,
            Stmt::For(n) => n.span,
            Stmt::ForIn(n) => n.span,
            Stmt::ForOf(n) => n.span,
            Stmt::Decl(n) => n.span(),
            Stmt::Expr(n) => n.span(),
        }
    }
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Stmt::Expr(Box::new(expr))
    }
}

impl From<Decl> for Stmt {
    fn from(decl: Decl) -> Self {
        Stmt::Decl(decl)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub stmts: Vec<Stmt>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyStmt {
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DebuggerStmt {
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WithStmt {
    #[serde(default)]
    pub span: Span,
    pub object: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub argument: Option<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    #[serde(default)]
    pub span: Span,
    pub label: Ident,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakStmt {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub label: Option<Ident>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContinueStmt {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub label: Option<Ident>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    #[serde(default)]
    pub span: Span,
    pub test: Box<Expr>,
    pub consequent: Box<Stmt>,
    #[serde(default)]
    pub alternate: Option<Box<Stmt>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    #[serde(default)]
    pub span: Span,
    pub discriminant: Box<Expr>,
    #[serde(default)]
    pub cases: Vec<SwitchCase>,
}

/// `case test:` or, with no test, `default:`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub test: Option<Box<Expr>>,
    #[serde(default)]
    pub consequent: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrowStmt {
    #[serde(default)]
    pub span: Span,
    pub argument: Box<Expr>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TryStmt {
    #[serde(default)]
    pub span: Span,
    pub block: BlockStmt,
    #[serde(default)]
    pub handler: Option<CatchClause>,
    #[serde(default)]
    pub finalizer: Option<BlockStmt>,
}

/// `catch (param) body`. `param` is absent for `catch {}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub param: Option<Pat>,
    pub body: BlockStmt,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    #[serde(default)]
    pub span: Span,
    pub test: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStmt {
    #[serde(default)]
    pub span: Span,
    pub test: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub init: Option<VarDeclOrExpr>,
    #[serde(default)]
    pub test: Option<Box<Expr>>,
    #[serde(default)]
    pub update: Option<Box<Expr>>,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForInStmt {
    #[serde(default)]
    pub span: Span,
    pub left: VarDeclOrPat,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForOfStmt {
    #[serde(default)]
    pub span: Span,
    /// Span of the `await` keyword in `for await (...)`.
    #[serde(default, rename = "await")]
    pub await_token: Option<Span>,
    pub left: VarDeclOrPat,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VarDeclOrExpr {
    #[serde(rename = "VariableDeclaration")]
    VarDecl(VarDecl),
    #[serde(untagged)]
    Expr(Box<Expr>),
}

impl Spanned for VarDeclOrExpr {
    fn span(&self) -> Span {
        match self {
            VarDeclOrExpr::VarDecl(n) => n.span,
            VarDeclOrExpr::Expr(n) => n.span(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VarDeclOrPat {
    #[serde(rename = "VariableDeclaration")]
    VarDecl(VarDecl),
    #[serde(untagged)]
    Pat(Box<Pat>),
}

impl Spanned for VarDeclOrPat {
    fn span(&self) -> Span {
        match self {
            VarDeclOrPat::VarDecl(n) => n.span,
            VarDeclOrPat::Pat(n) => n.span(),
        }
    }
}

impl_spanned!(
    BlockStmt,
    EmptyStmt,
    DebuggerStmt,
    WithStmt,
    ReturnStmt,
    LabeledStmt,
    BreakStmt,
    ContinueStmt,
    IfStmt,
    SwitchStmt,
    SwitchCase,
    ThrowStmt,
    TryStmt,
    CatchClause,
    WhileStmt,
    DoWhileStmt,
    ForStmt,
    ForInStmt,
    ForOfStmt,
);
