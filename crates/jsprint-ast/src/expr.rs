//! Expression nodes.

use serde::{Deserialize, Serialize};

use crate::decl::{Class, Function};
use crate::impl_spanned;
use crate::jsx::{JSXElement, JSXEmptyExpr, JSXFragment, JSXMemberExpr, JSXNamespacedName, JSXText};
use crate::lit::{Bool, Null, Number, Regex, Str, Tpl, TplElement};
use crate::ops::{AssignOp, BinaryOp, UnaryOp, UpdateOp};
use crate::pat::Pat;
use crate::prop::PropOrSpread;
use crate::stmt::BlockStmt;
use crate::typescript::{TsExprNode, TsNode};
use jsprint_common::{Span, Spanned};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "ThisExpression")]
    This(ThisExpr),
    #[serde(rename = "ArrayExpression")]
    Array(ArrayLit),
    #[serde(rename = "ObjectExpression")]
    Object(ObjectLit),
    #[serde(rename = "FunctionExpression")]
    Fn(FnExpr),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpr),
    #[serde(rename = "UpdateExpression")]
    Update(UpdateExpr),
    #[serde(rename = "BinaryExpression")]
    Bin(BinExpr),
    #[serde(rename = "AssignmentExpression")]
    Assign(AssignExpr),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpr),
    #[serde(rename = "ConditionalExpression")]
    Cond(CondExpr),
    #[serde(rename = "CallExpression")]
    Call(CallExpr),
    #[serde(rename = "NewExpression")]
    New(NewExpr),
    #[serde(rename = "SequenceExpression")]
    Seq(SeqExpr),
    #[serde(rename = "Identifier")]
    Ident(Ident),
    #[serde(rename = "StringLiteral")]
    Str(Str),
    #[serde(rename = "BooleanLiteral")]
    Bool(Bool),
    #[serde(rename = "NullLiteral")]
    Null(Null),
    #[serde(rename = "NumericLiteral")]
    Num(Number),
    #[serde(rename = "RegExpLiteral")]
    Regex(Regex),
    #[serde(rename = "TemplateLiteral")]
    Tpl(Tpl),
    #[serde(rename = "TaggedTemplateExpression")]
    TaggedTpl(TaggedTpl),
    #[serde(rename = "ArrowFunctionExpression")]
    Arrow(ArrowExpr),
    #[serde(rename = "ClassExpression")]
    Class(ClassExpr),
    #[serde(rename = "YieldExpression")]
    Yield(YieldExpr),
    #[serde(rename = "MetaProperty")]
    MetaProp(MetaPropExpr),
    #[serde(rename = "AwaitExpression")]
    Await(AwaitExpr),
    #[serde(rename = "ParenthesisExpression")]
    Paren(ParenExpr),
    #[serde(rename = "PrivateName")]
    PrivateName(PrivateName),
    #[serde(rename = "Super")]
    Super(Super),

    #[serde(rename = "JSXMemberExpression")]
    JSXMember(JSXMemberExpr),
    #[serde(rename = "JSXNamespacedName")]
    JSXNamespacedName(JSXNamespacedName),
    #[serde(rename = "JSXEmptyExpression")]
    JSXEmpty(JSXEmptyExpr),
    #[serde(rename = "JSXElement")]
    JSXElement(Box<JSXElement>),
    #[serde(rename = "JSXFragment")]
    JSXFragment(JSXFragment),
    #[serde(rename = "JSXText")]
    JSXText(JSXText),

    #[serde(rename = "TsTypeAssertion")]
    TsTypeAssertion(TsExprNode),
    #[serde(rename = "TsNonNullExpression")]
    TsNonNull(TsExprNode),
    #[serde(rename = "TsTypeCastExpression")]
    TsTypeCast(TsExprNode),
    #[serde(rename = "TsAsExpression")]
    TsAs(TsExprNode),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::This(n) => n.span,
            Expr::Array(n) => n.span,
            Expr::Object(n) => n.span,
            Expr::Fn(n) => n.function.span,
            Expr::Unary(n) => n.span,
            Expr::Update(n) => n.span,
            Expr::Bin(n) => n.span,
            Expr::Assign(n) => n.span,
            Expr::Member(n) => n.span,
            Expr::Cond(n) => n.span,
            Expr::Call(n) => n.span,
            Expr::New(n) => n.span,
            Expr::Seq(n) => n.span,
            Expr::Ident(n) => n.span,
            Expr::Str(n) => n.span,
            Expr::Bool(n) => n.span,
            Expr::Null(n) => n.span,
            Expr::Num(n) => n.span,
            Expr::Regex(n) => n.span,
            Expr::Tpl(n) => n.span,
            Expr::TaggedTpl(n) => n.span,
            Expr::Arrow(n) => n.span,
            Expr::Class(n) => n.class.span,
            Expr::Yield(n) => n.span,
            Expr::MetaProp(n) => n.span,
            Expr::Await(n) => n.span,
            Expr::Paren(n) => n.span,
            Expr::PrivateName(n) => n.span,
            Expr::Super(n) => n.span,
            Expr::JSXMember(n) => n.span,
            Expr::JSXNamespacedName(n) => n.span,
            Expr::JSXEmpty(n) => n.span,
            Expr::JSXElement(n) => n.span,
            Expr::JSXFragment(n) => n.span,
            Expr::JSXText(n) => n.span,
            Expr::TsTypeAssertion(n)
            | Expr::TsNonNull(n)
            | Expr::TsTypeCast(n)
            | Expr::TsAs(n) => n.span,
        }
    }
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Expr::Ident(ident)
    }
}

impl From<Str> for Expr {
    fn from(s: Str) -> Self {
        Expr::Str(s)
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::Num(n)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ident {
    #[serde(default)]
    pub span: Span,
    pub value: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Ident {
            span: Span::DUMMY,
            value: value.into(),
            optional: false,
            type_annotation: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThisExpr {
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Super {
    #[serde(default)]
    pub span: Span,
}

/// `#name` in class bodies and member accesses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateName {
    #[serde(default)]
    pub span: Span,
    pub id: Ident,
}

/// Array literal. `None` elements are holes (`[a, , b]`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayLit {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub elements: Vec<Option<ExprOrSpread>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectLit {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub properties: Vec<PropOrSpread>,
}

/// `...expr` in array literals, call arguments and object literals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadElement {
    /// Span of the `...` token.
    #[serde(default)]
    pub spread: Span,
    pub arguments: Box<Expr>,
}

impl Spanned for SpreadElement {
    fn span(&self) -> Span {
        let arg = self.arguments.span();
        if self.spread == Span::DUMMY {
            return arg;
        }
        Span {
            start: self.spread.start,
            loc: jsprint_common::Loc {
                start: self.spread.loc.start,
                end: arg.loc.end,
            },
            ..arg
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExprOrSpread {
    #[serde(rename = "SpreadElement")]
    Spread(SpreadElement),
    #[serde(untagged)]
    Expr(Box<Expr>),
}

impl Spanned for ExprOrSpread {
    fn span(&self) -> Span {
        match self {
            ExprOrSpread::Spread(s) => s.span(),
            ExprOrSpread::Expr(e) => e.span(),
        }
    }
}

impl From<Expr> for ExprOrSpread {
    fn from(expr: Expr) -> Self {
        ExprOrSpread::Expr(Box::new(expr))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    #[serde(default)]
    pub span: Span,
    pub operator: UnaryOp,
    pub argument: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpr {
    #[serde(default)]
    pub span: Span,
    pub operator: UpdateOp,
    pub prefix: bool,
    pub argument: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinExpr {
    #[serde(default)]
    pub span: Span,
    pub operator: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    #[serde(default)]
    pub span: Span,
    pub operator: AssignOp,
    pub left: Box<Pat>,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
    #[serde(default)]
    pub span: Span,
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CondExpr {
    #[serde(default)]
    pub span: Span,
    pub test: Box<Expr>,
    pub consequent: Box<Expr>,
    pub alternate: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpr {
    #[serde(default)]
    pub span: Span,
    pub callee: Box<Expr>,
    #[serde(default)]
    pub arguments: Vec<ExprOrSpread>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<TsNode>,
}

/// `new callee(args)`. `arguments: None` is `new Foo` without parentheses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpr {
    #[serde(default)]
    pub span: Span,
    pub callee: Box<Expr>,
    #[serde(default)]
    pub arguments: Option<Vec<ExprOrSpread>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<TsNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeqExpr {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub expressions: Vec<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedTpl {
    #[serde(default)]
    pub span: Span,
    pub tag: Box<Expr>,
    #[serde(default)]
    pub expressions: Vec<Box<Expr>>,
    #[serde(default)]
    pub quasis: Vec<TplElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowExpr {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub params: Vec<Pat>,
    pub body: BlockStmtOrExpr,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default, rename = "generator")]
    pub is_generator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TsNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockStmtOrExpr {
    #[serde(rename = "BlockStatement")]
    BlockStmt(BlockStmt),
    #[serde(untagged)]
    Expr(Box<Expr>),
}

impl Spanned for BlockStmtOrExpr {
    fn span(&self) -> Span {
        match self {
            BlockStmtOrExpr::BlockStmt(b) => b.span,
            BlockStmtOrExpr::Expr(e) => e.span(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FnExpr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Ident>,
    #[serde(flatten)]
    pub function: Function,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassExpr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Ident>,
    #[serde(flatten)]
    pub class: Class,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldExpr {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub argument: Option<Box<Expr>>,
    #[serde(default)]
    pub delegate: bool,
}

/// `new.target` / `import.meta`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaPropExpr {
    #[serde(default)]
    pub span: Span,
    pub meta: Ident,
    pub property: Ident,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AwaitExpr {
    #[serde(default)]
    pub span: Span,
    pub argument: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    #[serde(default)]
    pub span: Span,
    pub expression: Box<Expr>,
}

impl_spanned!(
    Ident,
    ThisExpr,
    Super,
    PrivateName,
    ArrayLit,
    ObjectLit,
    UnaryExpr,
    UpdateExpr,
    BinExpr,
    AssignExpr,
    MemberExpr,
    CondExpr,
    CallExpr,
    NewExpr,
    SeqExpr,
    TaggedTpl,
    ArrowExpr,
    YieldExpr,
    MetaPropExpr,
    AwaitExpr,
    ParenExpr,
);
