//! JSX nodes.
//!
//! These deserialize so that JSX input is rejected with a precise node kind
//! instead of a parse failure.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Ident, SpreadElement};
use crate::impl_spanned;
use crate::typescript::TsNode;
use jsprint_common::{Span, Spanned};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXObject {
    #[serde(rename = "JSXMemberExpression")]
    JSXMemberExpr(Box<JSXMemberExpr>),
    #[serde(rename = "Identifier")]
    Ident(Ident),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXMemberExpr {
    #[serde(default)]
    pub span: Span,
    pub object: JSXObject,
    pub property: Ident,
}

/// `namespace:name`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXNamespacedName {
    #[serde(default)]
    pub span: Span,
    pub namespace: Ident,
    pub name: Ident,
}

/// The empty `{}` in JSX. Prints as nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JSXEmptyExpr {
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXExprContainer {
    #[serde(default)]
    pub span: Span,
    pub expression: JSXExpr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXExpr {
    #[serde(rename = "JSXEmptyExpression")]
    JSXEmptyExpr(JSXEmptyExpr),
    #[serde(untagged)]
    Expr(Box<Expr>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXSpreadChild {
    #[serde(default)]
    pub span: Span,
    pub expression: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXElementName {
    #[serde(rename = "Identifier")]
    Ident(Ident),
    #[serde(rename = "JSXMemberExpression")]
    JSXMemberExpr(JSXMemberExpr),
    #[serde(rename = "JSXNamespacedName")]
    JSXNamespacedName(JSXNamespacedName),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JSXOpeningElement {
    #[serde(default)]
    pub span: Span,
    pub name: JSXElementName,
    #[serde(default)]
    pub attrs: Vec<JSXAttrOrSpread>,
    #[serde(default)]
    pub self_closing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<TsNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXAttrOrSpread {
    #[serde(rename = "JSXAttribute")]
    JSXAttr(JSXAttr),
    #[serde(rename = "SpreadElement")]
    SpreadElement(SpreadElement),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXClosingElement {
    #[serde(default)]
    pub span: Span,
    pub name: JSXElementName,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXAttr {
    #[serde(default)]
    pub span: Span,
    pub name: JSXAttrName,
    #[serde(default)]
    pub value: Option<JSXAttrValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXAttrName {
    #[serde(rename = "Identifier")]
    Ident(Ident),
    #[serde(rename = "JSXNamespacedName")]
    JSXNamespacedName(JSXNamespacedName),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXAttrValue {
    #[serde(rename = "JSXExpressionContainer")]
    JSXExprContainer(JSXExprContainer),
    #[serde(rename = "JSXElement")]
    JSXElement(Box<JSXElement>),
    #[serde(rename = "JSXFragment")]
    JSXFragment(JSXFragment),
    #[serde(untagged)]
    Lit(Box<Expr>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXText {
    #[serde(default)]
    pub span: Span,
    pub value: String,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXElement {
    #[serde(default)]
    pub span: Span,
    pub opening: JSXOpeningElement,
    #[serde(default)]
    pub children: Vec<JSXElementChild>,
    #[serde(default)]
    pub closing: Option<JSXClosingElement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXElementChild {
    #[serde(rename = "JSXText")]
    JSXText(JSXText),
    #[serde(rename = "JSXExpressionContainer")]
    JSXExprContainer(JSXExprContainer),
    #[serde(rename = "JSXSpreadChild")]
    JSXSpreadChild(JSXSpreadChild),
    #[serde(rename = "JSXElement")]
    JSXElement(Box<JSXElement>),
    #[serde(rename = "JSXFragment")]
    JSXFragment(JSXFragment),
}

impl Spanned for JSXElementChild {
    fn span(&self) -> Span {
        match self {
            JSXElementChild::JSXText(n) => n.span,
            JSXElementChild::JSXExprContainer(n) => n.span,
            JSXElementChild::JSXSpreadChild(n) => n.span,
            JSXElementChild::JSXElement(n) => n.span,
            JSXElementChild::JSXFragment(n) => n.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JSXFragment {
    #[serde(default)]
    pub span: Span,
    pub opening: JSXOpeningFragment,
    #[serde(default)]
    pub children: Vec<JSXElementChild>,
    pub closing: JSXClosingFragment,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JSXOpeningFragment {
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JSXClosingFragment {
    #[serde(default)]
    pub span: Span,
}

impl_spanned!(
    JSXMemberExpr,
    JSXNamespacedName,
    JSXEmptyExpr,
    JSXExprContainer,
    JSXSpreadChild,
    JSXOpeningElement,
    JSXClosingElement,
    JSXAttr,
    JSXText,
    JSXElement,
    JSXFragment,
    JSXOpeningFragment,
    JSXClosingFragment,
);
