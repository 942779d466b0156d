//! Binding and assignment-target patterns.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Ident};
use crate::{impl_spanned, join_spans};
use crate::prop::PropName;
use crate::typescript::TsNode;
use jsprint_common::{Span, Spanned};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pat {
    #[serde(rename = "Identifier")]
    Ident(Ident),
    #[serde(rename = "ArrayPattern")]
    Array(ArrayPat),
    #[serde(rename = "RestElement")]
    Rest(RestPat),
    #[serde(rename = "ObjectPattern")]
    Object(ObjectPat),
    #[serde(rename = "AssignmentPattern")]
    Assign(AssignPat),
    /// Assignment targets such as `a.b` in `a.b = c`.
    #[serde(untagged)]
    Expr(Box<Expr>),
}

impl Spanned for Pat {
    fn span(&self) -> Span {
        match self {
            Pat::Ident(n) => n.span,
            Pat::Array(n) => n.span,
            Pat::Rest(n) => n.span,
            Pat::Object(n) => n.span,
            Pat::Assign(n) => n.span,
            Pat::Expr(n) => n.span(),
        }
    }
}

impl From<Ident> for Pat {
    fn from(ident: Ident) -> Self {
        Pat::Ident(ident)
    }
}

/// `[a, , ...b]`. `None` elements are holes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayPat {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub elements: Vec<Option<Pat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPat {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub props: Vec<ObjectPatProp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
}

/// `left = right` default value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPat {
    #[serde(default)]
    pub span: Span,
    pub left: Box<Pat>,
    pub right: Box<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestPat {
    #[serde(default)]
    pub span: Span,
    /// Span of the `...` token.
    #[serde(default)]
    pub rest: Span,
    pub argument: Box<Pat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatProp {
    #[serde(rename = "KeyValuePatternProperty")]
    KeyValue(KeyValuePatProp),
    #[serde(rename = "AssignmentPatternProperty")]
    Assign(AssignPatProp),
    #[serde(rename = "RestElement")]
    Rest(RestPat),
}

impl Spanned for ObjectPatProp {
    fn span(&self) -> Span {
        match self {
            ObjectPatProp::KeyValue(n) => n.span(),
            ObjectPatProp::Assign(n) => n.span,
            ObjectPatProp::Rest(n) => n.span,
        }
    }
}

/// `{ key: value }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePatProp {
    pub key: PropName,
    pub value: Box<Pat>,
}

impl Spanned for KeyValuePatProp {
    fn span(&self) -> Span {
        join_spans(self.key.span(), self.value.span())
    }
}

/// `{ key }` or `{ key = value }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignPatProp {
    #[serde(default)]
    pub span: Span,
    pub key: Ident,
    #[serde(default)]
    pub value: Option<Box<Expr>>,
}

impl_spanned!(ArrayPat, ObjectPat, AssignPat, RestPat, AssignPatProp);
