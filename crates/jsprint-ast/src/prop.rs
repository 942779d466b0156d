//! Object literal properties and property names.

use serde::{Deserialize, Serialize};

use crate::decl::Function;
use crate::expr::{Expr, Ident, SpreadElement};
use crate::{impl_spanned, join_spans};
use crate::lit::{Number, Str};
use crate::pat::Pat;
use crate::stmt::BlockStmt;
use jsprint_common::{Span, Spanned};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropOrSpread {
    #[serde(rename = "SpreadElement")]
    Spread(SpreadElement),
    #[serde(untagged)]
    Prop(Box<Prop>),
}

impl Spanned for PropOrSpread {
    fn span(&self) -> Span {
        match self {
            PropOrSpread::Spread(s) => s.span(),
            PropOrSpread::Prop(p) => p.span(),
        }
    }
}

impl From<Prop> for PropOrSpread {
    fn from(prop: Prop) -> Self {
        PropOrSpread::Prop(Box::new(prop))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Prop {
    /// Shorthand `{ a }`.
    #[serde(rename = "Identifier")]
    Shorthand(Ident),
    #[serde(rename = "KeyValueProperty")]
    KeyValue(KeyValueProp),
    /// `{ a = 1 }`, only valid as an assignment target.
    #[serde(rename = "AssignmentProperty")]
    Assign(AssignProp),
    #[serde(rename = "GetterProperty")]
    Getter(GetterProp),
    #[serde(rename = "SetterProperty")]
    Setter(SetterProp),
    #[serde(rename = "MethodProperty")]
    Method(MethodProp),
}

impl Spanned for Prop {
    fn span(&self) -> Span {
        match self {
            Prop::Shorthand(n) => n.span,
            Prop::KeyValue(n) => join_spans(n.key.span(), n.value.span()),
            Prop::Assign(n) => join_spans(n.key.span, n.value.span()),
            Prop::Getter(n) => n.span,
            Prop::Setter(n) => n.span,
            Prop::Method(n) => n.function.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyValueProp {
    pub key: PropName,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignProp {
    pub key: Ident,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetterProp {
    #[serde(default)]
    pub span: Span,
    pub key: PropName,
    #[serde(default)]
    pub body: Option<BlockStmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetterProp {
    #[serde(default)]
    pub span: Span,
    pub key: PropName,
    pub param: Pat,
    #[serde(default)]
    pub body: Option<BlockStmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodProp {
    pub key: PropName,
    #[serde(flatten)]
    pub function: Function,
}

/// Property key. Anything other than an identifier, string or number is a
/// computed key and prints as `[expr]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropName {
    #[serde(rename = "Identifier")]
    Ident(Ident),
    #[serde(rename = "StringLiteral")]
    Str(Str),
    #[serde(rename = "NumericLiteral")]
    Num(Number),
    #[serde(untagged)]
    Computed(Box<Expr>),
}

impl Spanned for PropName {
    fn span(&self) -> Span {
        match self {
            PropName::Ident(n) => n.span,
            PropName::Str(n) => n.span,
            PropName::Num(n) => n.span,
            PropName::Computed(n) => n.span(),
        }
    }
}

impl From<Ident> for PropName {
    fn from(ident: Ident) -> Self {
        PropName::Ident(ident)
    }
}

impl_spanned!(GetterProp, SetterProp);
