//! Literal nodes.

use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::impl_spanned;
use jsprint_common::Span;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Str {
    #[serde(default)]
    pub span: Span,
    /// Cooked value, escapes already resolved.
    pub value: String,
    #[serde(default)]
    pub has_escape: bool,
}

impl Str {
    pub fn new(value: impl Into<String>) -> Self {
        Str {
            span: Span::DUMMY,
            value: value.into(),
            has_escape: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bool {
    #[serde(default)]
    pub span: Span,
    pub value: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Null {
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Number {
    #[serde(default)]
    pub span: Span,
    pub value: f64,
}

impl Number {
    pub fn new(value: f64) -> Self {
        Number {
            span: Span::DUMMY,
            value,
        }
    }
}

/// `/pattern/flags`. Both parts are raw source text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regex {
    #[serde(default)]
    pub span: Span,
    pub pattern: Str,
    #[serde(default)]
    pub flags: Option<Str>,
}

/// Template literal. Well-formed templates have exactly one more quasi than
/// expressions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tpl {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub expressions: Vec<Box<Expr>>,
    #[serde(default)]
    pub quasis: Vec<TplElement>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TplElement {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub tail: bool,
    #[serde(default)]
    pub cooked: Option<Str>,
    /// Raw text between the delimiters, printed verbatim.
    pub raw: Str,
}

impl TplElement {
    pub fn new(raw: impl Into<String>) -> Self {
        TplElement {
            span: Span::DUMMY,
            tail: false,
            cooked: None,
            raw: Str::new(raw),
        }
    }
}

impl_spanned!(Str, Bool, Null, Number, Regex, Tpl, TplElement);
