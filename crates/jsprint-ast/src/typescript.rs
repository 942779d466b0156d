//! Opaque TypeScript payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::expr::Expr;
use crate::impl_spanned;
use jsprint_common::Span;

/// A TypeScript-only node kept as raw JSON.
///
/// The node's kind is carried by the enclosing variant (or lost, for type
/// annotations, which are never printed). Only the span is decoded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TsNode {
    #[serde(default)]
    pub span: Span,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TsNode {
    pub fn new(span: Span) -> Self {
        TsNode {
            span,
            fields: Map::new(),
        }
    }
}

impl_spanned!(TsNode);

/// A TypeScript expression wrapper (`x as T`, `<T>x`, `x!`) whose operand is
/// decoded so the printer can still inspect it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TsExprNode {
    #[serde(default)]
    pub span: Span,
    pub expression: Box<Expr>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl_spanned!(TsExprNode);
