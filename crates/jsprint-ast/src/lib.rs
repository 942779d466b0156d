//! ECMAScript syntax tree consumed by the jsprint printer.
//!
//! The node set is closed: every kind is a variant of one of the sum types
//! below, so adding a kind forces every exhaustive `match` in the printer to
//! handle it. Nodes (de)serialize from the tagged JSON shape produced by the
//! upstream parser, where each node object carries its kind in `"type"`.
//!
//! TypeScript-only payloads (type annotations, type parameters, interface and
//! enum bodies) are kept opaque in [`TsNode`] because the printer never renders
//! them.

pub mod decl;
pub mod expr;
pub mod jsx;
pub mod kind;
pub mod lit;
pub mod module;
pub mod ops;
pub mod pat;
pub mod prop;
pub mod stmt;
pub mod typescript;

pub use decl::*;
pub use expr::*;
pub use jsx::*;
pub use kind::NodeKind;
pub use lit::*;
pub use module::*;
pub use ops::*;
pub use pat::*;
pub use prop::*;
pub use stmt::*;
pub use typescript::{TsExprNode, TsNode};

pub use jsprint_common::{Span, Spanned};

/// Implements [`Spanned`] for structs carrying a `span` field.
macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl jsprint_common::Spanned for $ty {
                #[inline]
                fn span(&self) -> jsprint_common::Span {
                    self.span
                }
            }
        )*
    };
}
pub(crate) use impl_spanned;

/// Span running from the start of `first` to the end of `last`, for nodes
/// that carry no span of their own.
pub(crate) fn join_spans(first: Span, last: Span) -> Span {
    Span {
        end: last.end,
        loc: jsprint_common::Loc {
            start: first.loc.start,
            end: last.loc.end,
        },
        ctxt: first.ctxt.max(last.ctxt),
        ..first
    }
}
