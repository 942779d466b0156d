//! Common types shared by the jsprint crates.
//!
//! This crate provides the foundational types every other crate builds on:
//! - Source spans with provenance (`Span`, `Loc`, `LineCol`, `Spanned`)
//! - Comment extraction and the per-position comment side table (`Comments`)

// Span - Source location tracking (byte offsets, lines, syntax context)
pub mod span;
pub use span::{LineCol, Loc, Span, Spanned};

// Comment parsing utilities and the leading-comment table
pub mod comments;
pub use comments::{Comment, CommentKind, CommentRange, Comments};
