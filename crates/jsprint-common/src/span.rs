//! Source spans and node provenance.
//!
//! Every node handed to the printer carries a [`Span`]: byte offsets into the
//! original text, the line/column of both ends, and a syntax context. A
//! context of `0` marks a node taken verbatim from source; any other value
//! marks a node synthesized by an upstream pass, whose line information cannot
//! be trusted for formatting decisions.

use serde::{Deserialize, Serialize};

/// A line/column pair. Lines are 1-based in parser output; `0` only appears in
/// dummy spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub const fn new(line: u32, column: u32) -> Self {
        LineCol { line, column }
    }
}

/// Start and end line/column of a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loc {
    pub start: LineCol,
    pub end: LineCol,
}

/// Source location of a node.
///
/// Spans are immutable once attached; the printer only reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset.
    pub start: u32,
    /// End byte offset (exclusive).
    pub end: u32,
    #[serde(default)]
    pub loc: Loc,
    /// Syntax context. `0` = original, anything else = synthesized.
    #[serde(default, alias = "context")]
    pub ctxt: u32,
}

impl Span {
    /// The span used for nodes without location information.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        loc: Loc {
            start: LineCol::new(0, 0),
            end: LineCol::new(0, 0),
        },
        ctxt: 0,
    };

    /// A span for an original node covering `start..end` on the given lines.
    pub const fn new(start: u32, end: u32, start_line: u32, end_line: u32) -> Self {
        Span {
            start,
            end,
            loc: Loc {
                start: LineCol::new(start_line, 0),
                end: LineCol::new(end_line, 0),
            },
            ctxt: 0,
        }
    }

    /// A span marking a node inserted by a transform pass.
    pub const fn synthesized() -> Self {
        Span {
            start: 0,
            end: 0,
            loc: Loc {
                start: LineCol::new(0, 0),
                end: LineCol::new(0, 0),
            },
            ctxt: 1,
        }
    }

    /// Returns a copy of this span with the given syntax context.
    pub const fn with_ctxt(self, ctxt: u32) -> Self {
        Span { ctxt, ..self }
    }

    #[inline]
    pub const fn is_synthesized(&self) -> bool {
        self.ctxt != 0
    }

    #[inline]
    pub const fn start_line(&self) -> u32 {
        self.loc.start.line
    }

    #[inline]
    pub const fn end_line(&self) -> u32 {
        self.loc.end.line
    }

    /// True iff both spans start on the same source line.
    #[inline]
    pub const fn is_on_same_line(&self, other: &Span) -> bool {
        self.loc.start.line == other.loc.start.line
    }

    /// True iff the span starts and ends on one line.
    #[inline]
    pub const fn is_on_single_line(&self) -> bool {
        self.loc.start.line == self.loc.end.line
    }
}

/// Anything that can report its source span.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Spanned + ?Sized> Spanned for &T {
    fn span(&self) -> Span {
        (**self).span()
    }
}

impl<T: Spanned + ?Sized> Spanned for Box<T> {
    fn span(&self) -> Span {
        (**self).span()
    }
}

/// Absent list slots (array holes) have no source position of their own and
/// are treated as synthesized.
impl<T: Spanned> Spanned for Option<T> {
    fn span(&self) -> Span {
        match self {
            Some(node) => node.span(),
            None => Span::synthesized(),
        }
    }
}
