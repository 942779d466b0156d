//! Comment Preservation
//!
//! Comments are not part of the syntax tree, so they travel next to it in a
//! side table keyed by the byte offset of the token they precede. The printer
//! looks up that table when it is about to emit a list item starting at the
//! same offset.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A range representing a comment in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRange {
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset)
    pub end: u32,
    /// Whether this is a `/* */` comment
    pub is_multi_line: bool,
    /// Whether a line terminator directly follows the comment
    pub has_trailing_new_line: bool,
}

impl CommentRange {
    pub fn new(pos: u32, end: u32, is_multi_line: bool, has_trailing_new_line: bool) -> Self {
        CommentRange {
            pos,
            end,
            is_multi_line,
            has_trailing_new_line,
        }
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.pos as usize..self.end as usize).unwrap_or("")
    }
}

/// Extract all comment ranges from source text.
///
/// Quoted string, template literal and regular expression bodies are
/// skipped so `//` inside `'http://x'` or `/'/` is not taken for a comment
/// or a quote. A `/` starts a regular expression when the previous
/// significant byte cannot end an operand.
pub fn get_comment_ranges(source: &str) -> Vec<CommentRange> {
    let mut comments = Vec::new();
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        match bytes[pos] {
            quote @ (b'\'' | b'"' | b'`') => {
                pos += 1;
                while pos < len && bytes[pos] != quote {
                    if bytes[pos] == b'\\' {
                        pos += 1;
                    }
                    pos += 1;
                }
                pos += 1;
            }
            b'/' if pos + 1 < len && bytes[pos + 1] == b'/' => {
                let start = pos as u32;
                pos = memchr::memchr2(b'\n', b'\r', &bytes[pos..]).map_or(len, |off| pos + off);
                comments.push(CommentRange::new(start, pos as u32, false, pos < len));
            }
            b'/' if pos + 1 < len && bytes[pos + 1] == b'*' => {
                let start = pos as u32;
                pos = memchr::memmem::find(&bytes[pos + 2..], b"*/").map_or(len, |off| pos + 2 + off + 2);
                let has_trailing_new_line = pos < len && matches!(bytes[pos], b'\n' | b'\r');
                comments.push(CommentRange::new(start, pos as u32, true, has_trailing_new_line));
            }
            b'/' if regex_allowed(&bytes[..pos]) => pos = skip_regex(bytes, pos + 1),
            _ => pos += 1,
        }
    }

    comments
}

/// Whether a `/` following `before` opens a regular expression rather than
/// a division.
fn regex_allowed(before: &[u8]) -> bool {
    match before.iter().rev().find(|b| !b.is_ascii_whitespace()) {
        None => true,
        Some(prev) => b"(,=:[!&|?{};+-*%<>~^".contains(prev),
    }
}

/// Position just past the regular expression body starting at `pos`.
/// Stops at a line end for unterminated bodies.
fn skip_regex(bytes: &[u8], mut pos: usize) -> usize {
    let mut in_class = false;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 1,
            b'[' => in_class = true,
            b']' => in_class = false,
            b'/' if !in_class => return pos + 1,
            b'\n' | b'\r' => return pos,
            _ => {}
        }
        pos += 1;
    }
    pos
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// text`
    Line,
    /// `/* text */`
    Block,
}

/// A comment with its full text, delimiters included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    pub fn line(text: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Line,
            text: text.into(),
        }
    }

    pub fn block(text: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Block,
            text: text.into(),
        }
    }
}

/// Leading comments keyed by the byte offset of the token they precede.
#[derive(Clone, Debug, Default)]
pub struct Comments {
    leading: FxHashMap<u32, Vec<Comment>>,
}

impl Comments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from source text: every comment is attached to the
    /// offset of the first non-whitespace, non-comment byte following it.
    pub fn from_source(source: &str) -> Self {
        let bytes = source.as_bytes();
        let ranges = get_comment_ranges(source);
        let mut comments = Comments::new();

        for (i, range) in ranges.iter().enumerate() {
            let mut next = range.end as usize;
            loop {
                while next < bytes.len() && bytes[next].is_ascii_whitespace() {
                    next += 1;
                }
                // A directly following comment shares the same anchor.
                match ranges[i + 1..].iter().find(|r| r.pos as usize == next) {
                    Some(following) => next = following.end as usize,
                    None => break,
                }
            }
            let comment = Comment {
                kind: if range.is_multi_line {
                    CommentKind::Block
                } else {
                    CommentKind::Line
                },
                text: range.get_text(source).to_string(),
            };
            comments.add_leading(next as u32, comment);
        }

        comments
    }

    pub fn add_leading(&mut self, pos: u32, comment: Comment) {
        self.leading.entry(pos).or_default().push(comment);
    }

    pub fn leading(&self, pos: u32) -> &[Comment] {
        self.leading.get(&pos).map_or(&[], Vec::as_slice)
    }

    pub fn has_leading(&self, pos: u32) -> bool {
        self.leading.contains_key(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty()
    }

    /// Number of comments in the table.
    pub fn len(&self) -> usize {
        self.leading.values().map(Vec::len).sum()
    }
}
