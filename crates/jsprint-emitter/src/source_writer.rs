//! Output buffer for the printer.
//!
//! `SourceWriter` owns the text being produced, the indentation depth and the
//! generated position of the next byte. It is the only mutable state a
//! `Printer` carries besides its bookkeeping tables.
//!
//! In compact mode optional whitespace (`write_formatting_space`,
//! `write_line`) and indentation are dropped; mandatory spaces are always
//! written.

use serde::Serialize;

use crate::error::{EmitError, EmitResult};

/// A position in the generated output. Line and column are 0-based; columns
/// count UTF-16 code units, the unit source maps use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Byte offset into the output.
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    pretty: bool,
    indent: u32,
    indent_width: u32,
    line: u32,
    column: u32,
    /// Indentation for the current line has not been written yet.
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(pretty: bool, indent_width: u32) -> Self {
        SourceWriter {
            output: String::new(),
            pretty,
            indent: 0,
            indent_width,
            line: 0,
            column: 0,
            at_line_start: true,
        }
    }

    pub fn compact() -> Self {
        Self::new(false, 0)
    }

    pub fn formatted(indent_width: u32) -> Self {
        Self::new(true, indent_width)
    }

    #[inline]
    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }

    // =========================================================================
    // Writing
    // =========================================================================

    /// Append `text` verbatim.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush_indent();
        self.output.push_str(text);
        self.advance(text);
    }

    /// Mandatory space, written in every mode.
    pub fn write_space(&mut self) {
        self.write(" ");
    }

    /// Cosmetic space, formatted mode only.
    pub fn write_formatting_space(&mut self) {
        if self.pretty {
            self.write_space();
        }
    }

    /// Line break, formatted mode only. Never written into an empty buffer.
    pub fn write_line(&mut self) {
        if !self.pretty || self.output.is_empty() {
            return;
        }
        self.output.push('\n');
        self.line += 1;
        self.column = 0;
        self.at_line_start = true;
    }

    /// Line break written in every mode (interpreter directives).
    pub fn write_hard_line(&mut self) {
        self.output.push('\n');
        self.line += 1;
        self.column = 0;
        self.at_line_start = true;
    }

    fn flush_indent(&mut self) {
        if !self.at_line_start {
            return;
        }
        let width = self.pending_indent_width();
        self.at_line_start = false;
        for _ in 0..width {
            self.output.push(' ');
        }
        self.column += width;
    }

    #[inline]
    fn pending_indent_width(&self) -> u32 {
        if self.pretty && self.at_line_start {
            self.indent * self.indent_width
        } else {
            0
        }
    }

    fn advance(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let newlines = memchr::memchr_iter(b'\n', bytes).count() as u32;
        let tail = match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += newlines;
                self.column = 0;
                &text[last + 1..]
            }
            None => text,
        };
        self.column += utf16_len(tail);
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation depth. Underflow is a printer defect.
    pub fn decrease_indent(&mut self) -> EmitResult {
        if self.indent == 0 {
            return Err(EmitError::invariant("indentation decreased below zero"));
        }
        self.indent -= 1;
        Ok(())
    }

    #[inline]
    pub const fn indent(&self) -> u32 {
        self.indent
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Generated position of the next byte, counting indentation that will be
    /// materialised by the next write.
    pub fn position(&self) -> SourcePosition {
        let pending = self.pending_indent_width();
        SourcePosition {
            offset: self.output.len() as u32 + pending,
            line: self.line,
            column: self.column + pending,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn last_char(&self) -> Option<char> {
        self.output.chars().next_back()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

fn utf16_len(text: &str) -> u32 {
    if text.is_ascii() {
        return text.len() as u32;
    }
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

#[cfg(test)]
#[path = "tests/source_writer.rs"]
mod tests;
