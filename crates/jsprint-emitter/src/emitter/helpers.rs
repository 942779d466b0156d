use super::Printer;
use crate::error::EmitResult;
use crate::printer::EmitMark;
use crate::spacing::LeadingToken;
use jsprint_common::Span;

impl<'a> Printer<'a> {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    /// Write text to output.
    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    /// Write a mandatory space.
    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    /// Write a space in formatted mode only.
    pub(super) fn write_formatting_space(&mut self) {
        self.writer.write_formatting_space();
    }

    /// Write a newline in formatted mode only.
    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn write_semicolon(&mut self) {
        self.writer.write(";");
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) -> EmitResult {
        self.writer.decrease_indent()
    }

    #[inline]
    pub(super) fn is_pretty(&self) -> bool {
        self.writer.is_pretty()
    }

    /// Separator between a keyword and the node after it: mandatory when
    /// the node begins with an identifier character, cosmetic otherwise.
    pub(super) fn write_space_before<N: LeadingToken + ?Sized>(&mut self, next: &N) {
        if next.starts_with_alpha_num() {
            self.write_space();
        } else {
            self.write_formatting_space();
        }
    }

    /// `keyword` followed by the separator `next` needs.
    pub(super) fn write_keyword_before<N: LeadingToken + ?Sized>(&mut self, keyword: &str, next: &N) {
        self.write(keyword);
        self.write_space_before(next);
    }

    // =========================================================================
    // Position Marks
    // =========================================================================

    /// Record where the node with `span` starts in the output.
    pub(super) fn record_mark(&mut self, span: Span) {
        if !self.options.record_positions {
            return;
        }
        self.marks.push(EmitMark {
            span,
            generated: self.writer.position(),
        });
    }
}
