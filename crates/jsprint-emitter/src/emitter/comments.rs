use super::Printer;
use jsprint_common::{CommentKind, Span};

impl<'a> Printer<'a> {
    /// Write the comments attached to the start of `span`, once per position.
    ///
    /// Only formatted output carries comments, and synthesized nodes have
    /// no source position to look them up by.
    pub(super) fn emit_leading_comments(&mut self, span: Span) {
        if !self.is_pretty() || span.is_synthesized() {
            return;
        }
        let Some(comments) = self.comments else {
            return;
        };
        if !comments.has_leading(span.start) || !self.emitted_comments.insert(span.start) {
            return;
        }

        for comment in comments.leading(span.start) {
            self.write(&comment.text);
            match comment.kind {
                CommentKind::Line => self.write_line(),
                CommentKind::Block => self.write_formatting_space(),
            }
        }
    }
}
