//! Generic list emission.
//!
//! One routine prints every delimited sequence in the grammar. The
//! `ListFormat` decides brackets, delimiters, indentation and whether items
//! go on separate lines; the caller supplies the per-item emitter.

use super::Printer;
use crate::error::EmitResult;
use crate::list_format::{Delimiter, LineMode, ListFormat};
use jsprint_common::{Span, Spanned};

impl<'a> Printer<'a> {
    /// Emit `items` under `format`.
    ///
    /// `parent` is the span of the node owning the list; line preservation
    /// compares it against the first and last items. `None` means the list is
    /// absent (as opposed to empty), which only matters for
    /// `optional_if_absent` policies.
    pub(super) fn emit_list<T, F>(
        &mut self,
        parent: Span,
        items: Option<&[T]>,
        format: ListFormat,
        mut emit: F,
    ) -> EmitResult
    where
        T: Spanned,
        F: FnMut(&mut Self, &T) -> EmitResult,
    {
        let format = if self.is_pretty() {
            format
        } else {
            format.collapsed()
        };

        if items.is_none() && format.optional_if_absent {
            return Ok(());
        }
        let items = items.unwrap_or_default();
        if items.is_empty() && format.optional_if_empty {
            return Ok(());
        }

        if let Some(open) = format.brackets.open() {
            self.write(open);
        }

        let (Some(first), Some(last)) = (items.first(), items.last()) else {
            if format.is_multi_line() {
                self.write_line();
            } else if format.space_between_braces && !format.no_space_if_empty {
                self.write_formatting_space();
            }
            if let Some(close) = format.brackets.close() {
                self.write(close);
            }
            return Ok(());
        };

        if should_write_leading_line_break(parent, first.span(), &format) {
            self.write_line();
        } else if format.space_between_braces {
            self.write_formatting_space();
        }

        if format.indented {
            self.increase_indent();
        }

        let mut previous: Option<Span> = None;
        for item in items {
            let span = item.span();
            if let Some(previous) = previous {
                if format.delimiter != Delimiter::None {
                    self.write(format.delimiter.as_str());
                }
                if should_write_separating_line_break(previous, span, &format) {
                    self.write_line();
                } else if format.space_between_siblings {
                    self.write_formatting_space();
                }
            }
            if !format.no_intervening_comments {
                self.emit_leading_comments(span);
            }
            emit(self, item)?;
            previous = Some(span);
        }

        if format.indented {
            self.decrease_indent()?;
        }

        if should_write_closing_line_break(parent, last.span(), &format) {
            self.write_line();
        } else if format.space_between_braces {
            self.write_formatting_space();
        }

        if let Some(close) = format.brackets.close() {
            self.write(close);
        }
        Ok(())
    }
}

/// Line break after the opening bracket.
fn should_write_leading_line_break(parent: Span, first: Span, format: &ListFormat) -> bool {
    match format.lines {
        LineMode::MultiLine => true,
        LineMode::PreserveLines => {
            if format.prefer_new_line || parent.is_synthesized() || first.is_synthesized() {
                format.prefer_new_line
            } else {
                !parent.is_on_same_line(&first)
            }
        }
        LineMode::SingleLine => false,
    }
}

/// Line break between two siblings.
fn should_write_separating_line_break(previous: Span, next: Span, format: &ListFormat) -> bool {
    match format.lines {
        LineMode::MultiLine => true,
        LineMode::PreserveLines => {
            if format.prefer_new_line || previous.is_synthesized() || next.is_synthesized() {
                format.prefer_new_line
            } else {
                !previous.is_on_same_line(&next)
            }
        }
        LineMode::SingleLine => false,
    }
}

/// Line break before the closing bracket.
fn should_write_closing_line_break(parent: Span, last: Span, format: &ListFormat) -> bool {
    match format.lines {
        LineMode::MultiLine => !format.no_trailing_new_line,
        LineMode::PreserveLines => {
            if format.prefer_new_line || parent.is_synthesized() || last.is_synthesized() {
                format.prefer_new_line
            } else {
                !parent.is_on_same_line(&last)
            }
        }
        LineMode::SingleLine => false,
    }
}
