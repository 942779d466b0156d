use std::fmt::Write as _;

use super::Printer;
use crate::error::{EmitError, EmitResult};
use jsprint_ast::{Expr, Ident, NodeKind, Number, PrivateName, Regex, Str, TplElement};

impl<'a> Printer<'a> {
    // =========================================================================
    // Identifiers
    // =========================================================================

    pub(super) fn emit_ident(&mut self, ident: &Ident) -> EmitResult {
        if ident.type_annotation.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }
        self.write(&ident.value);
        if ident.optional {
            self.write("?");
        }
        Ok(())
    }

    pub(super) fn emit_private_name(&mut self, name: &PrivateName) -> EmitResult {
        self.write("#");
        self.emit_ident(&name.id)
    }

    // =========================================================================
    // Literals
    // =========================================================================

    /// String literal with the quote that needs the fewest escapes.
    pub(super) fn emit_str(&mut self, s: &Str) {
        let quote = choose_quote(&s.value);
        let mut buf = String::with_capacity(s.value.len() + 2);
        buf.push(quote);
        escape_string_into(&mut buf, &s.value, quote);
        buf.push(quote);
        self.write(&buf);
    }

    pub(super) fn emit_number(&mut self, n: &Number) {
        self.write(&format_number(n.value));
    }

    /// Regex pattern and flags are raw source and written verbatim.
    pub(super) fn emit_regex(&mut self, n: &Regex) {
        self.write("/");
        self.write(&n.pattern.value);
        self.write("/");
        if let Some(flags) = &n.flags {
            self.write(&flags.value);
        }
    }

    /// Template body: `quasi ${expr} quasi ... quasi`, quasis printed raw.
    pub(super) fn emit_tpl(&mut self, quasis: &[TplElement], expressions: &[Box<Expr>]) -> EmitResult {
        if quasis.len() != expressions.len() + 1 {
            return Err(EmitError::contract(format!(
                "template literal has {} quasis for {} expressions",
                quasis.len(),
                expressions.len()
            )));
        }

        self.write("`");
        for (i, quasi) in quasis.iter().enumerate() {
            self.write(&quasi.raw.value);
            if let Some(expr) = expressions.get(i) {
                self.write("${");
                self.emit_expr(expr)?;
                self.write("}");
            }
        }
        self.write("`");
        Ok(())
    }
}

/// `'` unless the value contains one and no `"`.
pub(super) fn choose_quote(value: &str) -> char {
    let bytes = value.as_bytes();
    if memchr::memchr(b'\'', bytes).is_some() && memchr::memchr(b'"', bytes).is_none() {
        '"'
    } else {
        '\''
    }
}

/// Append `s` to `buf` escaped for a literal delimited by `quote`.
pub(super) fn escape_string_into(buf: &mut String, s: &str, quote: char) {
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\\' => buf.push_str("\\\\"),
            // `\0` followed by a digit would read as a legacy octal escape.
            '\0' if chars.peek().is_some_and(char::is_ascii_digit) => buf.push_str("\\x00"),
            '\0' => buf.push_str("\\0"),
            '\u{2028}' => buf.push_str("\\u2028"),
            '\u{2029}' => buf.push_str("\\u2029"),
            c if c == quote => {
                buf.push('\\');
                buf.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(buf, "\\u{:04X}", c as u32);
            }
            c => buf.push(c),
        }
    }
}

/// Shortest decimal text that reads back as `value`.
pub(super) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs = value.abs();
    if abs >= 1e21 || (abs > 0.0 && abs < 1e-6) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}
