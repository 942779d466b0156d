//! Public printing API.
//!
//! `print` renders a whole program; `print_stmt` and `print_expr` render
//! fragments. All of them build a fresh `Printer`, run it to completion and
//! either return the finished text or the first error hit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jsprint_ast::{Expr, Program, Stmt};
use jsprint_common::{Comments, Span};

use crate::error::EmitResult;
use crate::source_writer::SourcePosition;

pub use crate::emitter::Printer;

/// Printer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintOptions {
    /// Formatted (pretty) output. When false, optional whitespace, line
    /// breaks and comments are dropped.
    pub formatted: bool,
    /// Spaces per indentation level in formatted mode.
    pub indent_width: u32,
    /// Record an `EmitMark` for every statement, expression and pattern.
    pub record_positions: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            formatted: true,
            indent_width: 4,
            record_positions: false,
        }
    }
}

impl PrintOptions {
    /// Minified output.
    pub fn compact() -> Self {
        PrintOptions {
            formatted: false,
            ..Default::default()
        }
    }

    pub fn formatted() -> Self {
        Self::default()
    }

    pub fn with_positions(mut self) -> Self {
        self.record_positions = true;
        self
    }

    fn mode(&self) -> &'static str {
        if self.formatted { "formatted" } else { "compact" }
    }
}

/// Where a node started in the generated text. Consumed by source-map
/// builders; the printer itself builds no mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmitMark {
    pub span: Span,
    pub generated: SourcePosition,
}

/// Result of a successful print.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrintOutput {
    pub code: String,
    /// Empty unless `record_positions` was set.
    pub marks: Vec<EmitMark>,
}

/// Print a whole program.
pub fn print(program: &Program, options: PrintOptions) -> EmitResult<PrintOutput> {
    let mode = options.mode();
    let mut printer = Printer::new(options);
    printer.emit_program(program)?;
    let output = printer.finish();
    debug!(
        mode,
        items = program_len(program),
        len = output.code.len(),
        "printed program"
    );
    Ok(output)
}

/// Print a program, re-emitting `comments` in formatted mode.
pub fn print_with_comments(
    program: &Program,
    comments: &Comments,
    options: PrintOptions,
) -> EmitResult<PrintOutput> {
    let mode = options.mode();
    let mut printer = Printer::with_comments(options, comments);
    printer.emit_program(program)?;
    let output = printer.finish();
    debug!(
        mode,
        items = program_len(program),
        comments = comments.len(),
        len = output.code.len(),
        "printed program with comments"
    );
    Ok(output)
}

/// Print a program and return only the text.
pub fn print_to_string(program: &Program, options: PrintOptions) -> EmitResult<String> {
    print(program, options).map(|output| output.code)
}

/// Print a single statement.
pub fn print_stmt(stmt: &Stmt, options: PrintOptions) -> EmitResult<String> {
    let mode = options.mode();
    let mut printer = Printer::new(options);
    printer.emit_stmt(stmt)?;
    let code = printer.finish().code;
    debug!(mode, len = code.len(), "printed statement");
    Ok(code)
}

/// Print a single expression.
pub fn print_expr(expr: &Expr, options: PrintOptions) -> EmitResult<String> {
    let mode = options.mode();
    let mut printer = Printer::new(options);
    printer.emit_expr(expr)?;
    let code = printer.finish().code;
    debug!(mode, len = code.len(), "printed expression");
    Ok(code)
}

fn program_len(program: &Program) -> usize {
    match program {
        Program::Module(module) => module.body.len(),
        Program::Script(script) => script.body.len(),
    }
}
