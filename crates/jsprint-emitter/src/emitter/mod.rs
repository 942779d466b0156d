//! The node dispatcher.
//!
//! `Printer` walks a borrowed tree and renders it into its `SourceWriter`.
//! The implementation is split across submodules by syntactic category, each
//! adding `emit_*` methods to the same `impl<'a> Printer<'a>`:
//!
//! - `statements`: statements and variable/function/class declarations
//! - `expressions`: operators, calls, members and the other expression forms
//! - `expressions_literals`: array and object literals and their properties
//! - `literals`: identifiers, strings, numbers, regexes, templates
//! - `functions`: functions, arrows, parameters, classes and class members
//! - `binding_patterns`: destructuring patterns
//! - `module_emission`: import and export declarations
//! - `list`: the generic list algorithm driven by `ListFormat`
//! - `comments`: leading comment emission
//! - `helpers`: output delegation to the writer
//!
//! Every `emit_*` returns `EmitResult`; the first error aborts printing and
//! no partial output is surfaced.

mod binding_patterns;
mod comments;
mod expressions;
mod expressions_literals;
mod functions;
mod helpers;
mod list;
mod literals;
mod module_emission;
mod statements;

use rustc_hash::FxHashSet;

use jsprint_ast::{ModuleItem, Program};
use jsprint_common::Comments;

use crate::error::EmitResult;
use crate::list_format::ListFormat;
use crate::printer::{EmitMark, PrintOptions, PrintOutput};
use crate::source_writer::SourceWriter;

pub struct Printer<'a> {
    writer: SourceWriter,
    options: PrintOptions,
    /// Leading comments to re-emit in formatted mode.
    comments: Option<&'a Comments>,
    /// Positions whose leading comments were already written.
    emitted_comments: FxHashSet<u32>,
    marks: Vec<EmitMark>,
}

impl<'a> Printer<'a> {
    pub fn new(options: PrintOptions) -> Self {
        Printer {
            writer: SourceWriter::new(options.formatted, options.indent_width),
            options,
            comments: None,
            emitted_comments: FxHashSet::default(),
            marks: Vec::new(),
        }
    }

    pub fn with_comments(options: PrintOptions, comments: &'a Comments) -> Self {
        Printer {
            comments: Some(comments),
            ..Self::new(options)
        }
    }

    /// Consume the printer, returning the generated code and position marks.
    pub fn finish(self) -> PrintOutput {
        PrintOutput {
            code: self.writer.into_string(),
            marks: self.marks,
        }
    }

    /// Text written so far.
    pub fn output(&self) -> &str {
        self.writer.as_str()
    }

    // =========================================================================
    // Program
    // =========================================================================

    pub fn emit_program(&mut self, program: &Program) -> EmitResult {
        match program {
            Program::Module(module) => {
                self.emit_interpreter(module.interpreter.as_deref());
                self.emit_list(
                    module.span,
                    Some(module.body.as_slice()),
                    ListFormat::SOURCE_FILE_STATEMENTS,
                    Self::emit_module_item,
                )
            }
            Program::Script(script) => {
                self.emit_interpreter(script.interpreter.as_deref());
                self.emit_list(
                    script.span,
                    Some(script.body.as_slice()),
                    ListFormat::SOURCE_FILE_STATEMENTS,
                    Self::emit_stmt,
                )
            }
        }
    }

    pub fn emit_module_item(&mut self, item: &ModuleItem) -> EmitResult {
        match item {
            ModuleItem::ModuleDecl(decl) => self.emit_module_decl(decl),
            ModuleItem::Stmt(stmt) => self.emit_stmt(stmt),
        }
    }

    /// `#!interpreter`, terminated by a newline in every mode. In formatted
    /// mode the statement list's leading line break supplies it.
    fn emit_interpreter(&mut self, interpreter: Option<&str>) {
        let Some(interpreter) = interpreter else {
            return;
        };
        self.write("#!");
        self.write(interpreter);
        if !self.writer.is_pretty() {
            self.writer.write_hard_line();
        }
    }
}
