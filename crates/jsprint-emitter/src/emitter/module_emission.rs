use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::list_format::ListFormat;
use crate::spacing::expr_stmt_needs_parens;
use jsprint_ast::{
    DefaultDecl, ExportAll, ExportDefaultDecl, ExportDefaultExpr, ExportNamedSpecifier,
    ExportSpecifier, Ident, ImportDecl, ImportNamedSpecifier, ImportSpecifier, ModuleDecl,
    NamedExport, NodeKind, Str,
};
use jsprint_common::Spanned;

impl<'a> Printer<'a> {
    // =========================================================================
    // Module Declarations
    // =========================================================================

    pub(super) fn emit_module_decl(&mut self, decl: &ModuleDecl) -> EmitResult {
        self.record_mark(decl.span());
        match decl {
            ModuleDecl::Import(n) => self.emit_import_decl(n),
            ModuleDecl::ExportDecl(n) => {
                self.write("export");
                self.write_space();
                self.emit_decl(&n.declaration)
            }
            ModuleDecl::ExportNamed(n) => self.emit_named_export(n),
            ModuleDecl::ExportDefaultDecl(n) => self.emit_export_default_decl(n),
            ModuleDecl::ExportDefaultExpr(n) => self.emit_export_default_expr(n),
            ModuleDecl::ExportAll(n) => self.emit_export_all(n),
            ModuleDecl::TsImportEquals(_)
            | ModuleDecl::TsExportAssignment(_)
            | ModuleDecl::TsNamespaceExport(_) => Err(EmitError::unimplemented(decl.kind())),
        }
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// `import def, * as ns from 'm';`, `import def, { a as b } from 'm';`,
    /// or `import 'm';` for side-effect imports.
    fn emit_import_decl(&mut self, n: &ImportDecl) -> EmitResult {
        self.write("import");

        if n.specifiers.is_empty() {
            self.write_formatting_space();
            self.emit_str(&n.source);
            self.write_semicolon();
            return Ok(());
        }

        let mut default = None;
        let mut namespace = None;
        let mut named = Vec::new();
        for (i, specifier) in n.specifiers.iter().enumerate() {
            match specifier {
                ImportSpecifier::Default(s) if i == 0 => default = Some(&s.local),
                ImportSpecifier::Default(_) => {
                    return Err(EmitError::contract(
                        "default import must precede the other import specifiers",
                    ));
                }
                ImportSpecifier::Namespace(s) => namespace = Some(&s.local),
                ImportSpecifier::Named(s) => named.push(s),
            }
        }

        let mut ends_with_ident = false;
        if let Some(local) = default {
            self.write_space();
            self.emit_ident(local)?;
            ends_with_ident = true;
        }
        if let Some(local) = namespace {
            self.write_group_separator(default.is_some());
            self.emit_namespace_clause(local)?;
            ends_with_ident = true;
        }
        if !named.is_empty() {
            self.write_group_separator(default.is_some() || namespace.is_some());
            self.emit_list(
                n.span,
                Some(named.as_slice()),
                ListFormat::NAMED_IMPORTS_OR_EXPORTS_ELEMENTS,
                |p, s| p.emit_import_named_specifier(s),
            )?;
            ends_with_ident = false;
        }

        self.emit_from_clause(&n.source, ends_with_ident);
        self.write_semicolon();
        Ok(())
    }

    fn emit_import_named_specifier(&mut self, n: &ImportNamedSpecifier) -> EmitResult {
        if let Some(imported) = &n.imported {
            self.emit_ident(imported)?;
            self.write_space();
            self.write("as");
            self.write_space();
        }
        self.emit_ident(&n.local)
    }

    // =========================================================================
    // Exports
    // =========================================================================

    /// `export { a, b as c };`, `export * as ns from 'm';`, `export d from 'm';`
    fn emit_named_export(&mut self, n: &NamedExport) -> EmitResult {
        self.write("export");

        let mut default = None;
        let mut namespace = None;
        let mut named = Vec::new();
        for specifier in &n.specifiers {
            match specifier {
                ExportSpecifier::Default(s) => default = Some(&s.exported),
                ExportSpecifier::Namespace(s) => namespace = Some(&s.name),
                ExportSpecifier::Named(s) => named.push(s),
            }
        }

        let mut ends_with_ident = false;
        if let Some(exported) = default {
            self.write_space();
            self.emit_ident(exported)?;
            ends_with_ident = true;
        }
        if let Some(name) = namespace {
            self.write_group_separator(default.is_some());
            self.emit_namespace_clause(name)?;
            ends_with_ident = true;
        }
        // `export {};` when nothing else was written.
        if !named.is_empty() || (default.is_none() && namespace.is_none()) {
            self.write_group_separator(default.is_some() || namespace.is_some());
            self.emit_list(
                n.span,
                Some(named.as_slice()),
                ListFormat::NAMED_IMPORTS_OR_EXPORTS_ELEMENTS,
                |p, s| p.emit_export_named_specifier(s),
            )?;
            ends_with_ident = false;
        }

        if let Some(source) = &n.source {
            self.emit_from_clause(source, ends_with_ident);
        }
        self.write_semicolon();
        Ok(())
    }

    fn emit_export_named_specifier(&mut self, n: &ExportNamedSpecifier) -> EmitResult {
        self.emit_ident(&n.orig)?;
        if let Some(exported) = &n.exported {
            self.write_space();
            self.write("as");
            self.write_space();
            self.emit_ident(exported)?;
        }
        Ok(())
    }

    fn emit_export_default_decl(&mut self, n: &ExportDefaultDecl) -> EmitResult {
        self.write("export");
        self.write_space();
        self.write("default");
        self.write_space();
        match &n.decl {
            DefaultDecl::Class(class) => self.emit_class_expr(class),
            DefaultDecl::Fn(function) => self.emit_fn_expr(function),
            DefaultDecl::TsInterface(_) => {
                Err(EmitError::unimplemented(NodeKind::TsInterfaceDeclaration))
            }
        }
    }

    fn emit_export_default_expr(&mut self, n: &ExportDefaultExpr) -> EmitResult {
        self.write("export");
        self.write_space();
        if expr_stmt_needs_parens(&n.expression) {
            self.write("default");
            self.write_formatting_space();
            self.write("(");
            self.emit_expr(&n.expression)?;
            self.write(")");
        } else {
            self.write_keyword_before("default", &n.expression);
            self.emit_expr(&n.expression)?;
        }
        self.write_semicolon();
        Ok(())
    }

    fn emit_export_all(&mut self, n: &ExportAll) -> EmitResult {
        self.write("export");
        self.write_formatting_space();
        self.write("*");
        self.write_formatting_space();
        self.write("from");
        self.write_formatting_space();
        self.emit_str(&n.source);
        self.write_semicolon();
        Ok(())
    }

    // =========================================================================
    // Shared clauses
    // =========================================================================

    /// `,` between specifier groups, or the gap after the keyword for the
    /// first one.
    fn write_group_separator(&mut self, after_group: bool) {
        if after_group {
            self.write(",");
        }
        self.write_formatting_space();
    }

    /// `* as name`
    fn emit_namespace_clause(&mut self, name: &Ident) -> EmitResult {
        self.write("*");
        self.write_formatting_space();
        self.write("as");
        self.write_space();
        self.emit_ident(name)
    }

    /// ` from 'source'`. An identifier before `from` needs a real space.
    fn emit_from_clause(&mut self, source: &Str, after_ident: bool) {
        if after_ident {
            self.write_space();
        } else {
            self.write_formatting_space();
        }
        self.write("from");
        self.write_formatting_space();
        self.emit_str(source);
    }
}
