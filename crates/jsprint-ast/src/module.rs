//! Program roots and module-level declarations.

use serde::{Deserialize, Serialize};

use crate::decl::Decl;
use crate::expr::{ClassExpr, Expr, FnExpr, Ident};
use crate::impl_spanned;
use crate::lit::Str;
use crate::stmt::Stmt;
use crate::typescript::TsNode;
use jsprint_common::{Span, Spanned};

/// Root of a parsed file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Program {
    #[serde(rename = "Module")]
    Module(Module),
    #[serde(rename = "Script")]
    Script(Script),
}

impl Spanned for Program {
    fn span(&self) -> Span {
        match self {
            Program::Module(m) => m.span,
            Program::Script(s) => s.span,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub body: Vec<ModuleItem>,
    /// `/usr/bin/node` for `#!/usr/bin/node`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleItem {
    ModuleDecl(ModuleDecl),
    Stmt(Stmt),
}

impl Spanned for ModuleItem {
    fn span(&self) -> Span {
        match self {
            ModuleItem::ModuleDecl(n) => n.span(),
            ModuleItem::Stmt(n) => n.span(),
        }
    }
}

impl From<Stmt> for ModuleItem {
    fn from(stmt: Stmt) -> Self {
        ModuleItem::Stmt(stmt)
    }
}

impl From<ModuleDecl> for ModuleItem {
    fn from(decl: ModuleDecl) -> Self {
        ModuleItem::ModuleDecl(decl)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModuleDecl {
    #[serde(rename = "ImportDeclaration")]
    Import(ImportDecl),
    #[serde(rename = "ExportDeclaration")]
    ExportDecl(ExportDecl),
    #[serde(rename = "ExportNamedDeclaration")]
    ExportNamed(NamedExport),
    #[serde(rename = "ExportDefaultDeclaration")]
    ExportDefaultDecl(ExportDefaultDecl),
    #[serde(rename = "ExportDefaultExpression")]
    ExportDefaultExpr(ExportDefaultExpr),
    #[serde(rename = "ExportAllDeclaration")]
    ExportAll(ExportAll),
    #[serde(rename = "TsImportEqualsDeclaration")]
    TsImportEquals(TsNode),
    #[serde(rename = "TsExportAssignment")]
    TsExportAssignment(TsNode),
    #[serde(rename = "TsNamespaceExportDeclaration")]
    TsNamespaceExport(TsNode),
}

impl Spanned for ModuleDecl {
    fn span(&self) -> Span {
        match self {
            ModuleDecl::Import(n) => n.span,
            ModuleDecl::ExportDecl(n) => n.span,
            ModuleDecl::ExportNamed(n) => n.span,
            ModuleDecl::ExportDefaultDecl(n) => n.span,
            ModuleDecl::ExportDefaultExpr(n) => n.span,
            ModuleDecl::ExportAll(n) => n.span,
            ModuleDecl::TsImportEquals(n)
            | ModuleDecl::TsExportAssignment(n)
            | ModuleDecl::TsNamespaceExport(n) => n.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Str,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    /// `{ imported as local }`, or `{ local }` when `imported` is absent.
    #[serde(rename = "ImportSpecifier")]
    Named(ImportNamedSpecifier),
    #[serde(rename = "ImportDefaultSpecifier")]
    Default(ImportDefaultSpecifier),
    #[serde(rename = "ImportNamespaceSpecifier")]
    Namespace(ImportNamespaceSpecifier),
}

impl Spanned for ImportSpecifier {
    fn span(&self) -> Span {
        match self {
            ImportSpecifier::Named(n) => n.span,
            ImportSpecifier::Default(n) => n.span,
            ImportSpecifier::Namespace(n) => n.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportNamedSpecifier {
    #[serde(default)]
    pub span: Span,
    pub local: Ident,
    #[serde(default)]
    pub imported: Option<Ident>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportDefaultSpecifier {
    #[serde(default)]
    pub span: Span,
    pub local: Ident,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportNamespaceSpecifier {
    #[serde(default)]
    pub span: Span,
    pub local: Ident,
}

/// `export <declaration>`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportDecl {
    #[serde(default)]
    pub span: Span,
    pub declaration: Decl,
}

/// `export { a, b as c } from 'mod'`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedExport {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub specifiers: Vec<ExportSpecifier>,
    #[serde(default)]
    pub source: Option<Str>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportSpecifier {
    /// `* as name`. Older parser output spells the tag `ExportNamespaceSpecifer`.
    #[serde(rename = "ExportNamespaceSpecifier", alias = "ExportNamespaceSpecifer")]
    Namespace(ExportNamespaceSpecifier),
    /// `name` in `export name from 'mod'`.
    #[serde(rename = "ExportDefaultSpecifier")]
    Default(ExportDefaultSpecifier),
    #[serde(rename = "ExportSpecifier")]
    Named(ExportNamedSpecifier),
}

impl Spanned for ExportSpecifier {
    fn span(&self) -> Span {
        match self {
            ExportSpecifier::Namespace(n) => n.span,
            ExportSpecifier::Default(n) => n.span,
            ExportSpecifier::Named(n) => n.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportNamespaceSpecifier {
    #[serde(default)]
    pub span: Span,
    pub name: Ident,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultSpecifier {
    #[serde(default)]
    pub span: Span,
    pub exported: Ident,
}

/// `orig` or `orig as exported`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportNamedSpecifier {
    #[serde(default)]
    pub span: Span,
    pub orig: Ident,
    #[serde(default)]
    pub exported: Option<Ident>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultDecl {
    #[serde(default)]
    pub span: Span,
    pub decl: DefaultDecl,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DefaultDecl {
    #[serde(rename = "ClassExpression")]
    Class(ClassExpr),
    #[serde(rename = "FunctionExpression")]
    Fn(FnExpr),
    #[serde(rename = "TsInterfaceDeclaration")]
    TsInterface(TsNode),
}

impl Spanned for DefaultDecl {
    fn span(&self) -> Span {
        match self {
            DefaultDecl::Class(n) => n.class.span,
            DefaultDecl::Fn(n) => n.function.span,
            DefaultDecl::TsInterface(n) => n.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultExpr {
    #[serde(default)]
    pub span: Span,
    pub expression: Box<Expr>,
}

/// `export * from 'mod'`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportAll {
    #[serde(default)]
    pub span: Span,
    pub source: Str,
}

impl_spanned!(
    Module,
    Script,
    ImportDecl,
    ImportNamedSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ExportDecl,
    NamedExport,
    ExportNamespaceSpecifier,
    ExportDefaultSpecifier,
    ExportNamedSpecifier,
    ExportDefaultDecl,
    ExportDefaultExpr,
    ExportAll,
);
