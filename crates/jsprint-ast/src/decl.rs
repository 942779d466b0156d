//! Declarations, functions and classes.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Ident, PrivateName};
use crate::impl_spanned;
use crate::ops::{Accessibility, MethodKind, VarDeclKind};
use crate::pat::Pat;
use crate::prop::PropName;
use crate::stmt::BlockStmt;
use crate::typescript::TsNode;
use jsprint_common::{Span, Spanned};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Decl {
    #[serde(rename = "ClassDeclaration")]
    Class(ClassDecl),
    #[serde(rename = "FunctionDeclaration")]
    Fn(FnDecl),
    #[serde(rename = "VariableDeclaration")]
    Var(VarDecl),
    #[serde(rename = "TsInterfaceDeclaration")]
    TsInterface(TsNode),
    #[serde(rename = "TsTypeAliasDeclaration")]
    TsTypeAlias(TsNode),
    #[serde(rename = "TsEnumDeclaration")]
    TsEnum(TsNode),
    #[serde(rename = "TsModuleDeclaration")]
    TsModule(TsNode),
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        match self {
            Decl::Class(n) => n.class.span,
            Decl::Fn(n) => n.function.span,
            Decl::Var(n) => n.span,
            Decl::TsInterface(n) | Decl::TsTypeAlias(n) | Decl::TsEnum(n) | Decl::TsModule(n) => {
                n.span
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FnDecl {
    pub ident: Ident,
    #[serde(default)]
    pub declare: bool,
    #[serde(flatten)]
    pub function: Function,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub identifier: Ident,
    #[serde(default)]
    pub declare: bool,
    #[serde(flatten)]
    pub class: Class,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    #[serde(default)]
    pub span: Span,
    pub kind: VarDeclKind,
    #[serde(default)]
    pub declare: bool,
    #[serde(default)]
    pub declarations: Vec<VarDeclarator>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    #[serde(default)]
    pub span: Span,
    pub id: Pat,
    #[serde(default)]
    pub init: Option<Box<Expr>>,
    #[serde(default)]
    pub definite: bool,
}

/// Shared shape of function declarations, expressions and methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub params: Vec<Pat>,
    #[serde(default)]
    pub decorators: Vec<Decorator>,
    /// Absent for overload signatures and `declare function`.
    #[serde(default)]
    pub body: Option<BlockStmt>,
    #[serde(default, rename = "generator")]
    pub is_generator: bool,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TsNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub decorators: Vec<Decorator>,
    #[serde(default)]
    pub body: Vec<ClassMember>,
    #[serde(default, rename = "superClass")]
    pub super_class: Option<Box<Expr>>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default, rename = "typeParams", skip_serializing_if = "Option::is_none")]
    pub type_params: Option<TsNode>,
    #[serde(default, rename = "superTypeParams", skip_serializing_if = "Option::is_none")]
    pub super_type_params: Option<TsNode>,
    #[serde(default)]
    pub implements: Vec<TsNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClassMember {
    #[serde(rename = "Constructor")]
    Constructor(Constructor),
    #[serde(rename = "ClassMethod")]
    Method(ClassMethod),
    #[serde(rename = "PrivateMethod")]
    PrivateMethod(PrivateMethod),
    #[serde(rename = "ClassProperty")]
    ClassProp(ClassProp),
    #[serde(rename = "PrivateProperty")]
    PrivateProp(PrivateProp),
    #[serde(rename = "TsIndexSignature")]
    TsIndexSignature(TsNode),
}

impl Spanned for ClassMember {
    fn span(&self) -> Span {
        match self {
            ClassMember::Constructor(n) => n.span,
            ClassMember::Method(n) => n.span,
            ClassMember::PrivateMethod(n) => n.span,
            ClassMember::ClassProp(n) => n.span,
            ClassMember::PrivateProp(n) => n.span,
            ClassMember::TsIndexSignature(n) => n.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub span: Span,
    pub key: PropName,
    #[serde(default)]
    pub params: Vec<ParamOrTsParamProp>,
    #[serde(default)]
    pub body: Option<BlockStmt>,
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParamOrTsParamProp {
    #[serde(rename = "TsParameterProperty")]
    TsParamProp(TsNode),
    #[serde(untagged)]
    Param(Pat),
}

impl Spanned for ParamOrTsParamProp {
    fn span(&self) -> Span {
        match self {
            ParamOrTsParamProp::TsParamProp(n) => n.span,
            ParamOrTsParamProp::Param(n) => n.span(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMethod {
    #[serde(default)]
    pub span: Span,
    pub key: PropName,
    pub function: Function,
    pub kind: MethodKind,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrivateMethod {
    #[serde(default)]
    pub span: Span,
    pub key: PrivateName,
    pub function: Function,
    pub kind: MethodKind,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassProp {
    #[serde(default)]
    pub span: Span,
    pub key: Box<Expr>,
    #[serde(default)]
    pub value: Option<Box<Expr>>,
    #[serde(default, rename = "typeAnnotation", skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub decorators: Vec<Decorator>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub definite: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrivateProp {
    #[serde(default)]
    pub span: Span,
    pub key: PrivateName,
    #[serde(default)]
    pub value: Option<Box<Expr>>,
    #[serde(default, rename = "typeAnnotation", skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsNode>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub decorators: Vec<Decorator>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub definite: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decorator {
    #[serde(default)]
    pub span: Span,
    pub expression: Box<Expr>,
}

impl_spanned!(
    VarDecl,
    VarDeclarator,
    Function,
    Class,
    Constructor,
    ClassMethod,
    PrivateMethod,
    ClassProp,
    PrivateProp,
    Decorator,
);

impl Spanned for FnDecl {
    fn span(&self) -> Span {
        self.function.span
    }
}

impl Spanned for ClassDecl {
    fn span(&self) -> Span {
        self.class.span
    }
}
