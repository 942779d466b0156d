use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::list_format::ListFormat;
use crate::spacing::arrow_body_needs_parens;
use jsprint_ast::{
    Accessibility, ArrowExpr, BlockStmtOrExpr, Class, ClassDecl, ClassExpr, ClassMember,
    ClassMethod, ClassProp, Constructor, Decorator, Expr, FnDecl, FnExpr, Function, Ident,
    MethodKind, NodeKind, ParamOrTsParamProp, PrivateMethod, PrivateProp,
};

impl<'a> Printer<'a> {
    // =========================================================================
    // Functions
    // =========================================================================

    pub(super) fn emit_fn_decl(&mut self, n: &FnDecl) -> EmitResult {
        if n.declare {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        self.emit_function_keyword(&n.function);
        // `function* name` reads fine without the space; `functionname` does not.
        if n.function.is_generator {
            self.write_formatting_space();
        } else {
            self.write_space();
        }
        self.emit_ident(&n.ident)?;
        self.emit_function_signature_and_body(&n.function)
    }

    pub(super) fn emit_fn_expr(&mut self, n: &FnExpr) -> EmitResult {
        self.emit_function_keyword(&n.function);
        if let Some(ident) = &n.identifier {
            if n.function.is_generator {
                self.write_formatting_space();
            } else {
                self.write_space();
            }
            self.emit_ident(ident)?;
        }
        self.emit_function_signature_and_body(&n.function)
    }

    /// `[async ]function[*]`
    fn emit_function_keyword(&mut self, function: &Function) {
        if function.is_async {
            self.write("async");
            self.write_space();
        }
        self.write("function");
        if function.is_generator {
            self.write("*");
        }
    }

    /// `(params) { body }`, shared by functions and methods.
    pub(super) fn emit_function_signature_and_body(&mut self, function: &Function) -> EmitResult {
        check_decorators(&function.decorators)?;
        if function.type_parameters.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeParameterDeclaration));
        }
        if function.return_type.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }
        let Some(body) = &function.body else {
            return Err(EmitError::contract("function without a body"));
        };

        self.emit_list(
            function.span,
            Some(function.params.as_slice()),
            ListFormat::PARAMETERS,
            Self::emit_pat,
        )?;
        self.write_formatting_space();
        self.emit_block(body)
    }

    pub(super) fn emit_arrow(&mut self, n: &ArrowExpr) -> EmitResult {
        if n.type_parameters.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeParameterDeclaration));
        }
        if n.return_type.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }

        if n.is_async {
            self.write("async");
            self.write_formatting_space();
        }
        self.emit_list(
            n.span,
            Some(n.params.as_slice()),
            ListFormat::PARAMETERS,
            Self::emit_pat,
        )?;
        self.write_formatting_space();
        self.write("=>");
        self.write_formatting_space();

        match &n.body {
            BlockStmtOrExpr::BlockStmt(block) => self.emit_block(block),
            BlockStmtOrExpr::Expr(expr) if arrow_body_needs_parens(expr) => {
                self.write("(");
                self.emit_expr(expr)?;
                self.write(")");
                Ok(())
            }
            BlockStmtOrExpr::Expr(expr) => self.emit_expr(expr),
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(super) fn emit_class_decl(&mut self, n: &ClassDecl) -> EmitResult {
        if n.declare {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        self.emit_class(Some(&n.identifier), &n.class)
    }

    pub(super) fn emit_class_expr(&mut self, n: &ClassExpr) -> EmitResult {
        self.emit_class(n.identifier.as_ref(), &n.class)
    }

    fn emit_class(&mut self, name: Option<&Ident>, class: &Class) -> EmitResult {
        check_decorators(&class.decorators)?;
        if class.is_abstract {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        if class.type_params.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeParameterDeclaration));
        }
        if class.super_type_params.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeParameterInstantiation));
        }
        if !class.implements.is_empty() {
            return Err(EmitError::unimplemented(NodeKind::TsExpressionWithTypeArguments));
        }

        self.write("class");
        if let Some(name) = name {
            self.write_space();
            self.emit_ident(name)?;
        }
        if let Some(super_class) = &class.super_class {
            self.write_space();
            self.write_keyword_before("extends", super_class);
            self.emit_expr(super_class)?;
        }
        self.write_formatting_space();
        self.emit_list(
            class.span,
            Some(class.body.as_slice()),
            ListFormat::CLASS_MEMBERS,
            Self::emit_class_member,
        )
    }

    fn emit_class_member(&mut self, member: &ClassMember) -> EmitResult {
        match member {
            ClassMember::Constructor(n) => self.emit_constructor(n),
            ClassMember::Method(n) => self.emit_class_method(n),
            ClassMember::PrivateMethod(n) => self.emit_private_method(n),
            ClassMember::ClassProp(n) => self.emit_class_prop(n),
            ClassMember::PrivateProp(n) => self.emit_private_prop(n),
            ClassMember::TsIndexSignature(_) => Err(EmitError::unimplemented(member.kind())),
        }
    }

    fn emit_constructor(&mut self, n: &Constructor) -> EmitResult {
        check_member_modifiers(n.accessibility, false, n.is_optional)?;
        let Some(body) = &n.body else {
            return Err(EmitError::contract("constructor without a body"));
        };

        self.emit_prop_name(&n.key)?;
        self.emit_list(
            n.span,
            Some(n.params.as_slice()),
            ListFormat::PARAMETERS,
            |p, param| match param {
                ParamOrTsParamProp::Param(pat) => p.emit_pat(pat),
                ParamOrTsParamProp::TsParamProp(_) => {
                    Err(EmitError::unimplemented(NodeKind::TsParameterProperty))
                }
            },
        )?;
        self.write_formatting_space();
        self.emit_block(body)
    }

    fn emit_class_method(&mut self, n: &ClassMethod) -> EmitResult {
        check_member_modifiers(n.accessibility, n.is_abstract, n.is_optional)?;
        self.emit_method_prefix(n.is_static, n.kind, &n.function);
        self.emit_prop_name(&n.key)?;
        self.emit_function_signature_and_body(&n.function)
    }

    fn emit_private_method(&mut self, n: &PrivateMethod) -> EmitResult {
        check_member_modifiers(n.accessibility, n.is_abstract, n.is_optional)?;
        self.emit_method_prefix(n.is_static, n.kind, &n.function);
        self.emit_private_name(&n.key)?;
        self.emit_function_signature_and_body(&n.function)
    }

    /// `[static ](get |set |[async ][*])`
    fn emit_method_prefix(&mut self, is_static: bool, kind: MethodKind, function: &Function) {
        if is_static {
            self.write("static");
            self.write_space();
        }
        match kind {
            MethodKind::Getter => {
                self.write("get");
                self.write_space();
            }
            MethodKind::Setter => {
                self.write("set");
                self.write_space();
            }
            MethodKind::Method => {
                if function.is_async {
                    self.write("async");
                    self.write_space();
                }
                if function.is_generator {
                    self.write("*");
                }
            }
        }
    }

    fn emit_class_prop(&mut self, n: &ClassProp) -> EmitResult {
        check_decorators(&n.decorators)?;
        check_member_modifiers(n.accessibility, n.is_abstract, n.is_optional)?;
        if n.readonly || n.definite {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        if n.type_annotation.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }

        if n.is_static {
            self.write("static");
            self.write_space();
        }
        if n.computed {
            self.write("[");
            self.emit_expr(&n.key)?;
            self.write("]");
        } else {
            self.emit_expr(&n.key)?;
        }
        self.emit_class_prop_value(n.value.as_deref())
    }

    fn emit_private_prop(&mut self, n: &PrivateProp) -> EmitResult {
        check_decorators(&n.decorators)?;
        check_member_modifiers(n.accessibility, n.is_abstract, n.is_optional)?;
        if n.readonly || n.definite {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        if n.type_annotation.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeAnnotation));
        }

        if n.is_static {
            self.write("static");
            self.write_space();
        }
        self.emit_private_name(&n.key)?;
        self.emit_class_prop_value(n.value.as_deref())
    }

    /// `[ = value];`
    fn emit_class_prop_value(&mut self, value: Option<&Expr>) -> EmitResult {
        if let Some(value) = value {
            self.write_formatting_space();
            self.write("=");
            self.write_formatting_space();
            self.emit_expr(value)?;
        }
        self.write_semicolon();
        Ok(())
    }
}

fn check_decorators(decorators: &[Decorator]) -> EmitResult {
    if decorators.is_empty() {
        Ok(())
    } else {
        Err(EmitError::unimplemented(NodeKind::Decorator))
    }
}

/// TypeScript-only member modifiers are not rendered.
fn check_member_modifiers(
    accessibility: Option<Accessibility>,
    is_abstract: bool,
    is_optional: bool,
) -> EmitResult {
    if accessibility.is_some() {
        return Err(EmitError::unimplemented(NodeKind::TsAccessibility));
    }
    if is_abstract || is_optional {
        return Err(EmitError::unimplemented(NodeKind::TsModifier));
    }
    Ok(())
}
