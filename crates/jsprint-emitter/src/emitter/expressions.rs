use super::Printer;
use super::literals::format_number;
use crate::error::{EmitError, EmitResult};
use crate::list_format::ListFormat;
use crate::spacing::{
    needs_space_after_binary_op, needs_space_before_binary_op, should_emit_ws_before_operand,
};
use jsprint_ast::{
    AssignExpr, BinExpr, CallExpr, CondExpr, Expr, ExprOrSpread, MemberExpr, MetaPropExpr,
    NewExpr, NodeKind, SeqExpr, SpreadElement, UnaryExpr, UpdateExpr, YieldExpr,
};
use jsprint_common::Spanned;

impl<'a> Printer<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn emit_expr(&mut self, expr: &Expr) -> EmitResult {
        self.record_mark(expr.span());
        match expr {
            Expr::This(_) => {
                self.write("this");
                Ok(())
            }
            Expr::Super(_) => {
                self.write("super");
                Ok(())
            }
            Expr::Array(n) => self.emit_array_lit(n),
            Expr::Object(n) => self.emit_object_lit(n),
            Expr::Fn(n) => self.emit_fn_expr(n),
            Expr::Unary(n) => self.emit_unary(n),
            Expr::Update(n) => self.emit_update(n),
            Expr::Bin(n) => self.emit_bin(n),
            Expr::Assign(n) => self.emit_assign(n),
            Expr::Member(n) => self.emit_member(n),
            Expr::Cond(n) => self.emit_cond(n),
            Expr::Call(n) => self.emit_call(n),
            Expr::New(n) => self.emit_new(n),
            Expr::Seq(n) => self.emit_seq(n),
            Expr::Ident(n) => self.emit_ident(n),
            Expr::Str(n) => {
                self.emit_str(n);
                Ok(())
            }
            Expr::Bool(n) => {
                self.write(if n.value { "true" } else { "false" });
                Ok(())
            }
            Expr::Null(_) => {
                self.write("null");
                Ok(())
            }
            Expr::Num(n) => {
                self.emit_number(n);
                Ok(())
            }
            Expr::Regex(n) => {
                self.emit_regex(n);
                Ok(())
            }
            Expr::Tpl(n) => self.emit_tpl(&n.quasis, &n.expressions),
            Expr::TaggedTpl(n) => {
                if n.type_parameters.is_some() {
                    return Err(EmitError::unimplemented(NodeKind::TsTypeParameterInstantiation));
                }
                self.emit_expr(&n.tag)?;
                self.emit_tpl(&n.quasis, &n.expressions)
            }
            Expr::Arrow(n) => self.emit_arrow(n),
            Expr::Class(n) => self.emit_class_expr(n),
            Expr::Yield(n) => self.emit_yield(n),
            Expr::MetaProp(n) => self.emit_meta_prop(n),
            Expr::Await(n) => {
                self.write_keyword_before("await", &n.argument);
                self.emit_expr(&n.argument)
            }
            Expr::Paren(n) => {
                self.write("(");
                self.emit_expr(&n.expression)?;
                self.write(")");
                Ok(())
            }
            Expr::PrivateName(n) => self.emit_private_name(n),

            // `{}` inside JSX prints as nothing.
            Expr::JSXEmpty(_) => Ok(()),
            Expr::JSXMember(_)
            | Expr::JSXNamespacedName(_)
            | Expr::JSXElement(_)
            | Expr::JSXFragment(_)
            | Expr::JSXText(_) => Err(EmitError::unimplemented(expr.kind())),

            Expr::TsTypeAssertion(_) | Expr::TsNonNull(_) | Expr::TsTypeCast(_) | Expr::TsAs(_) => {
                Err(EmitError::unimplemented(expr.kind()))
            }
        }
    }

    fn emit_unary(&mut self, n: &UnaryExpr) -> EmitResult {
        self.write(n.operator.as_str());
        if should_emit_ws_before_operand(n) {
            self.write_space();
        } else if n.operator.is_keyword() {
            self.write_formatting_space();
        }
        self.emit_expr(&n.argument)
    }

    fn emit_update(&mut self, n: &UpdateExpr) -> EmitResult {
        if n.prefix {
            self.write(n.operator.as_str());
            self.emit_expr(&n.argument)
        } else {
            self.emit_expr(&n.argument)?;
            self.write(n.operator.as_str());
            Ok(())
        }
    }

    fn emit_bin(&mut self, n: &BinExpr) -> EmitResult {
        self.emit_expr(&n.left)?;

        if needs_space_before_binary_op(n) {
            self.write_space();
        } else {
            self.write_formatting_space();
        }

        self.write(n.operator.as_str());

        if needs_space_after_binary_op(n) {
            self.write_space();
        } else {
            self.write_formatting_space();
        }

        self.emit_expr(&n.right)
    }

    fn emit_assign(&mut self, n: &AssignExpr) -> EmitResult {
        self.emit_pat(&n.left)?;
        self.write_formatting_space();
        self.write(n.operator.as_str());
        self.write_formatting_space();
        self.emit_expr(&n.right)
    }

    fn emit_member(&mut self, n: &MemberExpr) -> EmitResult {
        self.emit_expr(&n.object)?;

        if n.computed {
            self.write("[");
            self.emit_expr(&n.property)?;
            self.write("]");
            return Ok(());
        }

        // `1.toString()` would lex as a malformed number.
        if let Expr::Num(num) = &*n.object
            && is_integer_text(&format_number(num.value))
        {
            self.write(".");
        }

        self.write(".");
        match &*n.property {
            Expr::Ident(ident) => self.emit_ident(ident),
            Expr::PrivateName(name) => self.emit_private_name(name),
            other => Err(EmitError::contract(format!(
                "non-computed member property must be an identifier or private name, found {}",
                other.kind()
            ))),
        }
    }

    fn emit_cond(&mut self, n: &CondExpr) -> EmitResult {
        self.emit_expr(&n.test)?;
        self.write_formatting_space();
        self.write("?");
        self.write_formatting_space();
        self.emit_expr(&n.consequent)?;
        self.write_formatting_space();
        self.write(":");
        self.write_formatting_space();
        self.emit_expr(&n.alternate)
    }

    fn emit_call(&mut self, n: &CallExpr) -> EmitResult {
        if n.type_arguments.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeParameterInstantiation));
        }
        self.emit_expr(&n.callee)?;
        self.emit_list(
            n.span,
            Some(n.arguments.as_slice()),
            ListFormat::CALL_EXPRESSION_ARGUMENTS,
            Self::emit_expr_or_spread,
        )
    }

    fn emit_new(&mut self, n: &NewExpr) -> EmitResult {
        if n.type_arguments.is_some() {
            return Err(EmitError::unimplemented(NodeKind::TsTypeParameterInstantiation));
        }
        self.write_keyword_before("new", &n.callee);
        self.emit_expr(&n.callee)?;
        self.emit_list(
            n.span,
            n.arguments.as_deref(),
            ListFormat::NEW_EXPRESSION_ARGUMENTS,
            Self::emit_expr_or_spread,
        )
    }

    fn emit_seq(&mut self, n: &SeqExpr) -> EmitResult {
        self.emit_list(
            n.span,
            Some(n.expressions.as_slice()),
            ListFormat::COMMA_LIST_ELEMENTS,
            |p, expr| p.emit_expr(expr),
        )
    }

    fn emit_yield(&mut self, n: &YieldExpr) -> EmitResult {
        self.write("yield");
        if n.delegate {
            self.write("*");
        }
        let Some(argument) = &n.argument else {
            return Ok(());
        };
        if n.delegate {
            self.write_formatting_space();
        } else {
            self.write_space_before(argument);
        }
        self.emit_expr(argument)
    }

    fn emit_meta_prop(&mut self, n: &MetaPropExpr) -> EmitResult {
        self.emit_ident(&n.meta)?;
        self.write(".");
        self.emit_ident(&n.property)
    }

    // =========================================================================
    // Spread
    // =========================================================================

    pub(super) fn emit_expr_or_spread(&mut self, n: &ExprOrSpread) -> EmitResult {
        match n {
            ExprOrSpread::Spread(spread) => self.emit_spread(spread),
            ExprOrSpread::Expr(expr) => self.emit_expr(expr),
        }
    }

    pub(super) fn emit_spread(&mut self, n: &SpreadElement) -> EmitResult {
        self.write("...");
        self.emit_expr(&n.arguments)
    }
}

/// Decimal digits only: a `.` directly after would be read as a fraction.
fn is_integer_text(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
