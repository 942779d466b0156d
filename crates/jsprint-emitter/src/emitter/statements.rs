use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::list_format::ListFormat;
use crate::spacing::expr_stmt_needs_parens;
use jsprint_ast::{
    BlockStmt, CatchClause, Decl, DoWhileStmt, Expr, ForInStmt, ForOfStmt, ForStmt, IfStmt,
    LabeledStmt, NodeKind, Stmt, SwitchCase, SwitchStmt, TryStmt, VarDecl, VarDeclOrExpr,
    VarDeclOrPat, VarDeclarator, WhileStmt, WithStmt,
};
use jsprint_common::Spanned;

impl<'a> Printer<'a> {
    // =========================================================================
    // Statements
    // =========================================================================

    pub fn emit_stmt(&mut self, stmt: &Stmt) -> EmitResult {
        self.record_mark(stmt.span());
        match stmt {
            Stmt::Block(block) => self.emit_block(block),
            Stmt::Empty(_) => {
                self.write_semicolon();
                Ok(())
            }
            Stmt::Debugger(_) => {
                self.write("debugger");
                self.write_semicolon();
                Ok(())
            }
            Stmt::With(n) => self.emit_with(n),
            Stmt::Return(n) => {
                self.write("return");
                if let Some(argument) = &n.argument {
                    self.write_space_before(argument);
                    self.emit_expr(argument)?;
                }
                self.write_semicolon();
                Ok(())
            }
            Stmt::Labeled(n) => self.emit_labeled(n),
            Stmt::Break(n) => {
                self.write("break");
                if let Some(label) = &n.label {
                    self.write_space();
                    self.emit_ident(label)?;
                }
                self.write_semicolon();
                Ok(())
            }
            Stmt::Continue(n) => {
                self.write("continue");
                if let Some(label) = &n.label {
                    self.write_space();
                    self.emit_ident(label)?;
                }
                self.write_semicolon();
                Ok(())
            }
            Stmt::If(n) => self.emit_if(n),
            Stmt::Switch(n) => self.emit_switch(n),
            Stmt::Throw(n) => {
                self.write_keyword_before("throw", &n.argument);
                self.emit_expr(&n.argument)?;
                self.write_semicolon();
                Ok(())
            }
            Stmt::Try(n) => self.emit_try(n),
            Stmt::While(n) => self.emit_while(n),
            Stmt::DoWhile(n) => self.emit_do_while(n),
            Stmt::For(n) => self.emit_for(n),
            Stmt::ForIn(n) => self.emit_for_in(n),
            Stmt::ForOf(n) => self.emit_for_of(n),
            Stmt::Decl(decl) => self.emit_decl(decl),
            Stmt::Expr(expr) => self.emit_expr_stmt(expr),
        }
    }

    /// Expression statement. Expressions that would be read as a block,
    /// a declaration or a pattern at statement start are parenthesized.
    fn emit_expr_stmt(&mut self, expr: &Expr) -> EmitResult {
        if expr_stmt_needs_parens(expr) {
            self.write("(");
            self.emit_expr(expr)?;
            self.write(")");
        } else {
            self.emit_expr(expr)?;
        }
        self.write_semicolon();
        Ok(())
    }

    pub(super) fn emit_block(&mut self, block: &BlockStmt) -> EmitResult {
        self.emit_list(
            block.span,
            Some(block.stmts.as_slice()),
            ListFormat::MULTI_LINE_BLOCK_STATEMENTS,
            Self::emit_stmt,
        )
    }

    fn emit_with(&mut self, n: &WithStmt) -> EmitResult {
        self.write("with");
        self.write_formatting_space();
        self.write("(");
        self.emit_expr(&n.object)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_stmt(&n.body)
    }

    fn emit_labeled(&mut self, n: &LabeledStmt) -> EmitResult {
        self.emit_ident(&n.label)?;
        self.write(":");
        self.write_formatting_space();
        self.emit_stmt(&n.body)
    }

    fn emit_if(&mut self, n: &IfStmt) -> EmitResult {
        self.write("if");
        self.write_formatting_space();
        self.write("(");
        self.emit_expr(&n.test)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_stmt(&n.consequent)?;

        let Some(alternate) = &n.alternate else {
            return Ok(());
        };
        if matches!(*n.consequent, Stmt::Block(_)) {
            self.write_formatting_space();
        }
        self.write_keyword_before("else", alternate);
        self.emit_stmt(alternate)
    }

    fn emit_switch(&mut self, n: &SwitchStmt) -> EmitResult {
        self.write("switch");
        self.write_formatting_space();
        self.write("(");
        self.emit_expr(&n.discriminant)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_list(
            n.span,
            Some(n.cases.as_slice()),
            ListFormat::CASE_BLOCK_CLAUSES,
            Self::emit_switch_case,
        )
    }

    fn emit_switch_case(&mut self, n: &SwitchCase) -> EmitResult {
        match &n.test {
            Some(test) => {
                self.write_keyword_before("case", test);
                self.emit_expr(test)?;
            }
            None => self.write("default"),
        }
        self.write(":");

        // A single synthesized statement stays on the `case` line.
        let single_synthesized = match n.consequent.as_slice() {
            [only] => n.span.is_synthesized() || only.span().is_synthesized(),
            _ => false,
        };
        let format = if single_synthesized {
            self.write_formatting_space();
            ListFormat::CASE_OR_DEFAULT_CLAUSE_STATEMENTS.inline()
        } else {
            ListFormat::CASE_OR_DEFAULT_CLAUSE_STATEMENTS
        };

        self.emit_list(n.span, Some(n.consequent.as_slice()), format, Self::emit_stmt)
    }

    fn emit_try(&mut self, n: &TryStmt) -> EmitResult {
        self.write("try");
        self.write_formatting_space();
        self.emit_block(&n.block)?;

        if let Some(handler) = &n.handler {
            self.write_formatting_space();
            self.emit_catch_clause(handler)?;
        }

        if let Some(finalizer) = &n.finalizer {
            self.write_formatting_space();
            self.write("finally");
            self.write_formatting_space();
            self.emit_block(finalizer)?;
        }
        Ok(())
    }

    fn emit_catch_clause(&mut self, n: &CatchClause) -> EmitResult {
        self.write("catch");
        self.write_formatting_space();
        if let Some(param) = &n.param {
            self.write("(");
            self.emit_pat(param)?;
            self.write(")");
            self.write_formatting_space();
        }
        self.emit_block(&n.body)
    }

    fn emit_while(&mut self, n: &WhileStmt) -> EmitResult {
        self.write("while");
        self.write_formatting_space();
        self.write("(");
        self.emit_expr(&n.test)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_stmt(&n.body)
    }

    fn emit_do_while(&mut self, n: &DoWhileStmt) -> EmitResult {
        self.write_keyword_before("do", &n.body);
        self.emit_stmt(&n.body)?;
        self.write_formatting_space();
        self.write("while");
        self.write_formatting_space();
        self.write("(");
        self.emit_expr(&n.test)?;
        self.write(")");
        self.write_semicolon();
        Ok(())
    }

    fn emit_for(&mut self, n: &ForStmt) -> EmitResult {
        self.write("for");
        self.write_formatting_space();
        self.write("(");
        match &n.init {
            Some(VarDeclOrExpr::VarDecl(decl)) => self.emit_var_decl(decl)?,
            Some(VarDeclOrExpr::Expr(expr)) => self.emit_expr(expr)?,
            None => {}
        }
        self.write(";");
        if let Some(test) = &n.test {
            self.write_formatting_space();
            self.emit_expr(test)?;
        }
        self.write(";");
        if let Some(update) = &n.update {
            self.write_formatting_space();
            self.emit_expr(update)?;
        }
        self.write(")");
        self.write_formatting_space();
        self.emit_stmt(&n.body)
    }

    fn emit_for_in(&mut self, n: &ForInStmt) -> EmitResult {
        self.write("for");
        self.write_formatting_space();
        self.write("(");
        self.emit_for_head_left(&n.left, "for-in")?;
        self.write_space();
        self.write_keyword_before("in", &n.right);
        self.emit_expr(&n.right)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_stmt(&n.body)
    }

    fn emit_for_of(&mut self, n: &ForOfStmt) -> EmitResult {
        self.write("for");
        if n.await_token.is_some() {
            self.write_space();
            self.write("await");
        }
        self.write_formatting_space();
        self.write("(");
        self.emit_for_head_left(&n.left, "for-of")?;
        self.write_space();
        self.write_keyword_before("of", &n.right);
        self.emit_expr(&n.right)?;
        self.write(")");
        self.write_formatting_space();
        self.emit_stmt(&n.body)
    }

    fn emit_for_head_left(&mut self, left: &VarDeclOrPat, statement: &str) -> EmitResult {
        match left {
            VarDeclOrPat::VarDecl(decl) => {
                if decl.declarations.len() != 1 {
                    return Err(EmitError::contract(format!(
                        "{statement} head declares {} bindings, expected exactly one",
                        decl.declarations.len()
                    )));
                }
                self.emit_var_decl(decl)
            }
            VarDeclOrPat::Pat(pat) => self.emit_pat(pat),
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Declarations in statement position. Variable declarations are
    /// terminated here; `for` heads call `emit_var_decl` directly.
    pub(super) fn emit_decl(&mut self, decl: &Decl) -> EmitResult {
        match decl {
            Decl::Class(n) => self.emit_class_decl(n),
            Decl::Fn(n) => self.emit_fn_decl(n),
            Decl::Var(n) => {
                self.emit_var_decl(n)?;
                self.write_semicolon();
                Ok(())
            }
            Decl::TsInterface(_) | Decl::TsTypeAlias(_) | Decl::TsEnum(_) | Decl::TsModule(_) => {
                Err(EmitError::unimplemented(decl.kind()))
            }
        }
    }

    pub(super) fn emit_var_decl(&mut self, n: &VarDecl) -> EmitResult {
        if n.declare {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        let Some(first) = n.declarations.first() else {
            return Err(EmitError::contract(format!(
                "`{}` declaration without declarators",
                n.kind
            )));
        };
        // `const{a}=o` and `let[a]=xs` need no separator
        self.write_keyword_before(n.kind.as_str(), &first.id);
        self.emit_list(
            n.span,
            Some(n.declarations.as_slice()),
            ListFormat::VARIABLE_DECLARATION_LIST,
            Self::emit_var_declarator,
        )
    }

    fn emit_var_declarator(&mut self, n: &VarDeclarator) -> EmitResult {
        if n.definite {
            return Err(EmitError::unimplemented(NodeKind::TsModifier));
        }
        self.emit_pat(&n.id)?;
        if let Some(init) = &n.init {
            self.write_formatting_space();
            self.write("=");
            self.write_formatting_space();
            self.emit_expr(init)?;
        }
        Ok(())
    }
}
