//! Token adjacency analysis.
//!
//! Answers whether two tokens written back to back would merge into one
//! (`typeof` + `x` = `typeofx`, `+` + `+x` = `++x`), in which case a
//! mandatory space is required even in compact mode. All functions here are
//! pure.

use jsprint_ast::{
    BinExpr, BinaryOp, BlockStmtOrExpr, Decl, Expr, ExprOrSpread, Pat, Stmt, UnaryExpr, UnaryOp,
    UpdateOp, VarDeclOrExpr, VarDeclOrPat,
};

/// Nodes whose printed form may begin with an identifier character.
pub trait LeadingToken {
    /// True if the first printed character is a letter, digit, `_` or `$`
    /// (or a keyword), so that a preceding keyword needs a separating space.
    fn starts_with_alpha_num(&self) -> bool;
}

#[inline]
pub fn starts_with_alpha_num<T: LeadingToken + ?Sized>(node: &T) -> bool {
    node.starts_with_alpha_num()
}

impl<T: LeadingToken + ?Sized> LeadingToken for Box<T> {
    fn starts_with_alpha_num(&self) -> bool {
        (**self).starts_with_alpha_num()
    }
}

impl LeadingToken for Expr {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            Expr::Super(_)
            | Expr::Ident(_)
            | Expr::Bool(_)
            | Expr::Num(_)
            | Expr::Null(_)
            | Expr::Await(_)
            | Expr::Fn(_)
            | Expr::Class(_)
            | Expr::This(_)
            | Expr::Yield(_)
            | Expr::New(_)
            | Expr::MetaProp(_) => true,

            Expr::Str(_)
            | Expr::Regex(_)
            | Expr::Array(_)
            | Expr::Object(_)
            | Expr::Paren(_)
            | Expr::Tpl(_)
            | Expr::PrivateName(_) => false,

            Expr::Bin(n) => n.left.starts_with_alpha_num(),
            Expr::Assign(n) => n.left.starts_with_alpha_num(),
            Expr::Cond(n) => n.test.starts_with_alpha_num(),
            Expr::Call(n) => n.callee.starts_with_alpha_num(),
            Expr::Member(n) => n.object.starts_with_alpha_num(),
            Expr::TaggedTpl(n) => n.tag.starts_with_alpha_num(),
            Expr::Seq(n) => n
                .expressions
                .first()
                .is_none_or(|first| first.starts_with_alpha_num()),

            Expr::Update(n) => !n.prefix && n.argument.starts_with_alpha_num(),
            Expr::Unary(n) => n.operator.is_keyword(),
            Expr::Arrow(n) => n.is_async,

            Expr::JSXEmpty(_) | Expr::JSXElement(_) | Expr::JSXFragment(_) => false,
            Expr::JSXNamespacedName(_) | Expr::JSXMember(_) | Expr::JSXText(_) => true,

            // `<T>expr`
            Expr::TsTypeAssertion(_) => false,
            Expr::TsNonNull(n) | Expr::TsAs(n) | Expr::TsTypeCast(n) => {
                n.expression.starts_with_alpha_num()
            }
        }
    }
}

impl LeadingToken for Pat {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            Pat::Ident(_) => true,
            Pat::Array(_) | Pat::Object(_) | Pat::Rest(_) => false,
            Pat::Assign(n) => n.left.starts_with_alpha_num(),
            Pat::Expr(e) => e.starts_with_alpha_num(),
        }
    }
}

impl LeadingToken for Decl {
    fn starts_with_alpha_num(&self) -> bool {
        true
    }
}

impl LeadingToken for Stmt {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            Stmt::Block(_) | Stmt::Empty(_) => false,
            Stmt::Debugger(_)
            | Stmt::With(_)
            | Stmt::Return(_)
            | Stmt::Labeled(_)
            | Stmt::Break(_)
            | Stmt::Continue(_)
            | Stmt::If(_)
            | Stmt::Switch(_)
            | Stmt::Throw(_)
            | Stmt::Try(_)
            | Stmt::While(_)
            | Stmt::DoWhile(_)
            | Stmt::For(_)
            | Stmt::ForIn(_)
            | Stmt::ForOf(_) => true,
            Stmt::Decl(d) => d.starts_with_alpha_num(),
            Stmt::Expr(e) => e.starts_with_alpha_num(),
        }
    }
}

impl LeadingToken for ExprOrSpread {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            ExprOrSpread::Spread(_) => false,
            ExprOrSpread::Expr(e) => e.starts_with_alpha_num(),
        }
    }
}

impl LeadingToken for BlockStmtOrExpr {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            BlockStmtOrExpr::BlockStmt(_) => false,
            BlockStmtOrExpr::Expr(e) => e.starts_with_alpha_num(),
        }
    }
}

impl LeadingToken for VarDeclOrExpr {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            VarDeclOrExpr::VarDecl(_) => true,
            VarDeclOrExpr::Expr(e) => e.starts_with_alpha_num(),
        }
    }
}

impl LeadingToken for VarDeclOrPat {
    fn starts_with_alpha_num(&self) -> bool {
        match self {
            VarDeclOrPat::VarDecl(_) => true,
            VarDeclOrPat::Pat(p) => p.starts_with_alpha_num(),
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

/// Whether a unary operator needs a mandatory space before its operand.
///
/// `typeof x` and `- -x` need one; `-x` and `!x` do not.
pub fn should_emit_ws_before_operand(node: &UnaryExpr) -> bool {
    match node.operator {
        UnaryOp::Void | UnaryOp::TypeOf | UnaryOp::Delete => node.argument.starts_with_alpha_num(),
        UnaryOp::Plus => continues_sign(&node.argument, UnaryOp::Plus, UpdateOp::PlusPlus),
        UnaryOp::Minus => continues_sign(&node.argument, UnaryOp::Minus, UpdateOp::MinusMinus),
        UnaryOp::Bang | UnaryOp::Tilde => false,
    }
}

/// True if `operand` begins with `sign` or with the prefix update built
/// from it.
fn continues_sign(operand: &Expr, sign: UnaryOp, update: UpdateOp) -> bool {
    match operand {
        Expr::Update(u) => u.prefix && u.operator == update,
        Expr::Unary(u) => u.operator == sign,
        _ => false,
    }
}

/// Whether the space before a binary operator is mandatory.
pub fn needs_space_before_binary_op(node: &BinExpr) -> bool {
    node.operator.is_keyword() || matches!(&*node.left, Expr::Update(u) if !u.prefix)
}

/// Whether the space after a binary operator is mandatory.
///
/// Decided by the first token of the right operand, which may sit deep
/// inside it (`a- -b*c`, `a/ /re/.test(s)`).
pub fn needs_space_after_binary_op(node: &BinExpr) -> bool {
    if node.operator.is_keyword() {
        return true;
    }
    match leftmost(&node.right) {
        Expr::Update(u) if u.prefix => true,
        Expr::Unary(u) => match u.operator {
            UnaryOp::Plus => node.operator.as_str().ends_with('+'),
            UnaryOp::Minus => node.operator.as_str().ends_with('-'),
            // `<!--` opens an HTML-like comment in scripts
            UnaryOp::Bang => node.operator == BinaryOp::Lt && is_prefix_decrement(&u.argument),
            _ => false,
        },
        Expr::Regex(_) => node.operator == BinaryOp::Div,
        _ => false,
    }
}

fn is_prefix_decrement(expr: &Expr) -> bool {
    matches!(expr, Expr::Update(u) if u.prefix && u.operator == UpdateOp::MinusMinus)
}

// =============================================================================
// Statement and arrow-body position
// =============================================================================

/// The leftmost leaf printed for `expr`: the node whose first token is the
/// first token of the whole expression.
fn leftmost(expr: &Expr) -> &Expr {
    match expr {
        Expr::Bin(n) => leftmost(&n.left),
        Expr::Cond(n) => leftmost(&n.test),
        Expr::Call(n) => leftmost(&n.callee),
        Expr::Member(n) => leftmost(&n.object),
        Expr::TaggedTpl(n) => leftmost(&n.tag),
        Expr::Seq(n) => n.expressions.first().map_or(expr, |first| leftmost(first)),
        Expr::Update(n) if !n.prefix => leftmost(&n.argument),
        Expr::Assign(n) => match &*n.left {
            Pat::Expr(left) => leftmost(left),
            _ => expr,
        },
        Expr::TsNonNull(n) | Expr::TsAs(n) | Expr::TsTypeCast(n) => leftmost(&n.expression),
        _ => expr,
    }
}

/// `{`-led expressions that would parse as a block.
fn starts_with_brace(expr: &Expr) -> bool {
    match leftmost(expr) {
        Expr::Object(_) => true,
        Expr::Assign(n) => matches!(&*n.left, Pat::Object(_)),
        _ => false,
    }
}

/// Whether an expression statement must be parenthesized to avoid being
/// read as a block or a function/class declaration.
pub fn expr_stmt_needs_parens(expr: &Expr) -> bool {
    starts_with_brace(expr) || matches!(leftmost(expr), Expr::Fn(_) | Expr::Class(_))
}

/// Whether a concise arrow body must be parenthesized (`() => ({})`).
pub fn arrow_body_needs_parens(expr: &Expr) -> bool {
    starts_with_brace(expr) || matches!(expr, Expr::Seq(_))
}

#[cfg(test)]
#[path = "tests/spacing.rs"]
mod tests;
