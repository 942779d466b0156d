use super::*;
use jsprint_ast::{
    ArrowExpr, BlockStmt, Bool, EmptyStmt, Ident, Number, ParenExpr, Regex, SeqExpr, Span, Str,
    UpdateExpr,
};

fn ident(name: &str) -> Box<Expr> {
    Box::new(Expr::Ident(Ident::new(name)))
}

fn unary(operator: UnaryOp, argument: Box<Expr>) -> UnaryExpr {
    UnaryExpr {
        span: Span::DUMMY,
        operator,
        argument,
    }
}

fn update(operator: UpdateOp, prefix: bool, argument: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Update(UpdateExpr {
        span: Span::DUMMY,
        operator,
        prefix,
        argument,
    }))
}

fn bin(operator: BinaryOp, left: Box<Expr>, right: Box<Expr>) -> BinExpr {
    BinExpr {
        span: Span::DUMMY,
        operator,
        left,
        right,
    }
}

#[test]
fn test_keyword_led_expressions_start_alpha_num() {
    assert!(ident("x").starts_with_alpha_num());
    assert!(Expr::Num(Number::new(1.0)).starts_with_alpha_num());
    assert!(
        Expr::Bool(Bool {
            span: Span::DUMMY,
            value: true
        })
        .starts_with_alpha_num()
    );
    assert!(Expr::Unary(unary(UnaryOp::TypeOf, ident("x"))).starts_with_alpha_num());
}

#[test]
fn test_bracket_led_expressions_do_not_start_alpha_num() {
    assert!(!Expr::Str(Str::new("a")).starts_with_alpha_num());
    assert!(
        !Expr::Paren(ParenExpr {
            span: Span::DUMMY,
            expression: ident("x"),
        })
        .starts_with_alpha_num()
    );
    assert!(!Expr::Unary(unary(UnaryOp::Bang, ident("x"))).starts_with_alpha_num());
    assert!(!update(UpdateOp::PlusPlus, true, ident("x")).starts_with_alpha_num());
}

#[test]
fn test_composites_recurse_into_leftmost_child() {
    let string_first = Expr::Bin(bin(BinaryOp::Add, Box::new(Expr::Str(Str::new("a"))), ident("b")));
    assert!(!string_first.starts_with_alpha_num());

    let ident_first = Expr::Bin(bin(BinaryOp::Add, ident("a"), Box::new(Expr::Str(Str::new("b")))));
    assert!(ident_first.starts_with_alpha_num());

    assert!(update(UpdateOp::PlusPlus, false, ident("i")).starts_with_alpha_num());
}

#[test]
fn test_empty_sequence_starts_alpha_num() {
    let seq = Expr::Seq(SeqExpr::default());
    assert!(seq.starts_with_alpha_num());
}

#[test]
fn test_arrow_depends_on_async() {
    let mut arrow = ArrowExpr {
        span: Span::DUMMY,
        params: Vec::new(),
        body: BlockStmtOrExpr::Expr(ident("x")),
        is_async: false,
        is_generator: false,
        type_parameters: None,
        return_type: None,
    };
    assert!(!Expr::Arrow(arrow.clone()).starts_with_alpha_num());
    arrow.is_async = true;
    assert!(Expr::Arrow(arrow).starts_with_alpha_num());
}

#[test]
fn test_statements() {
    assert!(!Stmt::Block(BlockStmt::default()).starts_with_alpha_num());
    assert!(!Stmt::Empty(EmptyStmt::default()).starts_with_alpha_num());
    assert!(Stmt::Expr(ident("x")).starts_with_alpha_num());
}

#[test]
fn test_unary_operand_spacing() {
    assert!(should_emit_ws_before_operand(&unary(UnaryOp::TypeOf, ident("x"))));
    assert!(!should_emit_ws_before_operand(&unary(
        UnaryOp::TypeOf,
        Box::new(Expr::Str(Str::new("x")))
    )));

    let plus_plus = unary(UnaryOp::Plus, Box::new(Expr::Unary(unary(UnaryOp::Plus, ident("x")))));
    assert!(should_emit_ws_before_operand(&plus_plus));

    let minus_prefix_dec = unary(UnaryOp::Minus, update(UpdateOp::MinusMinus, true, ident("x")));
    assert!(should_emit_ws_before_operand(&minus_prefix_dec));

    let minus_plus = unary(UnaryOp::Minus, Box::new(Expr::Unary(unary(UnaryOp::Plus, ident("x")))));
    assert!(!should_emit_ws_before_operand(&minus_plus));

    assert!(!should_emit_ws_before_operand(&unary(UnaryOp::Minus, ident("x"))));
}

#[test]
fn test_binary_keyword_operators_always_spaced() {
    let node = bin(BinaryOp::In, ident("a"), ident("b"));
    assert!(needs_space_before_binary_op(&node));
    assert!(needs_space_after_binary_op(&node));

    let node = bin(BinaryOp::Add, ident("a"), ident("b"));
    assert!(!needs_space_before_binary_op(&node));
    assert!(!needs_space_after_binary_op(&node));
}

#[test]
fn test_binary_update_operands() {
    let node = bin(BinaryOp::Add, update(UpdateOp::PlusPlus, false, ident("a")), ident("b"));
    assert!(needs_space_before_binary_op(&node));

    let node = bin(BinaryOp::Add, ident("a"), update(UpdateOp::PlusPlus, true, ident("b")));
    assert!(needs_space_after_binary_op(&node));
}

#[test]
fn test_binary_sign_and_regex_operands() {
    let plus = Box::new(Expr::Unary(unary(UnaryOp::Plus, ident("b"))));
    assert!(needs_space_after_binary_op(&bin(BinaryOp::Add, ident("a"), plus.clone())));
    assert!(!needs_space_after_binary_op(&bin(BinaryOp::Sub, ident("a"), plus)));

    let regex = Box::new(Expr::Regex(Regex {
        span: Span::DUMMY,
        pattern: Str::new("x"),
        flags: None,
    }));
    assert!(needs_space_after_binary_op(&bin(BinaryOp::Div, ident("a"), regex)));
}

#[test]
fn test_binary_checks_first_token_of_nested_right_operand() {
    let neg = Box::new(Expr::Unary(unary(UnaryOp::Minus, ident("b"))));
    let product = Box::new(Expr::Bin(bin(BinaryOp::Mul, neg, ident("c"))));
    assert!(needs_space_after_binary_op(&bin(BinaryOp::Sub, ident("a"), product.clone())));
    assert!(!needs_space_after_binary_op(&bin(BinaryOp::Add, ident("a"), product)));

    let not_dec = Box::new(Expr::Unary(unary(
        UnaryOp::Bang,
        update(UpdateOp::MinusMinus, true, ident("b")),
    )));
    assert!(needs_space_after_binary_op(&bin(BinaryOp::Lt, ident("a"), not_dec.clone())));
    assert!(!needs_space_after_binary_op(&bin(BinaryOp::Gt, ident("a"), not_dec)));
}
