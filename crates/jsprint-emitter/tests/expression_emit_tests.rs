//! Expression rendering, with emphasis on mandatory spacing in compact mode.

mod common;

use common::*;
use jsprint_ast::*;

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_binary_expression() {
    let expr = bin(BinaryOp::Add, id("a"), id("b"));
    assert_eq!(compact_expr(&expr), "a+b");
    assert_eq!(formatted_expr(&expr), "a + b");
}

#[test]
fn test_keyword_binary_operators_are_always_spaced() {
    assert_eq!(compact_expr(&bin(BinaryOp::In, id("a"), id("b"))), "a in b");
    assert_eq!(
        compact_expr(&bin(BinaryOp::InstanceOf, id("a"), id("B"))),
        "a instanceof B"
    );
    assert_eq!(
        compact_expr(&bin(BinaryOp::In, string("k"), id("o"))),
        "'k' in o"
    );
}

#[test]
fn test_nested_signs_do_not_merge() {
    let plus = unary(UnaryOp::Plus, unary(UnaryOp::Plus, id("x")));
    assert_eq!(compact_expr(&plus), "+ +x");

    let minus = unary(UnaryOp::Minus, unary(UnaryOp::Minus, id("x")));
    assert_eq!(compact_expr(&minus), "- -x");

    let decrement = unary(UnaryOp::Minus, update(UpdateOp::MinusMinus, true, id("x")));
    assert_eq!(compact_expr(&decrement), "- --x");

    let mixed = unary(UnaryOp::Minus, unary(UnaryOp::Plus, id("x")));
    assert_eq!(compact_expr(&mixed), "-+x");
}

#[test]
fn test_binary_operand_signs_do_not_merge() {
    let sub = bin(BinaryOp::Sub, id("a"), unary(UnaryOp::Minus, id("b")));
    assert_eq!(compact_expr(&sub), "a- -b");

    let add = bin(BinaryOp::Add, id("a"), update(UpdateOp::PlusPlus, true, id("b")));
    assert_eq!(compact_expr(&add), "a+ ++b");

    let postfix = bin(BinaryOp::Add, update(UpdateOp::PlusPlus, false, id("a")), id("b"));
    assert_eq!(compact_expr(&postfix), "a++ +b");
}

#[test]
fn test_division_by_regex_literal() {
    let regex = Expr::Regex(Regex {
        span: Span::DUMMY,
        pattern: Str::new("re"),
        flags: None,
    });
    let expr = bin(BinaryOp::Div, id("a"), regex);
    assert_eq!(compact_expr(&expr), "a/ /re/");
}

#[test]
fn test_nested_right_operand_first_token_does_not_merge() {
    let neg_times_c = bin(BinaryOp::Mul, unary(UnaryOp::Minus, id("b")), id("c"));
    assert_eq!(compact_expr(&bin(BinaryOp::Sub, id("a"), neg_times_c)), "a- -b*c");

    let dec_times_c = bin(
        BinaryOp::Mul,
        update(UpdateOp::MinusMinus, true, id("b")),
        id("c"),
    );
    assert_eq!(compact_expr(&bin(BinaryOp::Sub, id("a"), dec_times_c)), "a- --b*c");

    let regex = Expr::Regex(Regex {
        span: Span::DUMMY,
        pattern: Str::new("re"),
        flags: None,
    });
    let test_call = call(member(regex, "test"), vec![id("s")]);
    assert_eq!(compact_expr(&bin(BinaryOp::Div, id("a"), test_call)), "a/ /re/.test(s)");
}

#[test]
fn test_less_than_before_negated_decrement() {
    let not_dec = unary(UnaryOp::Bang, update(UpdateOp::MinusMinus, true, id("b")));
    assert_eq!(compact_expr(&bin(BinaryOp::Lt, id("a"), not_dec)), "a< !--b");

    let not_b = unary(UnaryOp::Bang, id("b"));
    assert_eq!(compact_expr(&bin(BinaryOp::Lt, id("a"), not_b)), "a<!b");
}

#[test]
fn test_keyword_unary_operators() {
    assert_eq!(compact_expr(&unary(UnaryOp::TypeOf, id("x"))), "typeof x");
    assert_eq!(compact_expr(&unary(UnaryOp::Void, num(0.0))), "void 0");
    assert_eq!(
        compact_expr(&unary(UnaryOp::Delete, member(id("o"), "p"))),
        "delete o.p"
    );

    let parenthesized = unary(UnaryOp::TypeOf, paren(id("x")));
    assert_eq!(compact_expr(&parenthesized), "typeof(x)");
    assert_eq!(formatted_expr(&parenthesized), "typeof (x)");
}

#[test]
fn test_symbolic_unary_operators() {
    assert_eq!(compact_expr(&unary(UnaryOp::Bang, id("x"))), "!x");
    assert_eq!(formatted_expr(&unary(UnaryOp::Tilde, id("x"))), "~x");
}

#[test]
fn test_update_expressions() {
    assert_eq!(compact_expr(&update(UpdateOp::PlusPlus, false, id("i"))), "i++");
    assert_eq!(compact_expr(&update(UpdateOp::MinusMinus, true, id("i"))), "--i");
}

#[test]
fn test_assignment_operators() {
    let expr = assign(AssignOp::AddAssign, pat("a"), num(1.0));
    assert_eq!(compact_expr(&expr), "a+=1");
    assert_eq!(formatted_expr(&expr), "a += 1");

    let nullish = assign(AssignOp::NullishAssign, pat("a"), id("b"));
    assert_eq!(formatted_expr(&nullish), "a ??= b");
}

#[test]
fn test_conditional_expression() {
    let expr = Expr::Cond(CondExpr {
        span: Span::DUMMY,
        test: Box::new(id("a")),
        consequent: Box::new(id("b")),
        alternate: Box::new(id("c")),
    });
    assert_eq!(compact_expr(&expr), "a?b:c");
    assert_eq!(formatted_expr(&expr), "a ? b : c");
}

#[test]
fn test_parenthesized_expression() {
    let expr = bin(
        BinaryOp::Mul,
        paren(bin(BinaryOp::Add, id("a"), id("b"))),
        id("c"),
    );
    assert_eq!(compact_expr(&expr), "(a+b)*c");
}

#[test]
fn test_sequence_expression() {
    let expr = seq(vec![id("a"), id("b")]);
    assert_eq!(compact_expr(&expr), "a,b");
    assert_eq!(formatted_expr(&expr), "a, b");
}

// =============================================================================
// Calls and members
// =============================================================================

#[test]
fn test_call_arguments() {
    assert_eq!(compact_expr(&call(id("f"), vec![])), "f()");
    assert_eq!(formatted_expr(&call(id("f"), vec![id("a"), id("b")])), "f(a, b)");
    assert_eq!(compact_expr(&call(id("f"), vec![id("a"), id("b")])), "f(a,b)");
}

#[test]
fn test_spread_argument() {
    let expr = Expr::Call(CallExpr {
        span: Span::DUMMY,
        callee: Box::new(id("f")),
        arguments: vec![ExprOrSpread::Spread(spread(id("args")))],
        type_arguments: None,
    });
    assert_eq!(compact_expr(&expr), "f(...args)");
}

#[test]
fn test_new_expression_arguments() {
    assert_eq!(compact_expr(&new_expr(id("Foo"), None)), "new Foo");
    assert_eq!(compact_expr(&new_expr(id("Foo"), Some(vec![]))), "new Foo()");
    assert_eq!(
        compact_expr(&new_expr(id("Foo"), Some(vec![num(1.0)]))),
        "new Foo(1)"
    );
}

#[test]
fn test_member_access() {
    assert_eq!(compact_expr(&member(id("a"), "b")), "a.b");
    assert_eq!(compact_expr(&computed_member(id("a"), num(0.0))), "a[0]");

    let super_call = call(member(Expr::Super(Super { span: Span::DUMMY }), "m"), vec![]);
    assert_eq!(compact_expr(&super_call), "super.m()");
}

#[test]
fn test_member_access_on_integer_literal() {
    assert_eq!(compact_expr(&member(num(1.0), "toString")), "1..toString");
    assert_eq!(compact_expr(&member(num(1.5), "toFixed")), "1.5.toFixed");
}

#[test]
fn test_private_member_access() {
    let expr = Expr::Member(MemberExpr {
        span: Span::DUMMY,
        object: Box::new(Expr::This(ThisExpr { span: Span::DUMMY })),
        property: Box::new(Expr::PrivateName(private_name("x"))),
        computed: false,
    });
    assert_eq!(compact_expr(&expr), "this.#x");
}

#[test]
fn test_meta_property() {
    let expr = Expr::MetaProp(MetaPropExpr {
        span: Span::DUMMY,
        meta: ident("new"),
        property: ident("target"),
    });
    assert_eq!(compact_expr(&expr), "new.target");
}

// =============================================================================
// Functions, arrows, yield, await
// =============================================================================

#[test]
fn test_arrow_functions() {
    let identity = arrow(vec![pat("a")], BlockStmtOrExpr::Expr(Box::new(id("a"))));
    assert_eq!(compact_expr(&identity), "(a)=>a");
    assert_eq!(formatted_expr(&identity), "(a) => a");

    let block_body = arrow(vec![], BlockStmtOrExpr::BlockStmt(block(vec![])));
    assert_eq!(compact_expr(&block_body), "()=>{}");
}

#[test]
fn test_async_arrow() {
    let Expr::Arrow(mut expr) = arrow(vec![pat("a")], BlockStmtOrExpr::Expr(Box::new(id("a"))))
    else {
        unreachable!()
    };
    expr.is_async = true;
    let expr = Expr::Arrow(expr);

    assert_eq!(compact_expr(&expr), "async(a)=>a");
    assert_eq!(formatted_expr(&expr), "async (a) => a");
}

#[test]
fn test_arrow_object_body_is_parenthesized() {
    let expr = arrow(vec![], BlockStmtOrExpr::Expr(Box::new(object(vec![]))));
    assert_eq!(compact_expr(&expr), "()=>({})");

    let sequence = arrow(
        vec![],
        BlockStmtOrExpr::Expr(Box::new(seq(vec![id("a"), id("b")]))),
    );
    assert_eq!(compact_expr(&sequence), "()=>(a,b)");
}

#[test]
fn test_named_function_expression() {
    let expr = fn_expr(Some("f"), function(vec![pat("a")], vec![ret(Some(id("a")))]));
    assert_eq!(compact_expr(&expr), "function f(a){return a;}");
}

#[test]
fn test_yield_expressions() {
    let plain = Expr::Yield(YieldExpr {
        argument: Some(Box::new(id("x"))),
        ..Default::default()
    });
    assert_eq!(compact_expr(&plain), "yield x");

    let delegate = Expr::Yield(YieldExpr {
        argument: Some(Box::new(id("g"))),
        delegate: true,
        ..Default::default()
    });
    assert_eq!(compact_expr(&delegate), "yield*g");
    assert_eq!(formatted_expr(&delegate), "yield* g");

    let bare = Expr::Yield(YieldExpr::default());
    assert_eq!(compact_expr(&bare), "yield");

    let bracket = Expr::Yield(YieldExpr {
        argument: Some(Box::new(array(vec![]))),
        ..Default::default()
    });
    assert_eq!(compact_expr(&bracket), "yield[]");
}

#[test]
fn test_await_expression() {
    let expr = Expr::Await(AwaitExpr {
        span: Span::DUMMY,
        argument: Box::new(call(id("f"), vec![])),
    });
    assert_eq!(compact_expr(&expr), "await f()");
}

// =============================================================================
// Array and object literals
// =============================================================================

#[test]
fn test_array_literal() {
    let expr = array(vec![Some(num(1.0)), Some(num(2.0))]);
    assert_eq!(compact_expr(&expr), "[1,2]");
    assert_eq!(formatted_expr(&expr), "[1, 2]");
}

#[test]
fn test_array_holes() {
    let expr = array(vec![Some(id("a")), None, Some(id("b"))]);
    assert_eq!(compact_expr(&expr), "[a,,b]");
    assert_eq!(formatted_expr(&expr), "[a, , b]");
}

#[test]
fn test_trailing_array_hole_keeps_length() {
    assert_eq!(compact_expr(&array(vec![Some(id("a")), None])), "[a,,]");
    assert_eq!(compact_expr(&array(vec![None])), "[,]");
}

#[test]
fn test_empty_array_and_object() {
    assert_eq!(formatted_expr(&array(vec![])), "[]");
    assert_eq!(formatted_expr(&object(vec![])), "{}");
}

#[test]
fn test_object_literal() {
    let expr = object(vec![key_value("a", num(1.0)), Prop::Shorthand(ident("b"))]);
    assert_eq!(compact_expr(&expr), "{a:1,b}");
    assert_eq!(formatted_expr(&expr), "{ a: 1, b }");
}

#[test]
fn test_object_property_keys() {
    let expr = object(vec![
        Prop::KeyValue(KeyValueProp {
            key: PropName::Str(Str::new("a-b")),
            value: Box::new(num(1.0)),
        }),
        Prop::KeyValue(KeyValueProp {
            key: PropName::Num(Number::new(2.0)),
            value: Box::new(num(2.0)),
        }),
        Prop::KeyValue(KeyValueProp {
            key: PropName::Computed(Box::new(id("k"))),
            value: Box::new(num(3.0)),
        }),
    ]);
    assert_eq!(compact_expr(&expr), "{'a-b':1,2:2,[k]:3}");
}

#[test]
fn test_object_accessors_and_methods() {
    let getter = Prop::Getter(GetterProp {
        span: Span::DUMMY,
        key: PropName::Ident(ident("a")),
        body: Some(block(vec![ret(Some(num(1.0)))])),
    });
    let setter = Prop::Setter(SetterProp {
        span: Span::DUMMY,
        key: PropName::Ident(ident("a")),
        param: pat("v"),
        body: Some(block(vec![])),
    });
    let method = Prop::Method(MethodProp {
        key: PropName::Ident(ident("m")),
        function: Function {
            is_async: true,
            is_generator: true,
            ..function(vec![], vec![])
        },
    });

    let expr = object(vec![getter, setter, method]);
    assert_eq!(
        compact_expr(&expr),
        "{get a(){return 1;},set a(v){},async *m(){}}"
    );
}

#[test]
fn test_object_spread_and_assignment_shorthand() {
    let expr = Expr::Object(ObjectLit {
        span: Span::DUMMY,
        properties: vec![
            PropOrSpread::Spread(spread(id("o"))),
            PropOrSpread::from(Prop::Assign(AssignProp {
                key: ident("a"),
                value: Box::new(num(1.0)),
            })),
        ],
    });
    assert_eq!(compact_expr(&expr), "{...o,a=1}");
    assert_eq!(formatted_expr(&expr), "{ ...o, a = 1 }");
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_compact_output_is_deterministic() {
    let expr = call(
        member(id("console"), "log"),
        vec![bin(BinaryOp::Add, string("a"), unary(UnaryOp::Plus, id("b")))],
    );
    assert_eq!(compact_expr(&expr), compact_expr(&expr));
    assert_eq!(compact_expr(&expr), "console.log('a'+ +b)");
}
