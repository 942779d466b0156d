//! Tests for span provenance and line predicates

use jsprint_common::{Span, Spanned};

#[test]
fn test_context_zero_is_original() {
    let span = Span::new(0, 10, 1, 1);
    assert!(!span.is_synthesized());
    assert!(Span::synthesized().is_synthesized());
    assert!(span.with_ctxt(7).is_synthesized());
}

#[test]
fn test_same_line_compares_start_lines() {
    let a = Span::new(0, 40, 3, 9);
    let b = Span::new(10, 12, 3, 3);
    let c = Span::new(50, 52, 4, 4);
    assert!(a.is_on_same_line(&b));
    assert!(!a.is_on_same_line(&c));
}

#[test]
fn test_single_line() {
    assert!(Span::new(0, 3, 2, 2).is_on_single_line());
    assert!(!Span::new(0, 30, 2, 5).is_on_single_line());
}

#[test]
fn test_missing_slot_is_synthesized() {
    let hole: Option<Span> = None;
    assert!(hole.span().is_synthesized());
    assert_eq!(Some(Span::new(1, 2, 1, 1)).span().start, 1);
}

#[test]
fn test_deserialize_accepts_context_alias() {
    let span: Span = serde_json::from_str(
        r#"{"start":1,"end":4,"context":3,"loc":{"start":{"line":2,"column":0},"end":{"line":2,"column":3}}}"#,
    )
    .unwrap();
    assert_eq!(span.ctxt, 3);
    assert_eq!(span.start_line(), 2);

    let bare: Span = serde_json::from_str(r#"{"start":0,"end":0}"#).unwrap();
    assert_eq!(bare, Span::DUMMY);
}
