//! Integration tests for the structural parser
//!
//! These tests pin down the exact expression trees and error messages for
//! the parser's contract: top-level ordering, empty input, empty lists,
//! nesting, and the two unbalanced-bracket failures.

use sprig::sprig::parser::{parse, parse_source, Expr, Literal};

fn int(value: i64) -> Expr {
    Expr::Atom(Literal::Int(value))
}

fn var(name: &str) -> Expr {
    Expr::Atom(Literal::Var(name.to_string()))
}

#[test]
fn test_empty_input_is_not_an_error() {
    assert_eq!(parse::<&str>(&[]), Ok(vec![]));
}

#[test]
fn test_empty_list() {
    assert_eq!(parse(&["(", ")"]), Ok(vec![Expr::List(vec![])]));
}

#[test]
fn test_list_then_loose_atom() {
    assert_eq!(
        parse(&["(", "1", "2", ")", "3"]),
        Ok(vec![Expr::List(vec![int(1), int(2)]), int(3)])
    );
}

#[test]
fn test_nested_balance() {
    assert_eq!(
        parse(&["(", "(", "1", ")", "2", ")"]),
        Ok(vec![Expr::List(vec![Expr::List(vec![int(1)]), int(2)])])
    );
}

#[test]
fn test_top_level_count_matches_forms() {
    // Three top-level forms: atom, group, atom
    let exprs = parse(&["x", "(", "y", "z", ")", "w"]).unwrap();
    assert_eq!(exprs.len(), 3);
    assert_eq!(exprs, vec![var("x"), Expr::List(vec![var("y"), var("z")]), var("w")]);
}

#[test]
fn test_deep_nesting() {
    let exprs = parse(&["(", "(", "(", "(", "1", ")", ")", ")", ")"]).unwrap();
    assert_eq!(
        exprs,
        vec![Expr::List(vec![Expr::List(vec![Expr::List(vec![
            Expr::List(vec![int(1)])
        ])])])]
    );
}

#[test]
fn test_extra_close_on_empty_stack() {
    let error = parse(&[")"]).unwrap_err();
    assert_eq!(error.message(), "Extra )");
    assert_eq!(error.to_string(), "Syntax error: Extra )");
}

#[test]
fn test_extra_close_after_balanced_prefix() {
    let error = parse(&["(", "1", ")", ")"]).unwrap_err();
    assert_eq!(error.message(), "Extra )");
}

#[test]
fn test_missing_close() {
    let error = parse(&["("]).unwrap_err();
    assert_eq!(error.message(), "Missing )");
}

#[test]
fn test_missing_close_reported_once_for_many_frames() {
    let error = parse(&["(", "(", "(", "1"]).unwrap_err();
    assert_eq!(error.message(), "Missing )");
}

#[test]
fn test_classification_failure_aborts_parse() {
    // The invalid atom wins over the also-unbalanced bracket structure
    let error = parse(&["(", "1", "4.", "2"]).unwrap_err();
    assert_eq!(error.message(), "Invalid atomic symbol `4.`");
}

#[test]
fn test_all_literal_kinds_in_one_list() {
    let exprs = parse(&["(", "1", "-2.5", "#t", "#f", r#""s""#, "name", ")"]).unwrap();
    assert_eq!(
        exprs,
        vec![Expr::List(vec![
            int(1),
            Expr::Atom(Literal::Float(-2.5)),
            Expr::Atom(Literal::Bool(true)),
            Expr::Atom(Literal::Bool(false)),
            Expr::Atom(Literal::Str(r#""s""#.to_string())),
            var("name"),
        ])]
    );
}

#[test]
fn test_parse_source_end_to_end() {
    let exprs = parse_source("(define (double n) (* n 2))\n(double 21)\n").unwrap();
    assert_eq!(exprs.len(), 2);
    assert_eq!(
        exprs[0],
        Expr::List(vec![
            var("define"),
            Expr::List(vec![var("double"), var("n")]),
            Expr::List(vec![var("*"), var("n"), int(2)]),
        ])
    );
    assert_eq!(exprs[1], Expr::List(vec![var("double"), int(21)]));
}

#[test]
fn test_small_magnitude_float_renders_without_exponent() {
    // A shortest-representation formatter must not fall back to scientific
    // notation, which the classifier's float pattern does not accept
    let exprs = parse_source("(x 0.00001)").unwrap();
    let rendered = exprs[0].to_string();
    assert_eq!(rendered, "(x 0.00001)");
    assert_eq!(parse_source(&rendered), Ok(exprs));
}

#[test]
fn test_rendered_tree_reparses_to_equal_tree() {
    let exprs = parse_source(r#"(pair -3.5 "x y") () 7"#).unwrap();
    let rendered = exprs
        .iter()
        .map(|expr| expr.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(parse_source(&rendered), Ok(exprs));
}
