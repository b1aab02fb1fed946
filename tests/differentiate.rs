use symdiff::{differentiate, parse, render, simplify};

fn assert_diff_eq(input: &str, expected: &str) {
    let expr = parse(input).expect("parse input");
    let got = simplify(differentiate(&expr)).expect("simplify derivative");
    assert_eq!(render(&got), expected, "d/dx {input}");
}

#[test]
fn basic_vars_and_constants() {
    assert_diff_eq("x", "1");
    assert_diff_eq("5", "0");
    assert_diff_eq("3.5", "0");
}

#[test]
fn sums_and_differences() {
    assert_diff_eq("(+ x x)", "2");
    assert_diff_eq("(- x 1)", "1");
    assert_diff_eq("(+ 1 (* 2 x))", "2");
}

#[test]
fn products_and_quotients() {
    assert_diff_eq("(* 2 x)", "2");
    assert_diff_eq("(* x x)", "(+ x x)");
    assert_diff_eq("(/ x 2)", "0.5");
    assert_diff_eq("(/ 1 x)", "(/ -1 (^ x 2))");
}

#[test]
fn constant_exponent_power_rule() {
    assert_diff_eq("(^ x 2)", "(* 2 x)");
    assert_diff_eq("(^ x 3)", "(* 3 (^ x 2))");
}

#[test]
fn general_exponent_power_rule() {
    assert_diff_eq("(^ x x)", "(* (^ x x) (+ (ln x) (/ x x)))");
}

#[test]
fn function_rules() {
    assert_diff_eq("(sin x)", "(cos x)");
    assert_diff_eq("(cos x)", "(* -1 (sin x))");
    assert_diff_eq("(tan x)", "(/ 1 (^ (cos x) 2))");
    assert_diff_eq("(ln x)", "(/ 1 x)");
    assert_diff_eq("(exp x)", "(exp x)");
}

#[test]
fn chain_rule_through_function_arguments() {
    assert_diff_eq("(sin (* 2 x))", "(* 2 (cos (* 2 x)))");
    assert_diff_eq("(exp (^ x 2))", "(* (* 2 x) (exp (^ x 2)))");
}

#[test]
fn differentiation_leaves_the_input_untouched() {
    let expr = parse("(^ x 2)").expect("parse input");
    let before = expr.clone();
    let _ = differentiate(&expr);
    assert_eq!(expr, before);
    assert_eq!(render(&expr), "(^ x 2)");
}
