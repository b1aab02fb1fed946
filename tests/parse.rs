use symdiff::{parse, render};

fn assert_roundtrip(input: &str) {
    let expr = parse(input).expect("parse input");
    assert_eq!(render(&expr), input, "roundtrip {input}");
}

#[test]
fn canonical_inputs_roundtrip() {
    assert_roundtrip("x");
    assert_roundtrip("42");
    assert_roundtrip("2.5");
    assert_roundtrip("(+ 1 (* 2 x))");
    assert_roundtrip("(- (+ x 1) (* x 2.5))");
    assert_roundtrip("(sin (cos (tan x)))");
    assert_roundtrip("(/ (ln x) (exp x))");
    assert_roundtrip("(^ x 2)");
}

#[test]
fn rendering_canonicalizes_number_spelling() {
    let expr = parse("2.50").expect("parse");
    assert_eq!(render(&expr), "2.5");

    let expr = parse("07").expect("parse");
    assert_eq!(render(&expr), "7");
}

#[test]
fn rendering_canonicalizes_whitespace() {
    let expr = parse("( +   1\tx )").expect("parse");
    assert_eq!(render(&expr), "(+ 1 x)");
}
