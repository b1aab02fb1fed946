use crate::expr::{Expr, add, div, mul, one, pow, sub, zero};

/// Differentiates `expr` with respect to the variable `x`.
///
/// The result is a fresh tree: operands reused by a rule are cloned into the
/// output, so the input is never aliased or mutated. The output is the raw
/// rule application; feed it to [`crate::simplify::simplify`] to clean it up.
pub fn differentiate(expr: &Expr) -> Expr {
    match expr {
        Expr::Num(_) => zero(),
        Expr::Var => one(),

        Expr::Add(a, b) => add(differentiate(a), differentiate(b)),
        Expr::Sub(a, b) => sub(differentiate(a), differentiate(b)),
        Expr::Mul(a, b) => product_rule(a, b),
        Expr::Div(a, b) => quotient_rule(a, b),
        Expr::Pow(base, exp) => power_rule(base, exp),

        Expr::Sin(a) => mul(differentiate(a), Expr::Cos(a.clone())),
        Expr::Cos(a) => mul(
            differentiate(a),
            mul(Expr::Num(-1.0), Expr::Sin(a.clone())),
        ),
        Expr::Tan(a) => div(
            differentiate(a),
            pow(Expr::Cos(a.clone()), Expr::Num(2.0)),
        ),
        Expr::Ln(a) => div(differentiate(a), (**a).clone()),
        Expr::Exp(a) => mul(differentiate(a), Expr::Exp(a.clone())),
    }
}

// d(uv) = u'v + uv'
fn product_rule(a: &Expr, b: &Expr) -> Expr {
    add(
        mul(differentiate(a), b.clone()),
        mul(a.clone(), differentiate(b)),
    )
}

// d(u/v) = (u'v - uv') / v^2
fn quotient_rule(a: &Expr, b: &Expr) -> Expr {
    div(
        sub(
            mul(differentiate(a), b.clone()),
            mul(a.clone(), differentiate(b)),
        ),
        pow(b.clone(), Expr::Num(2.0)),
    )
}

fn power_rule(base: &Expr, exp: &Expr) -> Expr {
    match exp {
        // d(u^n) = n * u^(n-1) * u', with a freshly built exponent literal.
        Expr::Num(n) => mul(
            mul(Expr::Num(*n), pow(base.clone(), Expr::Num(n - 1.0))),
            differentiate(base),
        ),
        // General exponent: d(u^v) = u^v * (v' ln u + v u'/u).
        _ => mul(
            pow(base.clone(), exp.clone()),
            add(
                mul(differentiate(exp), Expr::Ln(base.clone().boxed())),
                div(mul(exp.clone(), differentiate(base)), base.clone()),
            ),
        ),
    }
}
