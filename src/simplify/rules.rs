use crate::error::{DiffError, Result};
use crate::expr::{Expr, one, zero};

/// Simplifies `expr` in one bottom-up pass: children first, then the
/// identities below at the current node. No fixpoint iteration, so a result
/// may still contain a pattern that another pass would rewrite.
///
/// Constant folding applies when both operands are numbers. When both
/// operands are terminal (number or the variable), the identity rules
/// `a+0`, `a-0`, `a*1`, `a/1`, `a^1`, `a^0`, `1^b` and the annihilators
/// `0*a`, `0/b` fire as well; a terminal numerator over the literal zero is
/// [`DiffError::DivisionByZero`]. With exactly one terminal side only the
/// addition/multiplication identities and annihilators apply. Everything
/// else is returned with its simplified children, unchanged otherwise.
pub fn simplify(expr: Expr) -> Result<Expr> {
    match expr {
        Expr::Add(a, b) => Ok(simplify_add(simplify(*a)?, simplify(*b)?)),
        Expr::Sub(a, b) => Ok(simplify_sub(simplify(*a)?, simplify(*b)?)),
        Expr::Mul(a, b) => Ok(simplify_mul(simplify(*a)?, simplify(*b)?)),
        Expr::Div(a, b) => simplify_div(simplify(*a)?, simplify(*b)?),
        Expr::Pow(a, b) => Ok(simplify_pow(simplify(*a)?, simplify(*b)?)),

        Expr::Sin(a) => Ok(Expr::Sin(simplify(*a)?.boxed())),
        Expr::Cos(a) => Ok(Expr::Cos(simplify(*a)?.boxed())),
        Expr::Tan(a) => Ok(Expr::Tan(simplify(*a)?.boxed())),
        Expr::Ln(a) => Ok(Expr::Ln(simplify(*a)?.boxed())),
        Expr::Exp(a) => Ok(Expr::Exp(simplify(*a)?.boxed())),

        leaf => Ok(leaf),
    }
}

fn simplify_add(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x + y),
        (a, b) if a.is_zero() => b,
        (a, b) if b.is_zero() => a,
        (a, b) => Expr::Add(a.boxed(), b.boxed()),
    }
}

fn simplify_sub(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x - y),
        (a, b) if a.is_literal() && b.is_zero() => a,
        (a, b) => Expr::Sub(a.boxed(), b.boxed()),
    }
}

fn simplify_mul(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x * y),
        (a, b) if a.is_zero() || b.is_zero() => zero(),
        (a, b) if a.is_one() => b,
        (a, b) if b.is_one() => a,
        (a, b) => Expr::Mul(a.boxed(), b.boxed()),
    }
}

fn simplify_div(a: Expr, b: Expr) -> Result<Expr> {
    match (a, b) {
        (a, b) if a.is_literal() && b.is_zero() => Err(DiffError::DivisionByZero),
        (Expr::Num(x), Expr::Num(y)) => Ok(Expr::Num(x / y)),
        (a, b) if a.is_literal() && b.is_one() => Ok(a),
        (a, b) if a.is_zero() && b.is_literal() => Ok(zero()),
        (a, b) => Ok(Expr::Div(a.boxed(), b.boxed())),
    }
}

fn simplify_pow(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (a, b) if a.is_literal() && b.is_one() => a,
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x.powf(y)),
        (a, b) if a.is_literal() && b.is_zero() => one(),
        (a, b) if a.is_one() && b.is_literal() => one(),
        (a, b) => Expr::Pow(a.boxed(), b.boxed()),
    }
}
