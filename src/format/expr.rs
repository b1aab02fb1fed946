use crate::expr::Expr;

/// Renders `expr` in canonical prefix form, e.g. `(+ 1 (* 2 x))`.
///
/// This is the one textual form of a tree: program output and test oracles
/// both compare against it.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Var => "x".to_string(),
        Expr::Num(value) => show_number(*value),

        Expr::Add(a, b) => binary("+", a, b),
        Expr::Sub(a, b) => binary("-", a, b),
        Expr::Mul(a, b) => binary("*", a, b),
        Expr::Div(a, b) => binary("/", a, b),
        Expr::Pow(a, b) => binary("^", a, b),

        Expr::Sin(a) => unary("sin", a),
        Expr::Cos(a) => unary("cos", a),
        Expr::Tan(a) => unary("tan", a),
        Expr::Ln(a) => unary("ln", a),
        Expr::Exp(a) => unary("exp", a),
    }
}

fn binary(symbol: &str, a: &Expr, b: &Expr) -> String {
    format!("({symbol} {} {})", render(a), render(b))
}

fn unary(symbol: &str, a: &Expr) -> String {
    format!("({symbol} {})", render(a))
}

// Integral values print with no decimal places, everything else with one.
fn show_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
