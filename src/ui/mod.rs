//! String-based convenience API for quick usage and rendering.

use crate::calculus::differentiate as differentiate_expr;
use crate::error::Result;
use crate::expr::Expr;
use crate::format::render;
use crate::parser::parse as parse_expr;
use crate::simplify::simplify as simplify_expr;

pub fn parse(input: &str) -> Result<Expr> {
    parse_expr(input)
}

pub fn differentiate(input: &str) -> Result<Expr> {
    let expr = parse_expr(input)?;
    simplify_expr(differentiate_expr(&expr))
}

pub fn diff(input: &str) -> Result<String> {
    Ok(render(&differentiate(input)?))
}

pub fn simplify(input: &str) -> Result<Expr> {
    let expr = parse_expr(input)?;
    simplify_expr(expr)
}

pub fn simp(input: &str) -> Result<String> {
    Ok(render(&simplify(input)?))
}
