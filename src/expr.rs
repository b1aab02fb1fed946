//! Expression tree definitions and helpers.

use std::fmt;

use num_traits::{One, Zero};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// The differentiation variable `x`.
    Var,
    /// A numeric constant.
    Num(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Ln(Box<Expr>),
    Exp(Box<Expr>),
}

impl Expr {
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Num(v) if v.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Num(v) if v.is_one())
    }

    /// Terminal nodes: the variable or a numeric constant.
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Var | Expr::Num(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Expr::Num(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::render(self))
    }
}

pub fn zero() -> Expr {
    Expr::Num(0.0)
}

pub fn one() -> Expr {
    Expr::Num(1.0)
}

pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(a.boxed(), b.boxed())
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sub(a.boxed(), b.boxed())
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(a.boxed(), b.boxed())
}

pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::Div(a.boxed(), b.boxed())
}

pub fn pow(a: Expr, b: Expr) -> Expr {
    Expr::Pow(a.boxed(), b.boxed())
}
