//! Recursive-descent parser for the fully parenthesized prefix grammar.
//!
//! ```text
//! expr    := '(' operator operand [operand] ')' | operand
//! operand := NUMBER | 'x' | expr
//! ```
//!
//! Prefix form makes grouping explicit, so there is no precedence climbing:
//! each `(` announces an operator, the operator's arity says how many
//! operands follow, and `)` closes the node.

use crate::error::{DiffError, Result};
use crate::expr::Expr;
use crate::token::{Token, tokenize};

/// Nesting cap; deeper input fails with [`DiffError::TooDeep`] instead of
/// exhausting the stack.
const MAX_DEPTH: usize = 256;

/// Parses source text straight to an expression tree.
pub fn parse(input: &str) -> Result<Expr> {
    parse_tokens(&tokenize(input)?)
}

/// Parses an already-lexed token sequence.
///
/// The whole sequence must form one expression; trailing tokens are a parse
/// error.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expr> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr(0)?;
    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(DiffError::Parse(format!("unexpected trailing token `{tok}`"))),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expr(&mut self, depth: usize) -> Result<Expr> {
        if depth >= MAX_DEPTH {
            return Err(DiffError::TooDeep(MAX_DEPTH));
        }
        if self.peek() != Some(Token::LeftParen) {
            return self.operand(depth);
        }
        self.pos += 1;
        let op = self
            .bump()
            .ok_or_else(|| DiffError::Parse("missing operator after `(`".to_string()))?;

        let node = match op {
            Token::Plus => {
                let (a, b) = self.binary_operands(depth)?;
                Expr::Add(a, b)
            }
            Token::Minus => {
                let (a, b) = self.binary_operands(depth)?;
                Expr::Sub(a, b)
            }
            Token::Star => {
                let (a, b) = self.binary_operands(depth)?;
                Expr::Mul(a, b)
            }
            Token::Slash => {
                let (a, b) = self.binary_operands(depth)?;
                Expr::Div(a, b)
            }
            Token::Caret => {
                let (a, b) = self.binary_operands(depth)?;
                Expr::Pow(a, b)
            }
            Token::Sin => Expr::Sin(self.operand(depth + 1)?.boxed()),
            Token::Cos => Expr::Cos(self.operand(depth + 1)?.boxed()),
            Token::Tan => Expr::Tan(self.operand(depth + 1)?.boxed()),
            Token::Ln => Expr::Ln(self.operand(depth + 1)?.boxed()),
            Token::Exp => Expr::Exp(self.operand(depth + 1)?.boxed()),
            other => {
                return Err(DiffError::Parse(format!(
                    "expected an operator after `(`, found `{other}`"
                )));
            }
        };

        match self.bump() {
            Some(Token::RightParen) => Ok(node),
            Some(other) => Err(DiffError::Parse(format!("expected `)`, found `{other}`"))),
            None => Err(DiffError::Parse("expected `)` before end of input".to_string())),
        }
    }

    fn binary_operands(&mut self, depth: usize) -> Result<(Box<Expr>, Box<Expr>)> {
        let lhs = self.operand(depth + 1)?.boxed();
        let rhs = self.operand(depth + 1)?.boxed();
        Ok((lhs, rhs))
    }

    fn operand(&mut self, depth: usize) -> Result<Expr> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.pos += 1;
                Ok(Expr::Num(value))
            }
            Some(Token::Var) => {
                self.pos += 1;
                Ok(Expr::Var)
            }
            Some(Token::LeftParen) => self.expr(depth),
            Some(other) => Err(DiffError::Parse(format!(
                "expected an operand, found `{other}`"
            ))),
            None => Err(DiffError::Parse(
                "expected an operand before end of input".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_literals() {
        assert_eq!(parse("42").unwrap(), Expr::Num(42.0));
        assert_eq!(parse("x").unwrap(), Expr::Var);
    }

    #[test]
    fn parses_a_nested_expression() {
        let expr = parse("(+ 1 (* 2 x))").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Expr::Num(1.0).boxed(),
                Expr::Mul(Expr::Num(2.0).boxed(), Expr::Var.boxed()).boxed(),
            )
        );
    }

    #[test]
    fn parses_unary_functions_with_one_operand() {
        let expr = parse("(sin (^ x 2))").unwrap();
        assert_eq!(
            expr,
            Expr::Sin(Expr::Pow(Expr::Var.boxed(), Expr::Num(2.0).boxed()).boxed())
        );
    }

    #[test]
    fn rejects_a_missing_operand() {
        assert!(matches!(parse("(+ 1)"), Err(DiffError::Parse(_))));
        assert!(matches!(parse("(sin)"), Err(DiffError::Parse(_))));
    }

    #[test]
    fn rejects_a_missing_operator() {
        assert!(matches!(parse("(1 2)"), Err(DiffError::Parse(_))));
        assert!(matches!(parse("()"), Err(DiffError::Parse(_))));
    }

    #[test]
    fn rejects_an_unclosed_expression() {
        assert!(matches!(parse("(+ 1 2"), Err(DiffError::Parse(_))));
        assert!(matches!(parse("(sin x 1)"), Err(DiffError::Parse(_))));
    }

    #[test]
    fn rejects_trailing_tokens() {
        assert!(matches!(parse("(+ 1 2) x"), Err(DiffError::Parse(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse(""), Err(DiffError::Parse(_))));
    }

    #[test]
    fn caps_nesting_depth() {
        let mut deep = String::new();
        for _ in 0..400 {
            deep.push_str("(sin ");
        }
        deep.push('x');
        deep.push_str(&")".repeat(400));
        assert!(matches!(parse(&deep), Err(DiffError::TooDeep(_))));
    }
}
