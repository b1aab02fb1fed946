//! Lexing of prefix-notation source text into a flat token sequence.

use std::fmt;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{map, opt, recognize, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};

use crate::error::{DiffError, Result};

/// A single lexical unit of a prefix expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen,
    Number(f64),
    Var,
    Sin,
    Cos,
    Tan,
    Ln,
    Exp,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Number(value) => write!(f, "{value}"),
            Token::Var => write!(f, "x"),
            Token::Sin => write!(f, "sin"),
            Token::Cos => write!(f, "cos"),
            Token::Tan => write!(f, "tan"),
            Token::Ln => write!(f, "ln"),
            Token::Exp => write!(f, "exp"),
        }
    }
}

/// Splits `input` into tokens, skipping whitespace.
///
/// Any character outside the token set is a [`DiffError::Lex`] carrying the
/// character and its byte offset; nothing is dropped silently.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let (rest, tokens) = match many0(ws(token))(input) {
        Ok(ok) => ok,
        Err(err) => return Err(DiffError::Parse(format!("{err:?}"))),
    };
    let rest = rest.trim_start();
    match rest.chars().next() {
        None => Ok(tokens),
        Some(found) => Err(DiffError::Lex {
            found,
            at: input.len() - rest.len(),
        }),
    }
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((keyword, number, symbol))(input)
}

fn keyword(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Sin, tag("sin")),
        value(Token::Cos, tag("cos")),
        value(Token::Tan, tag("tan")),
        value(Token::Ln, tag("ln")),
        value(Token::Exp, tag("exp")),
    ))(input)
}

fn symbol(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::LeftParen, char('(')),
        value(Token::RightParen, char(')')),
        value(Token::Plus, char('+')),
        value(Token::Minus, char('-')),
        value(Token::Star, char('*')),
        value(Token::Slash, char('/')),
        value(Token::Caret, char('^')),
        value(Token::Var, char('x')),
    ))(input)
}

// Digits, optionally a single decimal point followed by more digits. No sign
// and no exponent notation; `-` is always the subtraction operator.
fn number(input: &str) -> IResult<&str, Token> {
    map(
        recognize(pair(digit1, opt(preceded(char('.'), digit1)))),
        |s: &str| Token::Number(s.parse().unwrap()),
    )(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}
