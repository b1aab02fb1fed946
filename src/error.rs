use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiffError>;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("unrecognized character `{found}` at byte {at}")]
    Lex { found: char, at: usize },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("division by zero")]
    DivisionByZero,
}
