use thiserror::Error;

/// Failure while splitting the input text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("'{0}' is not a single token")]
    NotAToken(String),
}

/// Failure while reordering infix tokens into postfix order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,
}

/// Failure while running a postfix sequence on the value stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("operator is missing an operand")]
    InsufficientOperands,
    #[error("malformed expression")]
    MalformedExpression,
}

/// The single error value returned from [`calc`](crate::calc).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat classification of every way a calculation can fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    MismatchedParenthesis,
    InvalidNumber,
    DivisionByZero,
    InsufficientOperands,
    MalformedExpression,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(LexError::InvalidCharacter { .. } | LexError::NotAToken(_)) => {
                ErrorKind::InvalidCharacter
            }
            CalcError::Syntax(SyntaxError::MismatchedParenthesis) => {
                ErrorKind::MismatchedParenthesis
            }
            CalcError::Eval(EvalError::InvalidNumber(_)) => ErrorKind::InvalidNumber,
            CalcError::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            CalcError::Eval(EvalError::InsufficientOperands) => ErrorKind::InsufficientOperands,
            CalcError::Eval(EvalError::MalformedExpression) => ErrorKind::MalformedExpression,
        }
    }
}
