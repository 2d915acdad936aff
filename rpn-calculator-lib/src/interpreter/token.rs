use crate::interpreter::error::LexError;
use crate::interpreter::operator::{BinaryOperator, UNARY_MINUS_PRECEDENCE};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of digits and decimal points, parsed only when evaluated.
    Number(String),
    Operator(BinaryOperator),
    UnaryMinus,
    OpenParenthesis,
    CloseParenthesis,
}

/// Text used for unary minus when a token sequence is printed.
pub static UNARY_MINUS_MARKER: &str = "_";

impl Token {
    /// Precedence of an operator token, or `None` for numbers and parentheses.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Operator(operator) => Some(operator.precedence()),
            Token::UnaryMinus => Some(UNARY_MINUS_PRECEDENCE),
            Token::Number(_) | Token::OpenParenthesis | Token::CloseParenthesis => None,
        }
    }
}

pub(crate) fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::UnaryMinus => write!(f, "{}", UNARY_MINUS_MARKER),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = LexError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            marker if marker == UNARY_MINUS_MARKER => Ok(Token::UnaryMinus),
            input => parse_operator_or_number(input),
        }
    }
}

fn parse_operator_or_number(text: &str) -> Result<Token, LexError> {
    let mut characters = text.chars();
    if let (Some(symbol), None) = (characters.next(), characters.next()) {
        if let Some(operator) = BinaryOperator::from_symbol(symbol) {
            return Ok(Token::Operator(operator));
        }
    }
    if text.is_empty() || !text.chars().all(is_number_character) {
        return Err(LexError::NotAToken(text.to_string()));
    }
    Ok(Token::Number(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_text_parses_to_operator_token() {
        assert_eq!(
            "*".parse::<Token>().unwrap(),
            Token::Operator(BinaryOperator::Multiply)
        )
    }

    #[test]
    fn marker_parses_to_unary_minus() {
        assert_eq!("_".parse::<Token>().unwrap(), Token::UnaryMinus)
    }

    #[test]
    fn digit_run_parses_to_number_token() {
        assert_eq!(
            "10.5".parse::<Token>().unwrap(),
            Token::Number("10.5".to_string())
        )
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert_eq!(
            "1x".parse::<Token>(),
            Err(LexError::NotAToken("1x".to_string()))
        )
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!("".parse::<Token>().is_err())
    }

    #[test]
    fn parentheses_have_no_precedence() {
        assert_eq!(Token::OpenParenthesis.precedence(), None);
        assert_eq!(Token::CloseParenthesis.precedence(), None)
    }

    #[test]
    fn unary_minus_displays_as_marker() {
        assert_eq!(Token::UnaryMinus.to_string(), "_")
    }
}
