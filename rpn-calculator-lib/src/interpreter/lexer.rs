use crate::interpreter::error::LexError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_number_character, Token};
use log::debug;

/// Splits the given expression into tokens, in the order they appear.
///
/// A `-` becomes [`Token::UnaryMinus`] when nothing has been emitted yet,
/// when it directly follows `(`, or when the character right before it in
/// the text is one of `+ - * /`. Everywhere else it is binary subtraction.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The infix tokens of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("2*-3")?;
/// assert_eq!(tokens[2], Token::UnaryMinus);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = vec![];
    let mut number = String::new();
    let mut previous_character: Option<char> = None;

    for (position, character) in expression.chars().enumerate() {
        if is_number_character(character) {
            number.push(character);
            previous_character = Some(character);
            continue;
        }

        flush_number(&mut number, &mut tokens);

        if !character.is_whitespace() {
            let token = classify_symbol(character, position, &tokens, previous_character)?;
            tokens.push(token);
        }
        previous_character = Some(character);
    }

    flush_number(&mut number, &mut tokens);

    debug!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn flush_number(number: &mut String, tokens: &mut Vec<Token>) {
    if !number.is_empty() {
        tokens.push(Token::Number(std::mem::take(number)));
    }
}

fn classify_symbol(
    character: char,
    position: usize,
    tokens: &[Token],
    previous_character: Option<char>,
) -> Result<Token, LexError> {
    match character {
        '(' => Ok(Token::OpenParenthesis),
        ')' => Ok(Token::CloseParenthesis),
        '-' if starts_operand(tokens, previous_character) => Ok(Token::UnaryMinus),
        symbol => match BinaryOperator::from_symbol(symbol) {
            Some(operator) => Ok(Token::Operator(operator)),
            None => Err(LexError::InvalidCharacter {
                character,
                position,
            }),
        },
    }
}

/// Whether a `-` at the current position negates the operand that follows it.
fn starts_operand(tokens: &[Token], previous_character: Option<char>) -> bool {
    let follows_operator_character = previous_character
        .and_then(BinaryOperator::from_symbol)
        .is_some();
    match tokens.last() {
        None | Some(Token::OpenParenthesis) => true,
        Some(_) => follows_operator_character,
    }
}
