pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::CalcError;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use log::debug;
use string_builder::Builder;

/// Calculates the numerical value of the given expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, made of numbers,
///   `+ - * /`, unary minus and parentheses.
///
/// returns: The value of the expression, or the first error any stage hit.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::calc;
///
/// let value = calc("10 - 2 * 3");
/// assert_eq!(value, Ok(4f64));
/// ```
pub fn calc(expression: &str) -> Result<f64, CalcError> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(&postfix_tokens)?;
    debug!("{:?} = {}", expression, value);
    Ok(value)
}

/// Converts the given input string into the equivalent postfix tokens,
/// without evaluating them.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix format.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("(10 + 5) * 2")?;
/// let rendered = tokens_to_string(&postfix_tokens)?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>, CalcError> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::to_postfix(tokens)?;
    Ok(postfix_tokens)
}

/// Prints the given vector of tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
pub fn tokens_to_string(tokens: &[Token]) -> Result<String, std::string::FromUtf8Error> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string()
}
