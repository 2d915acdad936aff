mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::error::SyntaxError;
use crate::interpreter::token::Token;
use log::debug;

/// Reorders the given infix tokens into postfix (Reverse Polish) order,
/// which can be evaluated on a stack without looking at parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent tokens in postfix format.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::parser::to_postfix;
/// use rpn_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number("1".to_string()),
///     "+".parse()?,
///     Token::Number("2".to_string()),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], "+".parse::<Token>()?);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("converted to postfix {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
