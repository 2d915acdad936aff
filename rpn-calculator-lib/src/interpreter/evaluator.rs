use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;
use log::{debug, trace};

/// Runs the given postfix tokens on a value stack and returns the single
/// value left on it.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The numerical value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::evaluator::evaluate_postfix;
/// use rpn_calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::Number("3".to_string()),
///     Token::UnaryMinus,
///     Token::Number("2".to_string()),
///     "*".parse()?,
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, -6f64);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        trace!("evaluating {:?}, values {:?}", token, values);
        match token {
            Token::Number(text) => values.push(parse_number(text)?),
            Token::Operator(operator) => {
                let (b, a) = match (values.pop(), values.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => return Err(EvalError::InsufficientOperands),
                };
                values.push(operator.evaluate(a, b)?);
            }
            Token::UnaryMinus => match values.last_mut() {
                Some(value) => *value = -*value,
                None => return Err(EvalError::InsufficientOperands),
            },
            // Postfix sequences never contain parentheses.
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvalError::MalformedExpression)
            }
        }
    }

    match values.as_slice() {
        [result] => {
            debug!("evaluated {:?} to {}", postfix_tokens, result);
            Ok(*result)
        }
        _ => Err(EvalError::MalformedExpression),
    }
}

fn parse_number(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber(text.to_string()))
}
