use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::UNARY_MINUS_PRECEDENCE;
use crate::interpreter::token::Token;
use log::trace;
use std::collections::VecDeque;

/// Shunting-yard conversion. The operator stack only ever holds operators,
/// unary minus and open parentheses, with the top at the front.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        trace!("converting {:?}, operators {:?}", token, operators);
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, token, operator.precedence())
            }
            Token::UnaryMinus => parse_operator_token(
                &mut operators,
                &mut output,
                token,
                UNARY_MINUS_PRECEDENCE,
            ),
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(SyntaxError::MismatchedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop_front() {
            None => return Err(SyntaxError::MismatchedParenthesis),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: Token,
    precedence: u8,
) {
    while let Some(top_of_operator_stack) = operators.front() {
        // Open parentheses have no precedence and stop the popping.
        match top_of_operator_stack.precedence() {
            Some(other_precedence) if other_precedence >= precedence => {}
            _ => break,
        }
        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(token);
}
