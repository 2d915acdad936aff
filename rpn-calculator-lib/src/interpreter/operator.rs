use crate::interpreter::error::EvalError;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Binding strength of unary minus, above every binary operator.
pub(crate) const UNARY_MINUS_PRECEDENCE: u8 = 3;

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    /// Applies the operator as `a op b`, where `b` is the most recently pushed operand.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide => {
                if b == 0f64 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert_eq!(equal1.precedence(), equal2.precedence())
    }

    #[test]
    fn operator_lt_correspond_with_precedence() {
        let greater = BinaryOperator::Multiply;
        let lesser = BinaryOperator::Subtract;
        assert!(lesser.precedence() < greater.precedence())
    }

    #[test]
    fn unary_minus_binds_tighter_than_every_binary_operator() {
        let operators = [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        ];
        assert!(operators
            .iter()
            .all(|operator| operator.precedence() < UNARY_MINUS_PRECEDENCE))
    }

    #[test]
    fn subtract_evaluates_left_operand_minus_right() {
        assert_eq!(BinaryOperator::Subtract.evaluate(10f64, 2f64), Ok(8f64))
    }

    #[test]
    fn divide_by_zero_returns_err() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(5f64, 0f64),
            Err(EvalError::DivisionByZero)
        )
    }

    #[test]
    fn divide_by_negative_zero_returns_err() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(5f64, -0f64),
            Err(EvalError::DivisionByZero)
        )
    }

    #[test]
    fn symbol_round_trips_through_from_symbol() {
        assert_eq!(
            BinaryOperator::from_symbol(BinaryOperator::Divide.symbol()),
            Some(BinaryOperator::Divide)
        )
    }
}
