//! Evaluates arithmetic expressions by converting them to Reverse Polish
//! notation and running the result on a value stack.

pub mod interpreter;

pub use interpreter::calc;
pub use interpreter::error::{CalcError, ErrorKind};
