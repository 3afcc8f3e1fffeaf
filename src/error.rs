/// Numeral parsing errors.
///
/// Defines the error type raised by the strict numeral parser when operand
/// text does not begin with a numeral. The lenient entry points swallow this
/// error and substitute zero.
pub mod numeral_error;
/// Evaluation errors.
///
/// Contains the error type raised when the reduction passes leave the token
/// sequence in an inconsistent state. These errors indicate a defect in the
/// reducer, never a problem with user input.
pub mod eval_error;

pub use eval_error::EvalError;
pub use numeral_error::NumeralError;
