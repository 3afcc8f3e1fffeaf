//! # infix
//!
//! infix is a lenient evaluator for plain arithmetic expressions written in
//! infix notation. It tokenizes an expression into an alternating sequence of
//! operands and operators, then reduces the sequence by precedence tier until
//! a single value remains.
//!
//! The evaluator is deliberately forgiving: malformed expressions evaluate to
//! `0.0` instead of raising an error, non-numeric operand text contributes
//! `0.0`, and division by zero follows IEEE 754 semantics. This makes it
//! suitable for evaluating text as a user types it, where partial and broken
//! input is the common case.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{numeral::NumeralFormat, token::Tokens};

/// Provides unified error types for numeral parsing and evaluation.
///
/// This module defines the errors that can be raised while parsing a numeral
/// or reducing a token sequence. Numeral errors are recoverable and swallowed
/// by the lenient entry points; evaluation errors signal an internal defect
/// and are the one unrecoverable failure mode.
///
/// # Responsibilities
/// - Defines error enums for the strict numeral parser and the reducer.
/// - Attaches the offending text or operator for diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Reduces token sequences to a single value.
///
/// This module implements evaluation as three sequential left-to-right
/// reduction passes over the token sequence, one per precedence tier. It
/// exposes the fallible entry points; the crate root wraps them in the
/// infallible [`evaluate`].
///
/// # Responsibilities
/// - Runs the power, multiplicative and additive passes in order.
/// - Maps invalid and empty sequences to `0.0`.
/// - Detects inconsistent reduction states and reports them as errors.
pub mod evaluator;
/// Splits expression text into a token sequence.
///
/// This module scans the input with a generated lexer, parses operand text
/// through the numeral collaborator, and enforces the well-formedness rules:
/// leading-minus normalization, strict alternation, and trailing-operator
/// trimming.
///
/// # Responsibilities
/// - Produces the alternating operand/operator sequence.
/// - Rejects input that violates alternation as [`token::Tokens::Invalid`].
/// - Exposes tokenization standalone for callers that want the
///   intermediate form.
pub mod lexer;
/// Reads and writes numerals in a configurable format.
///
/// This module is the numeric collaborator consumed by the tokenizer: a
/// locale-style parser and formatter over a decimal separator and a grouping
/// separator. Parsing reads the longest leading numeral prefix; the lenient
/// form substitutes zero for unparsable text and reports the failure through
/// `tracing`.
///
/// # Responsibilities
/// - Parses numeral prefixes strictly or leniently.
/// - Renders values with digit grouping.
/// - Stays free of internal state so formats can be shared across threads.
pub mod numeral;
/// Defines the token model for expressions.
///
/// This module declares the operator kinds with their sign characters and
/// precedence tiers, the operand/operator token union, and the tokenization
/// outcome type that distinguishes well-formed sequences from rejected input.
///
/// # Responsibilities
/// - Models operands, operators and precedence tiers.
/// - Applies operators to operand pairs in double precision.
/// - Renders tokens back into expression text.
pub mod token;

/// Evaluates an infix arithmetic expression.
///
/// This is the primary entry point. The expression is tokenized and reduced
/// by precedence tier: `^` first, then `*`, `/` and `%`, then `+` and `-`,
/// each tier left-to-right. A leading minus negates the first operand.
/// Parentheses are not supported.
///
/// Malformed expressions are not errors: input that fails the alternation
/// check, an empty expression, and non-numeric operand text all evaluate to
/// `0.0`. Trailing operators are ignored.
///
/// # Panics
/// Panics if the reduction passes leave more than one token, which indicates
/// a defect in the reducer itself and can never be caused by input. Use
/// [`evaluator::try_evaluate`] to handle that case as a `Result`.
///
/// # Examples
/// ```
/// use infix::evaluate;
///
/// assert_eq!(evaluate("3+4*2"), 11.0);
/// assert_eq!(evaluate("2^3+1"), 9.0);
/// assert_eq!(evaluate("-5+3"), -2.0);
/// assert_eq!(evaluate("3+"), 3.0);
/// assert_eq!(evaluate("3++4"), 0.0);
/// assert!(evaluate("10/0").is_infinite());
/// ```
#[must_use]
pub fn evaluate(expr: &str) -> f64 {
    match evaluator::try_evaluate(expr) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

/// Tokenizes an expression without evaluating it.
///
/// Exposed for callers that want the intermediate form, for example to
/// inspect or re-render what the evaluator would reduce. Input that fails
/// the alternation check yields [`Tokens::Invalid`].
///
/// # Example
/// ```
/// use infix::{token::Tokens, tokenize};
///
/// let tokens = tokenize("3+4*2");
///
/// assert_eq!(tokens.as_slice().len(), 5);
/// assert_eq!(tokens.to_string(), "3+4*2");
/// assert_eq!(tokenize("*5"), Tokens::Invalid);
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Tokens {
    lexer::tokenize(expr)
}

/// Parses a numeral with the default format, substituting zero on failure.
///
/// The failure is reported through `tracing` and otherwise swallowed. Use
/// [`numeral::NumeralFormat::parse`] for the strict form or for other
/// separator conventions.
///
/// # Example
/// ```
/// use infix::parse_numeral;
///
/// assert_eq!(parse_numeral("1,234.5"), 1234.5);
/// assert_eq!(parse_numeral("abc"), 0.0);
/// ```
#[must_use]
pub fn parse_numeral(text: &str) -> f64 {
    NumeralFormat::default().parse_lenient(text)
}
