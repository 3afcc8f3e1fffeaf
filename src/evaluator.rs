use crate::{
    error::EvalError,
    lexer::tokenize_with,
    numeral::NumeralFormat,
    token::{Precedence, Token, Tokens},
};

/// Result type used by the evaluator.
///
/// Evaluation functions return either a value of type `T` or an [`EvalError`]
/// describing an internal reduction failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression with the default numeral format.
///
/// See [`try_evaluate_with`] for the full contract.
///
/// # Errors
/// Returns an [`EvalError`] if the reduction passes leave the sequence in an
/// inconsistent state. This indicates a defect in a pass, not bad input;
/// malformed input evaluates to `Ok(0.0)`.
///
/// # Example
/// ```
/// use infix::evaluator::try_evaluate;
///
/// assert_eq!(try_evaluate("2^3+1").unwrap(), 9.0);
/// assert_eq!(try_evaluate("3++4").unwrap(), 0.0);
/// ```
pub fn try_evaluate(expr: &str) -> EvalResult<f64> {
    try_evaluate_with(expr, NumeralFormat::default())
}

/// Evaluates an expression with an explicit numeral format.
///
/// The expression is tokenized, then reduced by one left-to-right pass per
/// precedence tier: power first, then multiply/divide/modulo, then
/// add/subtract. Later passes only run while more than one token remains.
/// Operators within a tier are left-associative, so `2^3^2` is `(2^3)^2`.
///
/// Input rejected by the tokenizer evaluates to `0.0`, as does an empty
/// sequence. All arithmetic follows IEEE 754 double-precision semantics;
/// division by zero yields an infinity or NaN rather than an error.
///
/// # Errors
/// Returns an [`EvalError`] if the reduction passes leave the sequence in an
/// inconsistent state.
pub fn try_evaluate_with(expr: &str, format: NumeralFormat) -> EvalResult<f64> {
    let mut tokens = match tokenize_with(expr, format) {
        Tokens::Invalid => return Ok(0.0),
        Tokens::Valid(tokens) => tokens,
    };

    match tokens.as_slice() {
        [] => return Ok(0.0),
        [Token::Operand(value)] => return Ok(*value),
        [_] => return Ok(0.0),
        _ => {},
    }

    for precedence in [Precedence::Power, Precedence::Multiplicative, Precedence::Additive] {
        if tokens.len() > 1 {
            tokens = reduce_pass(tokens, precedence)?;
        }
    }

    match tokens.as_slice() {
        [Token::Operand(value)] => Ok(*value),
        _ => Err(EvalError::UnreducedTokens { remaining: tokens.len() }),
    }
}

/// Runs one left-to-right reduction pass over the sequence.
///
/// Tokens are folded onto a stack. An operator belonging to this pass's
/// precedence tier takes the operand below it on the stack and the operand
/// that follows it in the sequence, and is replaced by the computed operand;
/// any other token is kept as is. One pass therefore reduces every
/// occurrence of the tier's operators, left to right.
fn reduce_pass(input: Vec<Token>, precedence: Precedence) -> EvalResult<Vec<Token>> {
    let mut reduced: Vec<Token> = Vec::with_capacity(input.len());
    let mut pending = input.into_iter();

    while let Some(token) = pending.next() {
        match token {
            Token::Operator(operator) if operator.precedence() == precedence => {
                let Some(Token::Operand(left)) = reduced.pop() else {
                    return Err(EvalError::MisplacedOperator { operator });
                };
                let Some(Token::Operand(right)) = pending.next() else {
                    return Err(EvalError::MisplacedOperator { operator });
                };

                reduced.push(Token::Operand(operator.apply(left, right)));
            },
            other => reduced.push(other),
        }
    }

    Ok(reduced)
}
