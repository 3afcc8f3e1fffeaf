use crate::token::Operator;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents an internal failure of the reduction passes.
///
/// User input never produces these errors: expressions that fail the
/// alternation check are rejected during tokenization and evaluate to zero.
/// Every sequence that reaches the reducer is strictly alternating, so an
/// `EvalError` always indicates a defect in a reduction pass itself.
pub enum EvalError {
    /// A pass reached an operator without an operand on both sides.
    MisplacedOperator {
        /// The operator that could not be reduced.
        operator: Operator,
    },
    /// The passes finished with more than one token remaining.
    UnreducedTokens {
        /// How many tokens were left over.
        remaining: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MisplacedOperator { operator } => {
                write!(f,
                       "Reduction reached operator '{operator}' without operands on both sides.")
            },
            Self::UnreducedTokens { remaining } => {
                write!(f,
                       "Reduction finished with {remaining} tokens where a single operand was expected.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
