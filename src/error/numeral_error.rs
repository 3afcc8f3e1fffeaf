#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a failure to interpret operand text as a numeral.
pub enum NumeralError {
    /// The text does not begin with a numeral.
    NotNumeric {
        /// The text that failed to parse.
        text: String,
    },
}

impl std::fmt::Display for NumeralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumeric { text } => {
                write!(f, "Could not parse '{text}' as a numeral.")
            },
        }
    }
}

impl std::error::Error for NumeralError {}
