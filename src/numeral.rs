use crate::error::NumeralError;

/// Locale-style options for reading and writing numerals.
///
/// A format knows which character separates the integer part from the
/// fraction and which character may group digits of the integer part. The
/// default corresponds to `1,234.5`. A format holds no internal parse state,
/// so a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralFormat {
    /// Character separating the integer part from the fraction.
    pub decimal_separator:  char,
    /// Character accepted between digits of the integer part.
    pub grouping_separator: char,
}

impl Default for NumeralFormat {
    fn default() -> Self {
        Self { decimal_separator:  '.',
               grouping_separator: ',', }
    }
}

impl NumeralFormat {
    /// Parses the longest leading numeral prefix of `text`.
    ///
    /// A numeral is an optional `-`, digits with grouping separators between
    /// them, and at most one decimal separator. Reading stops at the first
    /// character that does not extend the numeral; trailing text is ignored.
    /// Leading whitespace is not skipped, and exponent notation is not
    /// recognized.
    ///
    /// # Errors
    /// Returns [`NumeralError::NotNumeric`] if `text` does not begin with a
    /// numeral.
    ///
    /// # Example
    /// ```
    /// use infix::numeral::NumeralFormat;
    ///
    /// let format = NumeralFormat::default();
    ///
    /// assert_eq!(format.parse("1,234.5").unwrap(), 1234.5);
    /// assert_eq!(format.parse("12abc").unwrap(), 12.0);
    /// assert!(format.parse(" 12").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<f64, NumeralError> {
        let chars: Vec<char> = text.chars().collect();
        let mut cleaned = String::new();
        let mut index = 0;
        let mut seen_decimal = false;

        if chars.first() == Some(&'-') {
            cleaned.push('-');
            index = 1;
        }

        while index < chars.len() {
            let c = chars[index];

            if c.is_ascii_digit() {
                cleaned.push(c);
            } else if c == self.decimal_separator && !seen_decimal {
                cleaned.push('.');
                seen_decimal = true;
            } else if c == self.grouping_separator
                      && !seen_decimal
                      && index > 0
                      && chars[index - 1].is_ascii_digit()
                      && chars.get(index + 1).is_some_and(char::is_ascii_digit)
            {
                // Grouping separators sit between digits and are dropped.
            } else {
                break;
            }

            index += 1;
        }

        cleaned.parse()
               .map_err(|_| NumeralError::NotNumeric { text: text.to_string() })
    }

    /// Parses a numeral, substituting zero when the text is not numeric.
    ///
    /// The failure is reported through `tracing` and otherwise swallowed, so
    /// a stray operand contributes `0.0` instead of aborting evaluation.
    ///
    /// # Example
    /// ```
    /// use infix::numeral::NumeralFormat;
    ///
    /// let format = NumeralFormat::default();
    ///
    /// assert_eq!(format.parse_lenient("2.5"), 2.5);
    /// assert_eq!(format.parse_lenient("abc"), 0.0);
    /// ```
    #[must_use]
    pub fn parse_lenient(&self, text: &str) -> f64 {
        match self.parse(text) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("{error}");
                0.0
            },
        }
    }

    /// Renders a value with this format.
    ///
    /// Digits of the integer part are grouped in threes. The rendered text
    /// parses back to the same value with the same format.
    ///
    /// # Example
    /// ```
    /// use infix::numeral::NumeralFormat;
    ///
    /// let format = NumeralFormat::default();
    ///
    /// assert_eq!(format.format(1234.5), "1,234.5");
    /// assert_eq!(format.format(-42.0), "-42");
    /// ```
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rendered = value.to_string();
        let (integer, fraction) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rendered.as_str(), None),
        };
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };

        let mut out = String::from(sign);
        for (position, digit) in digits.chars().enumerate() {
            if position > 0 && (digits.len() - position) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(digit);
        }
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }

        out
    }
}
