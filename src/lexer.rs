use logos::Logos;

use crate::{
    numeral::NumeralFormat,
    token::{Operator, Token, Tokens},
};

/// Raw lexemes produced by the scanner.
///
/// Operator characters split the input; every maximal run of any other
/// characters is a single numeral lexeme, kept verbatim for the numeral
/// parser. Together the patterns cover all input, so scanning never skips a
/// character.
#[derive(Logos, Debug, PartialEq, Eq)]
enum Lexeme {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// A maximal run of non-operator characters.
    #[regex(r"[^+\-*/%^]+")]
    Numeral,
}

/// Tokenizes an expression with the default numeral format.
///
/// See [`tokenize_with`] for the full contract.
///
/// # Example
/// ```
/// use infix::{
///     lexer::tokenize,
///     token::{Operator, Token, Tokens},
/// };
///
/// assert_eq!(tokenize("3+4"),
///            Tokens::Valid(vec![Token::Operand(3.0),
///                               Token::Operator(Operator::Plus),
///                               Token::Operand(4.0)]));
/// assert_eq!(tokenize("3++4"), Tokens::Invalid);
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Tokens {
    tokenize_with(expr, NumeralFormat::default())
}

/// Tokenizes an expression with an explicit numeral format.
///
/// The input is scanned left to right; operator characters become operator
/// tokens and every run of other characters becomes an operand, parsed
/// leniently so that non-numeric text contributes `0.0`. After the scan:
///
/// - A leading minus directly followed by an operand is normalized into a
///   subtraction from a prepended `0.0` operand.
/// - The sequence must strictly alternate operands and operators, starting
///   with an operand; otherwise the input is rejected as [`Tokens::Invalid`].
/// - Trailing operators are trimmed, so the sequence ends with an operand.
///
/// Empty input yields an empty valid sequence.
#[must_use]
pub fn tokenize_with(expr: &str, format: NumeralFormat) -> Tokens {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(expr);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Plus) => Token::Operator(Operator::Plus),
            Ok(Lexeme::Minus) => Token::Operator(Operator::Minus),
            Ok(Lexeme::Star) => Token::Operator(Operator::Multiply),
            Ok(Lexeme::Slash) => Token::Operator(Operator::Divide),
            Ok(Lexeme::Percent) => Token::Operator(Operator::Modulo),
            Ok(Lexeme::Caret) => Token::Operator(Operator::Power),
            Ok(Lexeme::Numeral) => Token::Operand(format.parse_lenient(lexer.slice())),
            Err(()) => return Tokens::Invalid,
        };
        tokens.push(token);
    }

    if tokens.len() >= 2
       && tokens[0] == Token::Operator(Operator::Minus)
       && tokens[1].is_operand()
    {
        tokens.insert(0, Token::Operand(0.0));
    }

    let alternates = tokens.iter()
                           .enumerate()
                           .all(|(position, token)| {
                               if position % 2 == 0 {
                                   token.is_operand()
                               } else {
                                   token.is_operator()
                               }
                           });
    if !alternates {
        return Tokens::Invalid;
    }

    while let Some(Token::Operator(_)) = tokens.last() {
        tokens.pop();
    }

    Tokens::Valid(tokens)
}
