use infix::{
    evaluate,
    evaluator::{try_evaluate, try_evaluate_with},
    lexer::tokenize_with,
    numeral::NumeralFormat,
    parse_numeral, tokenize,
    token::{Operator, Token, Tokens},
};

fn assert_evaluates(expr: &str, expected: f64) {
    let value = evaluate(expr);
    assert!((value - expected).abs() < 1e-9,
            "'{expr}' evaluated to {value}, expected {expected}");
}

fn operand(value: f64) -> Token {
    Token::Operand(value)
}

fn operator(op: Operator) -> Token {
    Token::Operator(op)
}

#[test]
fn empty_and_non_numeric_input() {
    assert_evaluates("", 0.0);
    assert_evaluates("abc", 0.0);
    assert_evaluates(" 3", 0.0);
}

#[test]
fn single_operands() {
    assert_evaluates("5", 5.0);
    assert_evaluates("2.5", 2.5);
    assert_evaluates("-5", -5.0);
    assert_evaluates("1,234", 1234.0);
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("3+4", 7.0);
    assert_evaluates("8-5", 3.0);
    assert_evaluates("3*4", 12.0);
    assert_evaluates("10/4", 2.5);
    assert_evaluates("7%4", 3.0);
    assert_evaluates("2^10", 1024.0);
}

#[test]
fn precedence_tiers() {
    assert_evaluates("3+4*2", 11.0);
    assert_evaluates("2^3+1", 9.0);
    assert_evaluates("2^3*2", 16.0);
    assert_evaluates("1+10%4", 3.0);
    assert_evaluates("2*3^2", 18.0);
}

#[test]
fn every_tier_is_left_associative() {
    assert_evaluates("10-2-3", 5.0);
    assert_evaluates("8/2/2", 2.0);
    assert_evaluates("100/10*2", 20.0);
    assert_evaluates("2^3^2", 64.0);
}

#[test]
fn leading_minus_negates_the_first_operand() {
    assert_evaluates("-5+3", -2.0);
    assert_evaluates("-5*2", -10.0);
    assert_evaluates("-7%4", -3.0);
}

#[test]
fn division_and_modulo_by_zero_follow_ieee() {
    let positive = evaluate("10/0");
    assert!(positive.is_infinite() && positive.is_sign_positive());

    let negative = evaluate("-10/0");
    assert!(negative.is_infinite() && negative.is_sign_negative());

    assert!(evaluate("0/0").is_nan());
    assert!(evaluate("10%0").is_nan());
}

#[test]
fn trailing_operators_are_trimmed() {
    assert_evaluates("3+", 3.0);
    assert_evaluates("3^", 3.0);
    assert_evaluates("3+4*", 7.0);
}

#[test]
fn malformed_expressions_evaluate_to_zero() {
    assert_evaluates("3++4", 0.0);
    assert_evaluates("3**4", 0.0);
    assert_evaluates("3+*4", 0.0);
    assert_evaluates("*5", 0.0);
    assert_evaluates("+", 0.0);
    assert_evaluates("-", 0.0);
    assert_evaluates("--5", 0.0);
    assert_evaluates("3--4", 0.0);
}

// Operand text is taken verbatim: a buffer that does not begin with a
// numeral contributes 0.0, so whitespace around operators changes the
// result rather than being skipped.
#[test]
fn whitespace_is_operand_text() {
    assert_evaluates("1 + 2", 1.0);
    assert_evaluates("12abc+1", 13.0);
}

#[test]
fn tokenize_produces_the_intermediate_sequence() {
    assert_eq!(tokenize("3+4*2"),
               Tokens::Valid(vec![operand(3.0),
                                  operator(Operator::Plus),
                                  operand(4.0),
                                  operator(Operator::Multiply),
                                  operand(2.0)]));

    assert_eq!(tokenize(""), Tokens::Valid(Vec::new()));
    assert_eq!(tokenize("3+"), Tokens::Valid(vec![operand(3.0)]));
}

#[test]
fn tokenize_normalizes_a_leading_minus() {
    assert_eq!(tokenize("-5"),
               Tokens::Valid(vec![operand(0.0),
                                  operator(Operator::Minus),
                                  operand(5.0)]));
    assert_eq!(tokenize("-5").to_string(), "0-5");
}

#[test]
fn tokenize_rejects_broken_alternation() {
    assert_eq!(tokenize("3++4"), Tokens::Invalid);
    assert_eq!(tokenize("*5"), Tokens::Invalid);
    assert_eq!(tokenize("--5"), Tokens::Invalid);
    assert!(tokenize("+").is_invalid());
}

#[test]
fn invalid_tokenization_stands_in_for_the_sentinel() {
    assert_eq!(Tokens::Invalid.as_slice(), Tokens::SENTINEL);
    assert_eq!(Tokens::SENTINEL, &[operand(0.0)]);
    assert_eq!(Tokens::Invalid.to_string(), "0");
}

#[test]
fn tokenization_is_idempotent_over_rendering() {
    for expr in ["3+4*2", "-5+3", "2^3^2", "10/4", "0.5+1,000", "3+", "7%4-1"] {
        let first = tokenize(expr);
        let second = tokenize(&first.to_string());
        assert_eq!(first, second, "re-tokenizing '{expr}' changed the sequence");
    }
}

#[test]
fn reduction_terminates_for_every_operator_combination() {
    let operators = ['+', '-', '*', '/', '%', '^'];

    for a in operators {
        for b in operators {
            for c in operators {
                let expr = format!("2{a}3{b}4{c}5");
                assert!(try_evaluate(&expr).is_ok(),
                        "'{expr}' did not reduce to a single operand");
            }
        }
    }
}

#[test]
fn strict_and_lenient_numeral_parsing() {
    let format = NumeralFormat::default();

    assert_eq!(format.parse("1,234.5").unwrap(), 1234.5);
    assert_eq!(format.parse(".5").unwrap(), 0.5);
    assert_eq!(format.parse("-3").unwrap(), -3.0);
    assert_eq!(format.parse("12abc").unwrap(), 12.0);
    assert!(format.parse("abc").is_err());
    assert!(format.parse(" 12").is_err());
    assert!(format.parse("").is_err());

    assert_eq!(format.parse_lenient("abc"), 0.0);
    assert_eq!(parse_numeral("1,234.5"), 1234.5);
}

#[test]
fn formatting_round_trips_through_parsing() {
    let format = NumeralFormat::default();

    for value in [0.0, 0.5, -42.0, 1234.5, 1_000_000.0, -9876.25] {
        let rendered = format.format(value);
        assert_eq!(format.parse(&rendered).unwrap(),
                   value,
                   "'{rendered}' did not parse back to {value}");
    }

    assert_eq!(format.format(1234.5), "1,234.5");
    assert_eq!(format.format(-1234567.0), "-1,234,567");
}

#[test]
fn alternate_numeral_formats() {
    let format = NumeralFormat { decimal_separator:  ',',
                                 grouping_separator: '.', };

    assert_eq!(format.parse("1.234,5").unwrap(), 1234.5);
    assert_eq!(try_evaluate_with("1,5+2,5", format).unwrap(), 4.0);

    let tokens = tokenize_with("1,5*2", format);
    assert_eq!(tokens.as_slice(),
               &[operand(1.5), operator(Operator::Multiply), operand(2.0)]);
}
