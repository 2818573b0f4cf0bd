use std::fs;

use pretty_assertions::assert_eq;
use reckon::{
    ErrorKind, EvalConfig, EvalError, evaluate, evaluate_with_config,
    error::{LexError, RuntimeError, SyntaxError},
    interpreter::token::TokenKind,
};

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong error for {src:?}: {e}");
            e
        },
    }
}

#[test]
fn addition_and_subtraction() {
    assert_value("2 + 2 + 2 + 2 + 2 + 2 + 2 + 2 + 2", 18);
    assert_value("10 - 5", 5);
    assert_value("10 - 5 ", 5);
    assert_value("1 - 2", -1);
}

#[test]
fn single_number() {
    assert_value("42", 42);
    assert_value("  007  ", 7);
    assert_value("0", 0);
}

#[test]
fn precedence() {
    assert_value("3 + 5 * (10 - 2)", 43);
    assert_value("2 + 3 * 4", 14);
    assert_value("2 * 3 + 4", 10);
    assert_value("(2 + 3) * 4", 20);
    assert_value("8 - 6 / 2", 5);
}

#[test]
fn left_associativity() {
    assert_value("20 - 5 - 3", 12);
    assert_value("100 / 10 / 5", 2);
    assert_value("2 * 3 / 4", 1);
    assert_value("20 - (5 - 3)", 18);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("(0 - 7) / 2", -3);
    assert_value("7 / (0 - 2)", -3);
    assert_value("1 / 3", 0);
}

#[test]
fn nested_parentheses() {
    assert_value("((((1))))", 1);
    assert_value("((2 + 3) * (4 - 1)) / 5", 3);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("2+2").unwrap(), evaluate(" 2 + 2 ").unwrap());
    assert_eq!(evaluate("3+5*(10-2)").unwrap(), 43);
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("5 / 0", ErrorKind::DivisionByZero);
    assert_eq!(err, EvalError::Runtime(RuntimeError::DivisionByZero { offset: 2 }));
    assert_failure("1 / (3 - 3)", ErrorKind::DivisionByZero);
}

#[test]
fn unrecognized_character_is_error() {
    let err = assert_failure("3 + @", ErrorKind::Lex);
    assert_eq!(err,
               EvalError::Lex(LexError::UnrecognizedCharacter { character: '@',
                                                                offset:    4, }));
    assert_failure("2.5", ErrorKind::Lex);
    assert_failure("x + 1", ErrorKind::Lex);
    assert_failure("1\t+ 1", ErrorKind::Lex);
}

#[test]
fn missing_closing_paren_is_error() {
    let err = assert_failure("(3 + 4", ErrorKind::Syntax);
    assert_eq!(err,
               EvalError::Syntax(SyntaxError::ExpectedClosingParen { found:  TokenKind::EndOfInput,
                                                                     offset: 6, }));
}

#[test]
fn trailing_input_is_error() {
    let err = assert_failure("3 4", ErrorKind::Syntax);
    assert_eq!(err,
               EvalError::Syntax(SyntaxError::UnexpectedTrailingInput { found:  TokenKind::Number,
                                                                        offset: 2, }));
    assert_failure("(1 + 2))", ErrorKind::Syntax);
}

#[test]
fn syntax_errors_name_expected_and_found_kinds() {
    let EvalError::Syntax(err) = assert_failure("(3 + 4", ErrorKind::Syntax) else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.expected(), "')'");
    assert_eq!(err.found(), TokenKind::EndOfInput);
    assert_eq!(err.offset(), 6);

    let EvalError::Syntax(err) = assert_failure("3 4", ErrorKind::Syntax) else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.expected(), "end of input");
    assert_eq!(err.found(), TokenKind::Number);

    let EvalError::Syntax(err) = assert_failure("1 + *", ErrorKind::Syntax) else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.expected(), "number or '('");
    assert_eq!(err.found(), TokenKind::Star);
}

#[test]
fn missing_operand_is_error() {
    let err = assert_failure("1 +", ErrorKind::Syntax);
    assert!(matches!(err,
                     EvalError::Syntax(SyntaxError::ExpectedOperand { found: TokenKind::EndOfInput,
                                                                      .. })));
    assert_failure("", ErrorKind::Syntax);
    assert_failure("   ", ErrorKind::Syntax);
    assert_failure("* 2", ErrorKind::Syntax);
    assert_failure("-3", ErrorKind::Syntax);
    assert_failure("()", ErrorKind::Syntax);
    assert_failure("2 * * 3", ErrorKind::Syntax);
}

#[test]
fn overflow_is_error() {
    assert_failure("9223372036854775807 + 1", ErrorKind::Overflow);
    assert_failure("3037000500 * 3037000500", ErrorKind::Overflow);
    assert_failure("0 - 9223372036854775807 - 2", ErrorKind::Overflow);
    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn oversized_literal_is_error() {
    let err = assert_failure("1 + 9223372036854775808", ErrorKind::Lex);
    assert_eq!(err,
               EvalError::Lex(LexError::LiteralTooLarge { literal: "9223372036854775808".to_string(),
                                                          offset:  4, }));
}

#[test]
fn nesting_limit() {
    let config = EvalConfig { max_depth: 3 };
    assert_eq!(evaluate_with_config("(((7)))", config).unwrap(), 7);

    let err = evaluate_with_config("((((7))))", config).unwrap_err();
    assert_eq!(err,
               EvalError::Runtime(RuntimeError::NestingTooDeep { limit:  3,
                                                                 offset: 3, }));

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_failure(&deep, ErrorKind::NestingTooDeep);
}

#[test]
fn default_nesting_limit_is_reachable() {
    let depth = reckon::DEFAULT_MAX_DEPTH;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&src, 1);
}

#[test]
fn first_error_wins() {
    // The division by zero is reached before the bad character is scanned.
    assert_failure("1 / 0 + @", ErrorKind::DivisionByZero);
    assert_failure("1 + ) @", ErrorKind::Syntax);
}

#[test]
fn error_messages_mention_offset() {
    let err = evaluate("3 + @").unwrap_err();
    assert_eq!(err.to_string(), "Error at offset 4: Unrecognized character '@'.");
    assert_eq!(err.offset(), 4);

    let err = evaluate("(3 + 4").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at offset 6: Expected closing parenthesis ')' but found end of input.");

    let err = evaluate("5 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error at offset 2: Division by zero.");
}

#[test]
fn expression_file() {
    let contents = fs::read_to_string("tests/expressions.txt").expect("missing file");
    let mut count = 0;

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (src, expected) = line.split_once("=>")
                                  .unwrap_or_else(|| panic!("malformed line {}", number + 1));
        let expected: i64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("bad value on line {}: {e}", number + 1));
        assert_value(src, expected);
        count += 1;
    }

    assert!(count > 0, "No expressions found in tests/expressions.txt");
}
