//! Integration tests for the public `evaluate` boundary

use calctty::evaluate;

#[test]
fn test_precedence() {
    assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
    assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
    assert_eq!(evaluate("1+2*3-4/2").unwrap(), 5.0);
}

#[test]
fn test_left_associativity() {
    // 10-2-3 is (10-2)-3, not 10-(2-3)
    assert_eq!(evaluate("10-2-3").unwrap(), 5.0);
    assert_eq!(evaluate("16/4/2").unwrap(), 2.0);
}

#[test]
fn test_decimal_literals() {
    assert_eq!(evaluate("1.5*2").unwrap(), 3.0);
    assert_eq!(evaluate("0.25+0.75").unwrap(), 1.0);
}

#[test]
fn test_whitespace_ignored() {
    assert_eq!(evaluate(" 2 + 3 * 4 ").unwrap(), 14.0);
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(evaluate("((2+3))*((1+1))").unwrap(), 10.0);
    assert_eq!(evaluate("2*(3+(4-(1+1)))").unwrap(), 10.0);
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
    assert_eq!(evaluate("3/(2-2)").unwrap(), f64::INFINITY);
}

#[test]
fn test_mismatched_parentheses() {
    let err = evaluate("(2+3").unwrap_err();
    assert!(err.to_string().contains("mismatched parentheses"));
}

#[test]
fn test_invalid_character() {
    let err = evaluate("2+a").unwrap_err();
    let message = err.to_string();
    assert!(message.contains('a'));
    assert!(message.contains("invalid character"));
}

#[test]
fn test_invalid_number() {
    let err = evaluate("1.2.3").unwrap_err();
    assert!(err.to_string().contains("1.2.3"));
}

#[test]
fn test_operator_where_value_expected() {
    let err = evaluate("2+*3").unwrap_err();
    assert!(err.to_string().contains("unexpected token"));

    let err = evaluate("2+").unwrap_err();
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn test_trailing_tokens_are_rejected() {
    // The whole input must parse; leftovers are not silently ignored
    let err = evaluate("2+2)").unwrap_err();
    assert!(err.to_string().contains("')'"));

    let err = evaluate("2 2").unwrap_err();
    assert!(err.to_string().contains("unexpected token"));
}

#[test]
fn test_empty_input_is_an_error() {
    let err = evaluate("").unwrap_err();
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn test_idempotence() {
    // Pure function: repeated calls with the same input agree
    let first = evaluate("(1+2)*3.5").unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate("(1+2)*3.5").unwrap(), first);
    }

    let err = evaluate("(2+3").unwrap_err();
    assert_eq!(evaluate("(2+3").unwrap_err(), err);
}
