use std::cmp::Ordering;

use pragmash::{Number, RuntimeError, Value};

#[test]
fn string_values_split_into_arrays() {
    let value = Value::from("a\nb\nc");
    let items: Vec<_> = value.array().iter().map(|v| v.as_str().to_string()).collect();
    assert_eq!(items, vec!["a", "b", "c"]);
    assert!(value.boolean());
}

#[test]
fn the_empty_string_is_the_empty_array() {
    let value = Value::from("");
    assert!(value.array().is_empty());
    assert!(!value.boolean());
}

#[test]
fn array_and_string_renditions_round_trip() {
    for source in ["", "a", "a\nb", "a\n\nb", "\n", "one line"] {
        let value = Value::from(source);
        assert_eq!(Value::from(value.as_str()).as_str(), value.as_str());

        let rejoined = value.array()
                            .iter()
                            .map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join("\n");
        assert_eq!(rejoined, value.as_str(), "for source {source:?}");
    }
}

#[test]
fn single_empty_element_normalizes_to_the_empty_array() {
    let value = Value::from(vec![Value::from("")]);
    assert!(value.array().is_empty());
    assert_eq!(value.as_str(), "");
    assert!(!value.boolean());
}

#[test]
fn arrays_join_with_newlines() {
    let value = Value::from(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(value.as_str(), "a\nb");
    assert!(value.boolean());
    assert_eq!(value.array().len(), 2);
}

#[test]
fn booleans_render_as_true_or_empty() {
    assert_eq!(Value::from(true).as_str(), "true");
    assert!(Value::from(true).boolean());
    assert_eq!(Value::from(false).as_str(), "");
    assert!(!Value::from(false).boolean());
}

#[test]
fn numbers_are_always_truthy() {
    let value = Value::from(Number::from_int(0));
    assert!(value.boolean());
    assert_eq!(value.as_str(), "0");
}

#[test]
fn number_parsing_keeps_kinds_apart() {
    assert!(Number::parse("5").unwrap().is_integer());
    assert!(!Number::parse("5.0").unwrap().is_integer());
    assert!(!Number::parse("2.5e3").unwrap().is_integer());

    // Integers of any size round-trip exactly.
    let digits = "123456789012345678901234567890123456789";
    assert_eq!(Number::parse(digits).unwrap().to_string(), digits);
}

#[test]
fn malformed_numbers_are_errors() {
    assert_eq!(Number::parse("abc"),
               Err(RuntimeError::InvalidInteger { text: "abc".to_string() }));
    assert_eq!(Number::parse("1.2.3"),
               Err(RuntimeError::InvalidNumber { text: "1.2.3".to_string() }));
    assert_eq!(Number::parse("1e5"),
               Err(RuntimeError::InvalidInteger { text: "1e5".to_string() }));
}

#[test]
fn number_parse_errors_are_cached_on_the_value() {
    let value = Value::from("not-a-number");
    let first = value.number().unwrap_err();
    let second = value.number().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn integer_formatting_has_no_decimal_point() {
    assert_eq!(Number::from_int(5).to_string(), "5");
    assert_eq!(Number::from_int(-12).to_string(), "-12");
}

#[test]
fn float_formatting_stays_visibly_float() {
    assert_eq!(Number::from_float(5.0).to_string(), "5.0");
    assert_eq!(Number::from_float(3.5).to_string(), "3.5");
    assert_eq!(Number::parse("3.0").unwrap().to_string(), "3.0");
}

#[test]
fn addition_commutes() {
    let pairs = [("1", "2"), ("2", "3.0"), ("-7", "7"), ("0.5", "0.25"),
                 ("99999999999999999999", "1")];
    for (left, right) in pairs {
        let a = Number::parse(left).unwrap();
        let b = Number::parse(right).unwrap();
        assert_eq!(a.add(&b).to_string(), b.add(&a).to_string(), "for {left} + {right}");
    }
}

#[test]
fn integer_arithmetic_is_exact() {
    let a = Number::parse("99999999999999999999").unwrap();
    let b = Number::parse("99999999999999999999").unwrap();
    assert_eq!(a.mul(&b).to_string(), "9999999999999999999800000000000000000001");
    assert_eq!(a.add(&b).to_string(), "199999999999999999998");
    assert_eq!(a.sub(&b).to_string(), "0");
}

#[test]
fn exact_division_stays_integer() {
    let six = Number::from_int(6);
    let three = Number::from_int(3);
    let quotient = six.div(&three).unwrap();
    assert!(quotient.is_integer());
    assert_eq!(quotient.to_string(), "2");
}

#[test]
fn inexact_division_becomes_float() {
    let seven = Number::from_int(7);
    let two = Number::from_int(2);
    let quotient = seven.div(&two).unwrap();
    assert!(!quotient.is_integer());
    assert_eq!(quotient.to_string(), "3.5");
}

#[test]
fn division_by_zero_is_an_error() {
    let one = Number::from_int(1);
    assert_eq!(one.div(&Number::from_int(0)), Err(RuntimeError::DivisionByZero));
    assert_eq!(one.modulo(&Number::from_int(0)), Err(RuntimeError::DivisionByZero));
    assert_eq!(one.div(&Number::from_float(0.0)), Err(RuntimeError::DivisionByZero));
}

#[test]
fn float_operands_are_contagious() {
    let result = Number::from_int(2).add(&Number::from_float(3.0));
    assert!(!result.is_integer());
    assert_eq!(result.to_string(), "5.0");
}

#[test]
fn exponentiation_keeps_integers_exact() {
    let result = Number::from_int(2).pow(&Number::from_int(100));
    assert!(result.is_integer());
    assert_eq!(result.to_string(), "1267650600228229401496703205376");

    let result = Number::from_int(2).pow(&Number::from_int(-1));
    assert!(!result.is_integer());
    assert_eq!(result.to_string(), "0.5");
}

#[test]
fn comparison_uses_big_integers_when_it_can() {
    // These two differ only beyond f64 precision.
    let a = Number::parse("1180591620717411303424").unwrap();
    let b = Number::parse("1180591620717411303425").unwrap();
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&a), Ordering::Greater);
    assert_eq!(a.compare(&a), Ordering::Equal);

    assert_eq!(Number::from_float(1.5).compare(&Number::from_int(2)), Ordering::Less);
}

#[test]
fn zero_detection_is_kind_specific() {
    assert!(Number::from_int(0).is_zero());
    assert!(Number::from_float(0.0).is_zero());
    assert!(!Number::from_float(0.1).is_zero());
    assert!(!Number::parse("0.0").unwrap().is_integer());
    assert!(Number::parse("0.0").unwrap().is_zero());
}

#[test]
fn values_compare_by_string() {
    assert_eq!(Value::from("a\nb"), Value::from(vec![Value::from("a"), Value::from("b")]));
    assert_ne!(Value::from("x"), Value::from("y"));
}
