use hostval::{Convert, ConvertErrorKind, Either, Object, ObjectKind, Value};
use std::collections::HashMap;

type Record = HashMap<String, f64>;

#[test]
fn test_select_alternative() {
    let mut object = Object::new();
    object.set("x", Value::from(1.0));

    let value = Either::<Record, Vec<f64>>::from_value(Value::object(object)).unwrap();
    assert_eq!(value, Either::Left(HashMap::from([(String::from("x"), 1.0)])));

    let value = Either::<Record, Vec<f64>>::from_value(Value::array([Value::from(2.0)])).unwrap();
    assert_eq!(value, Either::Right(vec![2.0]));
}

#[test]
fn test_first_match_wins() {
    let value = Either::<f64, u32>::from_value(Value::from(1.0)).unwrap();
    assert_eq!(value, Either::Left(1.0));

    let value = Either::<u32, f64>::from_value(Value::from(1.5)).unwrap();
    assert_eq!(value, Either::Right(1.5));
}

#[test]
fn test_non_plain_objects_fall_through() {
    let instance = Value::object(Object::with_kind(ObjectKind::Instance {
        class: "Point".into(),
    }));

    let value = Either::<HashMap<String, Value>, Value>::from_value(instance).unwrap();
    assert!(matches!(value, Either::Right(Value::Object(..))));
}

#[test]
fn test_no_alternative() {
    assert!(!Either::<Record, Vec<f64>>::can_convert(&Value::Bool(true)));

    let error = Either::<Record, Vec<f64>>::from_value(Value::Bool(true)).unwrap_err();

    assert!(matches!(error.kind(), ConvertErrorKind::TypeMismatch { .. }));
    assert_eq!(
        error.to_string(),
        "expected `object | array` but found `boolean`"
    );
}

#[test]
fn test_to_value() {
    let value = Either::<String, f64>::Left(String::from("left"))
        .to_value()
        .unwrap();

    assert!(String::can_convert(&value));

    let value = Either::<String, f64>::Right(2.0).to_value().unwrap();
    assert!(matches!(value, Value::Number(n) if n == 2.0));
}
