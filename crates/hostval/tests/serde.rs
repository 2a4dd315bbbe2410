#![cfg(feature = "serde")]

use hostval::{Object, ObjectKind, Value};
use serde_json::json;

#[test]
fn test_serialize() {
    let mut object = Object::new();
    object.set("b", Value::from(1.0));
    object.set("a", Value::array([Value::Bool(true), Value::Null, Value::Undefined]));
    object.set("s", Value::from("text"));
    object.set(
        "f",
        Value::object(Object::with_kind(ObjectKind::Function { name: "f".into() })),
    );
    object.define_getter("g", || Ok(Value::from(2.0)));

    let json = serde_json::to_value(Value::object(object)).unwrap();

    assert_eq!(
        json,
        json!({
            "b": 1.0,
            "a": [true, null, null],
            "s": "text",
            "f": null,
        })
    );
}
