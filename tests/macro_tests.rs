use serde_json_element::{json_element, to_string, JsonElement, JsonLiteral, JsonMap};

#[test]
fn test_json_element_macro_null() {
    let value = json_element!(null);
    assert_eq!(value, JsonElement::Null);
}

#[test]
fn test_json_element_macro_booleans() {
    assert_eq!(json_element!(true), JsonElement::Literal(JsonLiteral::unquoted("true")));
    assert_eq!(json_element!(false), JsonElement::Literal(JsonLiteral::unquoted("false")));
}

#[test]
fn test_json_element_macro_numbers() {
    assert_eq!(json_element!(42), JsonElement::Literal(JsonLiteral::unquoted("42")));
    assert_eq!(json_element!(-123), JsonElement::Literal(JsonLiteral::unquoted("-123")));
    assert_eq!(json_element!(1.0), JsonElement::Literal(JsonLiteral::unquoted("1.0")));
    assert_eq!(json_element!(2.5f32), JsonElement::Literal(JsonLiteral::unquoted("2.5")));
}

#[test]
fn test_json_element_macro_strings() {
    assert_eq!(
        json_element!("hello world"),
        JsonElement::Literal(JsonLiteral::string("hello world"))
    );
    assert_eq!(json_element!(""), JsonElement::Literal(JsonLiteral::string("")));
    // Numeric-looking strings stay quoted.
    assert_eq!(json_element!("239").to_string(), "\"239\"");
}

#[test]
fn test_json_element_macro_arrays() {
    assert_eq!(json_element!([]), JsonElement::Array(vec![]));

    let array = json_element!([1, "two", null, [true]]);
    assert_eq!(
        array,
        JsonElement::Array(vec![
            JsonElement::from(1),
            JsonElement::from("two"),
            JsonElement::Null,
            JsonElement::Array(vec![JsonElement::from(true)]),
        ])
    );
    assert_eq!(array.to_string(), r#"[1,"two",null,[true]]"#);
}

#[test]
fn test_json_element_macro_objects() {
    assert_eq!(json_element!({}), JsonElement::Object(JsonMap::new()));

    let object = json_element!({
        "name": "Alice",
        "scores": [1.5, 2.0],
        "address": {
            "city": "Paris"
        },
    });

    let mut expected = JsonMap::new();
    expected.insert("name".to_string(), JsonElement::from("Alice"));
    expected.insert(
        "scores".to_string(),
        JsonElement::Array(vec![JsonElement::from(1.5), JsonElement::from(2.0)]),
    );
    let mut address = JsonMap::new();
    address.insert("city".to_string(), JsonElement::from("Paris"));
    expected.insert("address".to_string(), JsonElement::Object(address));

    assert_eq!(object, JsonElement::Object(expected));
    assert_eq!(
        to_string(&object).unwrap(),
        r#"{"name":"Alice","scores":[1.5,2.0],"address":{"city":"Paris"}}"#
    );
}

#[test]
fn test_json_element_macro_expressions() {
    let count = 3u8;
    let label = String::from("x");
    let values = vec![1, 2];

    let element = json_element!({ "count": count, "label": label, "values": values });
    assert_eq!(element.to_string(), r#"{"count":3,"label":"x","values":[1,2]}"#);
}

#[test]
fn test_json_element_macro_non_finite_falls_back_to_null() {
    assert_eq!(json_element!(f64::NAN), JsonElement::Null);
}
