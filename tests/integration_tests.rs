use serde::{Deserialize, Serialize};
use serde_json_element::{
    from_element, from_reader, from_str, json_element, to_element, to_string, to_string_pretty,
    Error, JsonElement, JsonLiteral, JsonMap, JsonNull, JsonPrimitive, PrimitiveView,
};

const RAW_LITERAL_KEY: &str = "$serde_json_element::private::JsonLiteral";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct LiteralWrapper {
    literal: JsonLiteral,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct PrimitiveWrapper {
    primitive: JsonPrimitive,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct NullWrapper {
    element: JsonNull,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Reading {
    sensor: String,
    value: JsonLiteral,
    extra: JsonElement,
}

fn assert_wrapper_round_trip(literal: JsonLiteral, expected: &str) {
    let wrapper = LiteralWrapper { literal };
    let json = to_string(&wrapper).unwrap();
    assert_eq!(json, expected);

    let back: LiteralWrapper = from_str(&json).unwrap();
    assert_eq!(back, wrapper);
}

#[test]
fn test_literal_wrapper_round_trips() {
    assert_wrapper_round_trip(JsonLiteral::from(1), r#"{"literal":1}"#);
    assert_wrapper_round_trip(JsonLiteral::from(1.0), r#"{"literal":1.0}"#);
    assert_wrapper_round_trip(JsonLiteral::from(-1.5f32), r#"{"literal":-1.5}"#);
    assert_wrapper_round_trip(JsonLiteral::from(true), r#"{"literal":true}"#);
    assert_wrapper_round_trip(JsonLiteral::from("foo"), r#"{"literal":"foo"}"#);
    assert_wrapper_round_trip(JsonLiteral::from("239"), r#"{"literal":"239"}"#);
    assert_wrapper_round_trip(JsonLiteral::from(u64::MAX), r#"{"literal":18446744073709551615}"#);
}

#[test]
fn test_decoded_literal_keeps_token_text() {
    let wrapper: LiteralWrapper = from_str(r#"{ "literal" : 1.0 }"#).unwrap();
    assert_eq!(wrapper.literal.content(), "1.0");
    assert!(!wrapper.literal.is_string());
    assert_eq!(to_string(&wrapper).unwrap(), r#"{"literal":1.0}"#);

    let wrapper: LiteralWrapper = from_str(r#"{"literal":1e400}"#).unwrap();
    assert_eq!(wrapper.literal.content(), "1e400");
}

#[test]
fn test_quoted_and_unquoted_literals_differ() {
    let quoted: JsonLiteral = from_str("\"239\"").unwrap();
    let unquoted: JsonLiteral = from_str("239").unwrap();

    assert_ne!(quoted, unquoted);
    assert_eq!(quoted.as_i32().unwrap(), 239);
    assert_eq!(unquoted.as_i32().unwrap(), 239);
    assert_eq!(quoted.to_string(), "\"239\"");
    assert_eq!(unquoted.to_string(), "239");
}

#[test]
fn test_primitive_wrapper_round_trips() {
    for (primitive, expected) in [
        (JsonPrimitive::from(JsonLiteral::from(1)), r#"{"primitive":1}"#),
        (JsonPrimitive::from(JsonLiteral::from("foo")), r#"{"primitive":"foo"}"#),
        (JsonPrimitive::Null, r#"{"primitive":null}"#),
    ] {
        let wrapper = PrimitiveWrapper { primitive };
        let json = to_string(&wrapper).unwrap();
        assert_eq!(json, expected);
        let back: PrimitiveWrapper = from_str(&json).unwrap();
        assert_eq!(back, wrapper);
    }
}

#[test]
fn test_null_wrapper() {
    let json = to_string(&NullWrapper { element: JsonNull }).unwrap();
    assert_eq!(json, r#"{"element":null}"#);
    let back: NullWrapper = from_str(&json).unwrap();
    assert_eq!(back.element, JsonNull);

    assert!(from_str::<NullWrapper>(r#"{"element":0}"#).is_err());
}

#[test]
fn test_top_level_literals() {
    let literal: JsonLiteral = from_str("42").unwrap();
    assert_eq!(literal, JsonLiteral::from(42));
    assert_eq!(to_string(&literal).unwrap(), "42");

    let literal: JsonLiteral = from_str("\"some string literal\"").unwrap();
    assert_eq!(literal, JsonLiteral::string("some string literal"));
    assert_eq!(to_string(&literal).unwrap(), "\"some string literal\"");

    let literal: JsonLiteral = from_str("  -0.0  ").unwrap();
    assert_eq!(literal.content(), "-0.0");
}

#[test]
fn test_top_level_primitive_through_element() {
    let element: JsonElement = from_str("1.3").unwrap();
    assert_eq!(element, JsonElement::Literal(JsonLiteral::unquoted("1.3")));

    let primitive: JsonPrimitive = from_element(element.clone()).unwrap();
    assert_eq!(primitive.as_f64().unwrap(), 1.3);
    assert_eq!(primitive.to_string(), "1.3");
    assert_eq!(to_string(&primitive).unwrap(), element.to_string());
}

#[test]
fn test_literal_rejects_structures() {
    for input in [r#"{"a": 1}"#, "[1, 2]", "null"] {
        let err = from_str::<JsonLiteral>(input).unwrap_err();
        assert!(
            matches!(err, Error::StructuralMismatch { .. }),
            "unexpected error for {}: {:?}",
            input,
            err
        );
    }

    let err = from_str::<LiteralWrapper>("{\n  \"literal\": [1]\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Structural mismatch at line 2, column 14: expected literal, found array"
    );
}

#[test]
fn test_primitive_rejects_structures() {
    assert!(matches!(
        from_str::<JsonPrimitive>("{}"),
        Err(Error::StructuralMismatch { .. })
    ));
    assert!(matches!(
        from_element::<JsonPrimitive>(json_element!([1])),
        Err(Error::StructuralMismatch { .. })
    ));
}

#[test]
fn test_malformed_tokens() {
    assert!(from_str::<JsonLiteral>("01").unwrap_err().is_syntax());
    assert!(from_str::<JsonLiteral>("tru").unwrap_err().is_syntax());
    assert!(from_str::<JsonLiteral>("1.").unwrap_err().is_syntax());
    assert!(matches!(
        from_str::<JsonLiteral>("\"open"),
        Err(Error::UnexpectedEof { .. })
    ));
    assert!(matches!(
        from_str::<JsonLiteral>("1 2"),
        Err(Error::TrailingCharacters { line: 1, col: 3 })
    ));
}

#[test]
fn test_coercion_errors() {
    let literal = JsonLiteral::from("foo");
    assert_eq!(literal.as_str().unwrap(), "foo");
    assert_eq!(
        literal.as_i32().unwrap_err(),
        Error::coercion("i32", "foo")
    );
    assert!(literal.as_bool().is_err());
    assert_eq!(literal.as_i32_or_null(), None);

    let literal = JsonLiteral::from(i64::MAX);
    assert_eq!(literal.as_i64().unwrap(), i64::MAX);
    assert!(literal.as_i32().is_err());
}

#[test]
fn test_null_view() {
    let null: JsonPrimitive = from_str("null").unwrap();
    assert!(null.is_null());
    assert!(!null.is_string());
    assert_eq!(null.as_str_or_null(), None);
    assert_eq!(null.as_bool_or_null(), None);
    assert_eq!(null.as_f64_or_null(), None);
    assert!(matches!(null.as_i64(), Err(Error::Coercion { .. })));
    assert_eq!(null.to_string(), "null");
}

#[test]
fn test_element_primitive_view() {
    let element = json_element!({ "n": 7, "s": "x" });
    assert!(matches!(
        element.primitive(),
        Err(Error::StructuralMismatch { .. })
    ));

    let n = element.get("n").unwrap().primitive().unwrap();
    assert_eq!(n.as_i32().unwrap(), 7);
    let s = element.get("s").unwrap().primitive().unwrap();
    assert!(s.is_string());
    assert_eq!(s.as_str().unwrap(), "x");
}

#[test]
fn test_mixed_struct() {
    let json = r#"{"sensor":"t1","value":21.50,"extra":{"unit":"C","history":[21.5,-3E2,null]}}"#;
    let reading: Reading = from_str(json).unwrap();

    assert_eq!(reading.value.content(), "21.50");
    assert_eq!(reading.value.as_f32().unwrap(), 21.5);
    assert_eq!(to_string(&reading).unwrap(), json);

    let element = to_element(&reading).unwrap();
    let back: Reading = from_element(element).unwrap();
    assert_eq!(back, reading);
}

#[test]
fn test_pretty_output() {
    let reading = Reading {
        sensor: "t1".to_string(),
        value: JsonLiteral::from(1.0f32),
        extra: json_element!([]),
    };
    assert_eq!(
        to_string_pretty(&reading).unwrap(),
        "{\n  \"sensor\": \"t1\",\n  \"value\": 1.0,\n  \"extra\": []\n}"
    );
}

#[test]
fn test_from_reader() {
    let input = std::io::Cursor::new(br#"{"literal": "foo"}"#.to_vec());
    let wrapper: LiteralWrapper = from_reader(input).unwrap();
    assert_eq!(wrapper.literal, JsonLiteral::string("foo"));
}

#[test]
fn test_serde_json_interop() {
    // serde_json produces text this crate decodes verbatim.
    let json = serde_json::to_string(&serde_json::json!({ "literal": 2.5 })).unwrap();
    let wrapper: LiteralWrapper = from_str(&json).unwrap();
    assert_eq!(wrapper.literal.content(), "2.5");

    // serde_json can drive the literal and element visitors too.
    let literal: JsonLiteral = serde_json::from_str("1.0").unwrap();
    assert_eq!(literal, JsonLiteral::unquoted("1.0"));
    let literal: JsonLiteral = serde_json::from_str("\"239\"").unwrap();
    assert_eq!(literal, JsonLiteral::string("239"));
    let element: JsonElement = serde_json::from_str(r#"{"a":[1,true,null]}"#).unwrap();
    assert_eq!(element, json_element!({ "a": [1, true, null] }));

    // Text from this crate is valid JSON for serde_json.
    let ours = to_string(&json_element!({ "x": [1.0, "y", null] })).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ours).unwrap();
    assert_eq!(value["x"][1], "y");

    // Foreign serializers only see the literal's text.
    assert_eq!(serde_json::to_string(&JsonLiteral::from(1)).unwrap(), "\"1\"");
    assert_eq!(serde_json::to_string(&JsonLiteral::from("a")).unwrap(), "\"a\"");
}

#[test]
fn test_raw_literal_key_in_input_is_data() {
    let input = format!(r#"{{"{}":"1, \"injected\": true"}}"#, RAW_LITERAL_KEY);
    let element: JsonElement = from_str(&input).unwrap();
    assert!(element.is_object());
    assert_eq!(
        element.get(RAW_LITERAL_KEY),
        Some(&JsonElement::from("1, \"injected\": true"))
    );

    let json = element.to_string();
    assert_eq!(json, input);
    let back: JsonElement = from_str(&json).unwrap();
    assert_eq!(back, element);

    let element: JsonElement = from_str(&format!(r#"{{"{}":"1","b":2}}"#, RAW_LITERAL_KEY)).unwrap();
    assert_eq!(element.as_object().map(JsonMap::len), Some(2));
}

#[test]
fn test_raw_literal_key_through_serde_json() {
    let input = format!(r#"{{"{}":"not json"}}"#, RAW_LITERAL_KEY);
    assert!(serde_json::from_str::<JsonLiteral>(&input).is_err());

    let element: JsonElement = serde_json::from_str(&input).unwrap();
    assert!(element.is_object());
    assert_eq!(element.get(RAW_LITERAL_KEY), Some(&JsonElement::from("not json")));
}
