//! Property-based tests for literal preservation and typed round-trips.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json_element::{
    from_element, from_str, to_element, to_string, JsonElement, JsonLiteral, PrimitiveView,
};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

/// Syntactically valid JSON number text, including forms no formatter would emit.
fn number_text() -> impl Strategy<Value = String> {
    "-?(0|[1-9][0-9]{0,20})(\\.[0-9]{1,10})?([eE][+-]?[0-9]{1,3})?"
}

proptest! {
    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i128(n in any::<i128>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u128(n in any::<u128>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_finite_f64(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_finite_f32(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_vec_option_i32(v in prop::collection::vec(proptest::option::of(any::<i32>()), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_number_text_is_preserved(text in number_text()) {
        let literal: JsonLiteral = from_str(&text).unwrap();
        prop_assert_eq!(literal.content(), text.as_str());
        prop_assert_eq!(to_string(&literal).unwrap(), text.clone());

        let element: JsonElement = from_str(&format!("[{}]", text)).unwrap();
        prop_assert_eq!(element.to_string(), format!("[{}]", text));
    }

    #[test]
    fn prop_string_literal_round_trip(s in any::<String>()) {
        let literal = JsonLiteral::string(s.clone());
        let back: JsonLiteral = from_str(&literal.to_string()).unwrap();
        prop_assert!(back.is_string());
        prop_assert_eq!(back.as_str().unwrap(), s.as_str());
    }

    #[test]
    fn prop_i32_view(n in any::<i32>()) {
        let literal = JsonLiteral::from(n);
        prop_assert_eq!(literal.as_i32().unwrap(), n);
        prop_assert_eq!(literal.as_i64().unwrap(), i64::from(n));
        prop_assert_eq!(JsonLiteral::string(n.to_string()).as_i32().unwrap(), n);
    }

    #[test]
    fn prop_f64_view(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(JsonLiteral::from(f).as_f64().unwrap(), f);
    }

    #[test]
    fn prop_element_round_trip(v in prop::collection::vec((any::<i64>(), any::<String>()), 0..10)) {
        let element = to_element(&v).unwrap();
        let back: Vec<(i64, String)> = from_element(element).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_f32_display_matches_serialization(f in any::<f32>()) {
        let literal = JsonLiteral::from(f);
        prop_assert_eq!(literal.to_string(), to_string(&literal).unwrap());
    }

    #[test]
    fn prop_f64_display_matches_serialization(f in any::<f64>()) {
        let literal = JsonLiteral::from(f);
        prop_assert_eq!(literal.to_string(), to_string(&literal).unwrap());
    }
}
