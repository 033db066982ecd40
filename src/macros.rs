/// Builds a [`JsonElement`](crate::JsonElement) from JSON-like syntax.
///
/// Scalars go through [`to_element`](crate::to_element), so they get the same
/// canonical text as serialized values: `json_element!(1.0)` holds `1.0`.
///
/// An expression that cannot become an element, such as `f64::NAN`, yields
/// [`JsonElement::Null`](crate::JsonElement::Null) and the error is discarded.
/// Call [`to_element`](crate::to_element) directly to see the failure.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{json_element, JsonElement};
///
/// let element = json_element!({
///     "literal": 1,
///     "items": [true, null, "x"]
/// });
/// assert_eq!(element.to_string(), r#"{"literal":1,"items":[true,null,"x"]}"#);
/// ```
#[macro_export]
macro_rules! json_element {
    (null) => {
        $crate::JsonElement::Null
    };

    (true) => {
        $crate::JsonElement::from(true)
    };

    (false) => {
        $crate::JsonElement::from(false)
    };

    ([]) => {
        $crate::JsonElement::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonElement::Array(vec![$($crate::json_element!($elem)),*])
    };

    ({}) => {
        $crate::JsonElement::Object($crate::JsonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::json_element!($value));
        )*
        $crate::JsonElement::Object(object)
    }};

    // Any other expression is converted through its `Serialize` impl; failures become null.
    ($s:expr) => {
        $crate::to_element(&$s).unwrap_or($crate::JsonElement::Null)
    };
}
