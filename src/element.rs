//! Dynamic element tree for JSON data.
//!
//! [`JsonElement`] is a closed union of null, literal, array and object. Scalars
//! are kept as [`JsonLiteral`] text, so decoding and re-encoding a tree never
//! changes how a number is written.
//!
//! ## Usage Patterns
//!
//! ### Creating Elements
//!
//! ```rust
//! use serde_json_element::{json_element, JsonElement};
//!
//! let null = JsonElement::Null;
//! let number = JsonElement::from(42);
//! let text = JsonElement::from("hello");
//!
//! let object = json_element!({
//!     "name": "Alice",
//!     "scores": [1, 2, 3]
//! });
//! assert!(object.is_object());
//! ```
//!
//! ### Inspecting Elements
//!
//! ```rust
//! use serde_json_element::{from_str, JsonElement, PrimitiveView};
//!
//! let element: JsonElement = from_str(r#"{"literal": 1.0}"#).unwrap();
//! let literal = element.get("literal").unwrap();
//! assert_eq!(literal.to_string(), "1.0");
//! assert_eq!(literal.primitive().unwrap().as_f64().unwrap(), 1.0);
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_json_element::to_element;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: f32 }
//!
//! let element = to_element(&Point { x: 10, y: 0.5 }).unwrap();
//! assert_eq!(element.to_string(), r#"{"x":10,"y":0.5}"#);
//! ```

use crate::literal::{is_unquoted_token, LiteralVisitor, ELEMENT_TOKEN, LITERAL_TOKEN};
use crate::{Error, JsonLiteral, JsonMap, JsonNull, JsonPrimitive, PrimitiveView, Result};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Any JSON element: null, a scalar literal, an array or an object.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{JsonElement, JsonLiteral};
///
/// let literal = JsonElement::Literal(JsonLiteral::from(1));
/// assert!(literal.is_literal());
/// assert_eq!(literal.kind(), "literal");
///
/// let array = JsonElement::Array(vec![JsonElement::Null, literal]);
/// assert_eq!(array.to_string(), "[null,1]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum JsonElement {
    #[default]
    Null,
    Literal(JsonLiteral),
    Array(Vec<JsonElement>),
    Object(JsonMap),
}

impl JsonElement {
    /// Short name of this element's kind, used in mismatch diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            JsonElement::Null => "null",
            JsonElement::Literal(_) => "literal",
            JsonElement::Array(_) => "array",
            JsonElement::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonElement::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, JsonElement::Literal(_))
    }

    /// Returns `true` for quoted literals only.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonElement::Literal(literal) if literal.is_string())
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonElement::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonElement::Object(_))
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&JsonLiteral> {
        match self {
            JsonElement::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsonElement>> {
        match self {
            JsonElement::Array(elements) => Some(elements),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonElement::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an object member. Returns `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonElement> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Views a scalar element through [`PrimitiveView`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::StructuralMismatch`] for arrays and objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json_element::{json_element, JsonElement, PrimitiveView};
    ///
    /// assert!(JsonElement::Null.primitive().unwrap().is_null());
    /// assert!(json_element!([1]).primitive().is_err());
    /// ```
    pub fn primitive(&self) -> Result<&dyn PrimitiveView> {
        match self {
            JsonElement::Null => Ok(&JsonNull),
            JsonElement::Literal(literal) => Ok(literal),
            other => Err(Error::structural_mismatch("primitive", other.kind())),
        }
    }

    /// Content of a quoted literal.
    ///
    /// Unquoted literals return `None` even when they hold text such as `true`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonElement::Literal(literal) if literal.is_string() => Some(literal.content()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_literal().and_then(|l| l.as_i64_or_null())
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_literal().and_then(|l| l.as_f64_or_null())
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_literal().and_then(|l| l.as_bool_or_null())
    }
}

impl fmt::Display for JsonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for JsonElement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl Serialize for JsonElement {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonElement::Null => serializer.serialize_unit(),
            JsonElement::Literal(literal) => literal.serialize(serializer),
            JsonElement::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonElement::Object(map) => {
                let mut object = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    object.serialize_entry(key, value)?;
                }
                object.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonElement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_newtype_struct(ELEMENT_TOKEN, ElementVisitor)
    }
}

struct ElementVisitor;

macro_rules! delegate_to_literal {
    ($($method:ident: $ty:ty),*) => {
        $(
            fn $method<E>(self, value: $ty) -> std::result::Result<JsonElement, E>
            where
                E: de::Error,
            {
                LiteralVisitor.$method(value).map(JsonElement::Literal)
            }
        )*
    };
}

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = JsonElement;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON element")
    }

    delegate_to_literal!(
        visit_bool: bool,
        visit_i64: i64,
        visit_i128: i128,
        visit_u64: u64,
        visit_u128: u128,
        visit_f32: f32,
        visit_f64: f64,
        visit_char: char,
        visit_str: &str,
        visit_string: String
    );

    fn visit_unit<E>(self) -> std::result::Result<JsonElement, E> {
        Ok(JsonElement::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<JsonElement, E> {
        Ok(JsonElement::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<JsonElement, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonElement::deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<JsonElement, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<JsonElement, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(JsonElement::Array(elements))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<JsonElement, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = JsonMap::new();
        while let Some((key, value)) = map.next_entry()? {
            object.insert(key, value);
        }

        // A lone raw-literal entry carries bare token text; anything else is data.
        if object.len() == 1 {
            let raw = object
                .get(LITERAL_TOKEN)
                .and_then(JsonElement::as_literal)
                .map(JsonLiteral::content)
                .filter(|text| is_unquoted_token(text));
            if let Some(text) = raw {
                return Ok(JsonElement::Literal(JsonLiteral::unquoted(text)));
            }
        }
        Ok(JsonElement::Object(object))
    }
}

impl TryFrom<JsonElement> for JsonLiteral {
    type Error = Error;

    fn try_from(element: JsonElement) -> Result<Self> {
        match element {
            JsonElement::Literal(literal) => Ok(literal),
            other => Err(Error::structural_mismatch("literal", other.kind())),
        }
    }
}

impl TryFrom<JsonElement> for JsonPrimitive {
    type Error = Error;

    fn try_from(element: JsonElement) -> Result<Self> {
        match element {
            JsonElement::Null => Ok(JsonPrimitive::Null),
            JsonElement::Literal(literal) => Ok(JsonPrimitive::Literal(literal)),
            other => Err(Error::structural_mismatch("primitive", other.kind())),
        }
    }
}

impl TryFrom<JsonElement> for i64 {
    type Error = Error;

    fn try_from(element: JsonElement) -> Result<Self> {
        JsonLiteral::try_from(element)?.as_i64()
    }
}

impl TryFrom<JsonElement> for f64 {
    type Error = Error;

    fn try_from(element: JsonElement) -> Result<Self> {
        JsonLiteral::try_from(element)?.as_f64()
    }
}

impl TryFrom<JsonElement> for bool {
    type Error = Error;

    fn try_from(element: JsonElement) -> Result<Self> {
        JsonLiteral::try_from(element)?.as_bool()
    }
}

impl TryFrom<JsonElement> for String {
    type Error = Error;

    fn try_from(element: JsonElement) -> Result<Self> {
        Ok(JsonLiteral::try_from(element)?.into_content())
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonElement {
                fn from(value: $ty) -> Self {
                    JsonElement::Literal(JsonLiteral::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String,
    &str
);

impl From<JsonLiteral> for JsonElement {
    fn from(literal: JsonLiteral) -> Self {
        JsonElement::Literal(literal)
    }
}

impl From<JsonNull> for JsonElement {
    fn from(_: JsonNull) -> Self {
        JsonElement::Null
    }
}

impl From<JsonPrimitive> for JsonElement {
    fn from(primitive: JsonPrimitive) -> Self {
        match primitive {
            JsonPrimitive::Null => JsonElement::Null,
            JsonPrimitive::Literal(literal) => JsonElement::Literal(literal),
        }
    }
}

impl From<Vec<JsonElement>> for JsonElement {
    fn from(elements: Vec<JsonElement>) -> Self {
        JsonElement::Array(elements)
    }
}

impl From<JsonMap> for JsonElement {
    fn from(map: JsonMap) -> Self {
        JsonElement::Object(map)
    }
}
