//! Primitive views over scalar elements.
//!
//! [`PrimitiveView`] is the uniform read API shared by [`JsonLiteral`],
//! [`JsonNull`] and [`JsonPrimitive`]. Accessors come in two flavors: the strict
//! ones return a [`Result`] and fail on null or unparsable content, the `_or_null`
//! ones return `None` instead.
//!
//! ```rust
//! use serde_json_element::{JsonLiteral, JsonNull, PrimitiveView};
//!
//! let number = JsonLiteral::from(1);
//! assert_eq!(number.as_i32().unwrap(), 1);
//! assert_eq!(number.as_f64().unwrap(), 1.0);
//!
//! let text = JsonLiteral::string("239");
//! assert_eq!(text.as_i64().unwrap(), 239);
//!
//! assert!(JsonNull.as_str().is_err());
//! assert_eq!(JsonNull.as_str_or_null(), None);
//! ```

use crate::literal::{LiteralVisitor, PRIMITIVE_TOKEN};
use crate::{Error, JsonLiteral, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Read access to the content of a scalar element.
///
/// Implementors only provide [`content_or_null`](PrimitiveView::content_or_null)
/// and [`is_string`](PrimitiveView::is_string); every typed accessor parses that
/// content on demand. Numeric accessors accept quoted and unquoted content alike,
/// so `"239"` reads as `239`.
pub trait PrimitiveView {
    /// The literal content, or `None` for null.
    fn content_or_null(&self) -> Option<&str>;

    /// Whether the content was (or will be) emitted quoted.
    fn is_string(&self) -> bool;

    /// Whether this is the null element.
    fn is_null(&self) -> bool {
        self.content_or_null().is_none()
    }

    /// The content as text. Never fails for a literal, fails for null.
    fn as_str(&self) -> Result<&str> {
        self.content_or_null()
            .ok_or_else(|| Error::coercion("string", "null"))
    }

    /// The content as text, or `None` for null.
    fn as_str_or_null(&self) -> Option<&str> {
        self.content_or_null()
    }

    /// Reads exactly `true` or `false`.
    fn as_bool(&self) -> Result<bool> {
        coerce(self.content_or_null(), "boolean", parse_bool)
    }

    /// Like [`as_bool`](PrimitiveView::as_bool), with `None` for null or
    /// non-boolean content.
    fn as_bool_or_null(&self) -> Option<bool> {
        self.content_or_null().and_then(parse_bool)
    }

    /// Parses the content as an `i32`; out-of-range and fractional text fail.
    fn as_i32(&self) -> Result<i32> {
        coerce(self.content_or_null(), "i32", |s| s.parse().ok())
    }

    /// `None` for null or content that is not an `i32`.
    fn as_i32_or_null(&self) -> Option<i32> {
        self.content_or_null().and_then(|s| s.parse().ok())
    }

    /// Parses the content as an `i64`.
    fn as_i64(&self) -> Result<i64> {
        coerce(self.content_or_null(), "i64", |s| s.parse().ok())
    }

    /// `None` for null or content that is not an `i64`.
    fn as_i64_or_null(&self) -> Option<i64> {
        self.content_or_null().and_then(|s| s.parse().ok())
    }

    /// Parses the content at `f32` width.
    fn as_f32(&self) -> Result<f32> {
        coerce(self.content_or_null(), "f32", |s| s.parse().ok())
    }

    /// `None` for null or content that is not a number.
    fn as_f32_or_null(&self) -> Option<f32> {
        self.content_or_null().and_then(|s| s.parse().ok())
    }

    /// Parses the content as an `f64`.
    fn as_f64(&self) -> Result<f64> {
        coerce(self.content_or_null(), "f64", |s| s.parse().ok())
    }

    /// `None` for null or content that is not a number.
    fn as_f64_or_null(&self) -> Option<f64> {
        self.content_or_null().and_then(|s| s.parse().ok())
    }
}

fn parse_bool(content: &str) -> Option<bool> {
    match content {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn coerce<T>(
    content: Option<&str>,
    expected: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T> {
    let content = content.ok_or_else(|| Error::coercion(expected, "null"))?;
    parse(content).ok_or_else(|| Error::coercion(expected, content))
}

impl PrimitiveView for JsonLiteral {
    fn content_or_null(&self) -> Option<&str> {
        Some(self.content())
    }

    fn is_string(&self) -> bool {
        JsonLiteral::is_string(self)
    }
}

/// The JSON null singleton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsonNull;

impl PrimitiveView for JsonNull {
    fn content_or_null(&self) -> Option<&str> {
        None
    }

    fn is_string(&self) -> bool {
        false
    }
}

impl fmt::Display for JsonNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

impl Serialize for JsonNull {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for JsonNull {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NullVisitor;

        impl<'de> Visitor<'de> for NullVisitor {
            type Value = JsonNull;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null")
            }

            fn visit_unit<E>(self) -> std::result::Result<JsonNull, E> {
                Ok(JsonNull)
            }

            fn visit_none<E>(self) -> std::result::Result<JsonNull, E> {
                Ok(JsonNull)
            }
        }

        deserializer.deserialize_unit(NullVisitor)
    }
}

/// Either null or a literal: the scalar subset of [`JsonElement`](crate::JsonElement).
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{from_str, to_string, JsonLiteral, JsonPrimitive, PrimitiveView};
///
/// let null: JsonPrimitive = from_str("null").unwrap();
/// assert!(null.is_null());
///
/// let number: JsonPrimitive = from_str("1.3").unwrap();
/// assert_eq!(number, JsonPrimitive::Literal(JsonLiteral::unquoted("1.3")));
/// assert_eq!(to_string(&number).unwrap(), "1.3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum JsonPrimitive {
    #[default]
    Null,
    Literal(JsonLiteral),
}

impl JsonPrimitive {
    #[must_use]
    pub fn as_literal(&self) -> Option<&JsonLiteral> {
        match self {
            JsonPrimitive::Literal(literal) => Some(literal),
            JsonPrimitive::Null => None,
        }
    }
}

impl PrimitiveView for JsonPrimitive {
    fn content_or_null(&self) -> Option<&str> {
        match self {
            JsonPrimitive::Null => None,
            JsonPrimitive::Literal(literal) => Some(literal.content()),
        }
    }

    fn is_string(&self) -> bool {
        matches!(self, JsonPrimitive::Literal(literal) if literal.is_string())
    }
}

impl fmt::Display for JsonPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPrimitive::Null => fmt::Display::fmt(&JsonNull, f),
            JsonPrimitive::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

impl FromStr for JsonPrimitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl From<JsonLiteral> for JsonPrimitive {
    fn from(literal: JsonLiteral) -> Self {
        JsonPrimitive::Literal(literal)
    }
}

impl From<JsonNull> for JsonPrimitive {
    fn from(_: JsonNull) -> Self {
        JsonPrimitive::Null
    }
}

impl<T: Into<JsonLiteral>> From<Option<T>> for JsonPrimitive {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonPrimitive::Null, |v| JsonPrimitive::Literal(v.into()))
    }
}

impl Serialize for JsonPrimitive {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonPrimitive::Null => serializer.serialize_unit(),
            JsonPrimitive::Literal(literal) => literal.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsonPrimitive {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_newtype_struct(PRIMITIVE_TOKEN, PrimitiveVisitor)
    }
}

struct PrimitiveVisitor;

macro_rules! delegate_to_literal {
    ($($method:ident: $ty:ty),*) => {
        $(
            fn $method<E>(self, value: $ty) -> std::result::Result<JsonPrimitive, E>
            where
                E: de::Error,
            {
                LiteralVisitor.$method(value).map(JsonPrimitive::Literal)
            }
        )*
    };
}

impl<'de> Visitor<'de> for PrimitiveVisitor {
    type Value = JsonPrimitive;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON literal or null")
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

    fn visit_unit<E>(self) -> std::result::Result<JsonPrimitive, E> {
        Ok(JsonPrimitive::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<JsonPrimitive, E> {
        Ok(JsonPrimitive::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<JsonPrimitive, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonPrimitive::deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<JsonPrimitive, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A>(self, map: A) -> std::result::Result<JsonPrimitive, A::Error>
    where
        A: MapAccess<'de>,
    {
        LiteralVisitor.visit_map(map).map(JsonPrimitive::Literal)
    }
}
