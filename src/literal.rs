//! The scalar literal element.
//!
//! A [`JsonLiteral`] stores the canonical text of a scalar plus a flag saying
//! whether that text is emitted quoted. Identity is textual: two literals are
//! equal exactly when they serialize to the same JSON.
//!
//! ```rust
//! use serde_json_element::{to_string, JsonLiteral};
//!
//! let number = JsonLiteral::from(239);
//! let text = JsonLiteral::string("239");
//!
//! assert_ne!(number, text);
//! assert_eq!(to_string(&number).unwrap(), "239");
//! assert_eq!(to_string(&text).unwrap(), "\"239\"");
//! assert_eq!(text.to_string(), "\"239\"");
//! ```

use crate::format::{write_quoted, CanonicalFormat};
use crate::{Error, Result};
use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Newtype name (and raw map key) that routes literal text through this crate's
/// serializers and deserializers without reformatting.
pub(crate) const LITERAL_TOKEN: &str = "$serde_json_element::private::JsonLiteral";
pub(crate) const PRIMITIVE_TOKEN: &str = "$serde_json_element::private::JsonPrimitive";
pub(crate) const ELEMENT_TOKEN: &str = "$serde_json_element::private::JsonElement";

/// Whether `text` may be written as a bare JSON token: a number, a boolean or
/// one of the special floats.
pub(crate) fn is_unquoted_token(text: &str) -> bool {
    matches!(text, "true" | "false" | "NaN" | "Infinity" | "-Infinity") || is_json_number(text)
}

/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
pub(crate) fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    let digits_from = |mut i: usize| {
        while bytes.get(i).map_or(false, u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits_from(i),
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        let end = digits_from(i + 1);
        if end == i + 1 {
            return false;
        }
        i = end;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits_from(i);
        if end == i {
            return false;
        }
        i = end;
    }
    i == bytes.len()
}

/// An immutable JSON scalar: canonical text plus a quoting flag.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::JsonLiteral;
///
/// let long = JsonLiteral::from(i64::MAX);
/// assert_eq!(long.content(), "9223372036854775807");
/// assert!(!long.is_string());
///
/// let text = JsonLiteral::string("foo");
/// assert!(text.is_string());
/// assert_eq!(text.to_string(), "\"foo\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsonLiteral {
    content: String,
    is_string: bool,
}

impl JsonLiteral {
    /// Creates a quoted literal holding `content` verbatim.
    #[must_use]
    pub fn string(content: impl Into<String>) -> Self {
        JsonLiteral {
            content: content.into(),
            is_string: true,
        }
    }

    /// Creates an unquoted literal from already valid JSON token text such as
    /// `1`, `1.0E10` or `true`.
    ///
    /// The text is trusted and emitted as-is.
    #[must_use]
    pub fn unquoted(content: impl Into<String>) -> Self {
        JsonLiteral {
            content: content.into(),
            is_string: false,
        }
    }

    /// Creates a literal from a decoded token.
    ///
    /// `content` is the unescaped string body for quoted tokens and the raw token
    /// text otherwise.
    #[must_use]
    pub fn from_token(content: impl Into<String>, quoted: bool) -> Self {
        JsonLiteral {
            content: content.into(),
            is_string: quoted,
        }
    }

    /// Creates an unquoted literal from any scalar with a canonical text form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json_element::JsonLiteral;
    ///
    /// assert_eq!(JsonLiteral::from_canonical(&42u8).content(), "42");
    /// # #[cfg(not(feature = "native-float-format"))]
    /// assert_eq!(JsonLiteral::from_canonical(&1e7f64).content(), "1.0E7");
    /// ```
    #[must_use]
    pub fn from_canonical<T: CanonicalFormat + ?Sized>(value: &T) -> Self {
        JsonLiteral::unquoted(value.to_canonical())
    }

    /// The canonical text, without JSON quoting.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this literal is emitted surrounded by quotes.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        self.is_string
    }

    /// Consumes the literal, returning its canonical text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }

    /// Appends the JSON form of this literal to `out`.
    pub(crate) fn write_json(&self, out: &mut String) {
        if self.is_string {
            write_quoted(out, &self.content);
        } else {
            out.push_str(&self.content);
        }
    }
}

impl fmt::Display for JsonLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_string {
            let mut out = String::with_capacity(self.content.len() + 2);
            self.write_json(&mut out);
            f.write_str(&out)
        } else {
            f.write_str(&self.content)
        }
    }
}

impl FromStr for JsonLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

macro_rules! impl_from_canonical {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonLiteral {
                fn from(value: $ty) -> Self {
                    JsonLiteral::from_canonical(&value)
                }
            }
        )*
    };
}

impl_from_canonical!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl From<&str> for JsonLiteral {
    fn from(value: &str) -> Self {
        JsonLiteral::string(value)
    }
}

impl From<String> for JsonLiteral {
    fn from(value: String) -> Self {
        JsonLiteral::string(value)
    }
}

impl From<char> for JsonLiteral {
    fn from(value: char) -> Self {
        JsonLiteral::string(value.to_string())
    }
}

impl Serialize for JsonLiteral {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_string {
            serializer.serialize_str(&self.content)
        } else {
            serializer.serialize_newtype_struct(LITERAL_TOKEN, self.content.as_str())
        }
    }
}

impl<'de> Deserialize<'de> for JsonLiteral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_newtype_struct(LITERAL_TOKEN, LiteralVisitor)
    }
}

/// Builds a [`JsonLiteral`] from whatever scalar the deserializer presents.
///
/// This crate's deserializers hand over unquoted tokens as a one-entry map keyed
/// by [`LITERAL_TOKEN`]; foreign deserializers present plain scalars, which are
/// rendered through the canonical formatter.
pub(crate) struct LiteralVisitor;

impl<'de> Visitor<'de> for LiteralVisitor {
    type Value = JsonLiteral;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON literal")
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_f32<E>(self, value: f32) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_char<E>(self, value: char) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::from(value))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::string(value))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<JsonLiteral, E> {
        Ok(JsonLiteral::string(value))
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<JsonLiteral, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<JsonLiteral, A::Error>
    where
        A: MapAccess<'de>,
    {
        match map.next_key::<String>()? {
            Some(key) if key == LITERAL_TOKEN => {
                let text = map.next_value::<String>()?;
                if is_unquoted_token(&text) && map.next_key::<de::IgnoredAny>()?.is_none() {
                    Ok(JsonLiteral::unquoted(text))
                } else {
                    Err(de::Error::invalid_value(Unexpected::Str(&text), &self))
                }
            }
            _ => Err(de::Error::invalid_type(Unexpected::Map, &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_textual() {
        assert_eq!(JsonLiteral::from(1), JsonLiteral::unquoted("1"));
        assert_ne!(JsonLiteral::from(1), JsonLiteral::string("1"));
        assert_ne!(JsonLiteral::unquoted("1.0"), JsonLiteral::string("1.0"));
        assert_ne!(JsonLiteral::unquoted("1.0"), JsonLiteral::unquoted("1"));
        assert_eq!(JsonLiteral::from("foo"), JsonLiteral::from_token("foo", true));
    }

    #[test]
    fn test_display_matches_emission() {
        assert_eq!(JsonLiteral::from(42).to_string(), "42");
        assert_eq!(JsonLiteral::from(true).to_string(), "true");
        assert_eq!(JsonLiteral::string("a\"b").to_string(), "\"a\\\"b\"");
        assert_eq!(JsonLiteral::from('x').to_string(), "\"x\"");
    }

    #[test]
    fn test_string_content_is_verbatim() {
        let literal = JsonLiteral::string("tab\there");
        assert_eq!(literal.content(), "tab\there");
        assert_eq!(literal.to_string(), "\"tab\\there\"");
    }

    #[cfg(not(feature = "native-float-format"))]
    #[test]
    fn test_float_width_is_preserved() {
        assert_eq!(JsonLiteral::from(0.0f64).content(), "0.0");
        assert_eq!(JsonLiteral::from(0.0f32).content(), "0.0");
        assert_eq!(JsonLiteral::from(1.1f32).content(), "1.1");
        assert_eq!(JsonLiteral::from(1.1f32 as f64).content(), "1.100000023841858");
    }

    #[test]
    fn test_into_content() {
        assert_eq!(JsonLiteral::from(7u16).into_content(), "7");
    }

    #[test]
    fn test_unquoted_token_grammar() {
        for ok in ["0", "-1.5E-3", "true", "false", "NaN", "-Infinity"] {
            assert!(is_unquoted_token(ok), "{}", ok);
        }
        for bad in ["", "01", "1,", "not json", "1, \"x\": true", "null", "True"] {
            assert!(!is_unquoted_token(bad), "{}", bad);
        }
    }
}
