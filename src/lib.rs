//! # serde_json_element
//!
//! A Serde-compatible JSON element tree whose scalar literals round-trip exactly.
//!
//! ## What does it do?
//!
//! Every JSON scalar is held as a [`JsonLiteral`]: its canonical text plus a flag
//! saying whether that text is quoted. Decoding `1.0` and encoding it again gives
//! `1.0`, never `1`; the string `"239"` and the number `239` stay distinct even
//! though both read as the integer 239.
//!
//! ## Key Features
//!
//! - **Exact literal text**: literals, primitives and element trees re-emit the
//!   token text they were decoded from
//! - **Type-directed formatting**: `f32` and `f64` are each rendered with the
//!   shortest digits for their own width, in the JVM layout (`1.0E7`, `4.9E-324`)
//! - **Primitive views**: [`PrimitiveView`] reads a literal as `bool`, `i32`,
//!   `i64`, `f32`, `f64` or text, with strict and null-tolerant accessors
//! - **Serde compatible**: any `#[derive(Serialize, Deserialize)]` type can be
//!   written to and read from JSON text or a [`JsonElement`] tree
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_json_element::{from_str, to_string, JsonLiteral};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Wrapper {
//!     literal: JsonLiteral,
//! }
//!
//! let wrapper = Wrapper { literal: JsonLiteral::from(1) };
//! let json = to_string(&wrapper).unwrap();
//! assert_eq!(json, r#"{"literal":1}"#);
//!
//! let back: Wrapper = from_str(&json).unwrap();
//! assert_eq!(wrapper, back);
//! ```
//!
//! ### Primitive Views
//!
//! ```rust
//! use serde_json_element::{from_str, JsonPrimitive, PrimitiveView};
//!
//! let primitive: JsonPrimitive = from_str("\"239\"").unwrap();
//! assert!(primitive.is_string());
//! assert_eq!(primitive.as_i32().unwrap(), 239);
//!
//! let null: JsonPrimitive = from_str("null").unwrap();
//! assert!(null.as_i32().is_err());
//! assert_eq!(null.as_i32_or_null(), None);
//! ```
//!
//! ### Dynamic Elements with `json_element!`
//!
//! ```rust
//! use serde_json_element::{json_element, JsonElement};
//!
//! let data = json_element!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! assert_eq!(data.get("name").and_then(JsonElement::as_str), Some("Alice"));
//! assert_eq!(data.to_string(), r#"{"name":"Alice","tags":["rust","serde"]}"#);
//! ```
//!
//! ## Decoding Rules
//!
//! - [`JsonLiteral`] accepts any scalar token and rejects `null`, arrays and
//!   objects with [`Error::StructuralMismatch`]
//! - [`JsonPrimitive`] additionally accepts `null`
//! - [`JsonElement`] accepts anything
//! - Trailing non-whitespace after the top-level value is an error
//!
//! ## Feature Flags
//!
//! - `native-float-format`: render floats with Rust's shortest representation
//!   (`10000000.0`, `5e-324`) instead of the JVM layout
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`literals.rs`** - literal round-trips and primitive views
//! - **`dynamic_elements.rs`** - building and inspecting element trees
//!
//! Run one with: `cargo run --example <name>`

pub mod de;
pub mod element;
pub mod error;
pub mod format;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod primitive;
pub mod ser;

pub use de::{Deserializer, ElementDeserializer};
pub use element::JsonElement;
pub use error::{Error, Result};
pub use format::CanonicalFormat;
pub use literal::JsonLiteral;
pub use map::JsonMap;
pub use options::JsonOptions;
pub use primitive::{JsonNull, JsonPrimitive, PrimitiveView};
pub use ser::{ElementSerializer, Serializer};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{to_string, JsonLiteral, JsonNull};
///
/// assert_eq!(to_string(&JsonLiteral::from(i64::MIN)).unwrap(), "-9223372036854775808");
/// assert_eq!(to_string(&JsonLiteral::string("foo")).unwrap(), "\"foo\"");
/// assert_eq!(to_string(&JsonNull).unwrap(), "null");
/// ```
///
/// # Errors
///
/// Returns an error for non-finite floats (unless enabled in [`JsonOptions`])
/// and for map keys that are not scalars.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{json_element, to_string_pretty};
///
/// let element = json_element!({ "literal": 1 });
/// assert_eq!(to_string_pretty(&element).unwrap(), "{\n  \"literal\": 1\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: JsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    tracing::trace!(pretty = options.pretty, "encoding JSON text");
    let mut serializer = Serializer::new(options);
    if let Err(err) = value.serialize(&mut serializer) {
        tracing::debug!(error = %err, "failed to encode JSON text");
        return Err(err);
    }
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_string(value).map(String::into_bytes)
}

/// Convert any `T: Serialize` to a [`JsonElement`].
///
/// Scalars become literals with exactly the text [`to_string`] would emit.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{to_element, JsonElement, JsonLiteral};
///
/// assert_eq!(to_element(&1.5f32).unwrap(), JsonElement::Literal(JsonLiteral::unquoted("1.5")));
/// assert_eq!(to_element(&None::<u8>).unwrap(), JsonElement::Null);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_element<T>(value: &T) -> Result<JsonElement>
where
    T: ?Sized + Serialize,
{
    ser::to_element(value)
}

/// Deserialize an instance of type `T` from a [`JsonElement`].
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{from_element, json_element, JsonLiteral};
///
/// let literal: JsonLiteral = from_element(json_element!(1.3)).unwrap();
/// assert_eq!(literal.to_string(), "1.3");
///
/// let err = from_element::<JsonLiteral>(json_element!([1])).unwrap_err();
/// assert!(matches!(err, serde_json_element::Error::StructuralMismatch { .. }));
/// ```
///
/// # Errors
///
/// Returns an error if the element does not have the shape `T` expects.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_element<T>(element: JsonElement) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ElementDeserializer::new(element))
}

/// Serialize any `T: Serialize` to a writer as compact JSON.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1.0f64, 2.5]).unwrap();
/// assert_eq!(buffer, b"[1.0,2.5]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: JsonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json = to_string_with_options(value, options)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{from_str, JsonLiteral};
///
/// let literal: JsonLiteral = from_str("1.0").unwrap();
/// assert_eq!(literal.to_string(), "1.0");
///
/// assert!(from_str::<JsonLiteral>("[1]").is_err());
/// assert!(from_str::<JsonLiteral>("1 2").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or does not have the shape
/// `T` expects. Text errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, JsonOptions::default())
}

/// Deserialize an instance of type `T` from JSON text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{from_str_with_options, JsonOptions};
///
/// let options = JsonOptions::new().with_special_floats(true);
/// let value: f64 = from_str_with_options("NaN", options).unwrap();
/// assert!(value.is_nan());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: JsonOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    tracing::trace!(len = s.len(), "decoding JSON text");
    let mut deserializer = Deserializer::with_options(s, options);
    let result = T::deserialize(&mut deserializer).and_then(|value| {
        deserializer.end()?;
        Ok(value)
    });
    if let Err(err) = &result {
        tracing::debug!(error = %err, "failed to decode JSON text");
    }
    result
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{from_reader, JsonElement};
/// use std::io::Cursor;
///
/// let element: JsonElement = from_reader(Cursor::new(b"[1, \"two\"]")).unwrap();
/// assert_eq!(element.to_string(), "[1,\"two\"]");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON, or the data
/// cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON, or
/// cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
