//! JSON serialization.
//!
//! This module provides two serializers:
//!
//! - [`Serializer`] writes JSON text, compact or pretty-printed
//! - [`ElementSerializer`] builds a [`JsonElement`] tree
//!
//! Both render scalars through [`CanonicalFormat`](crate::CanonicalFormat), so a
//! value serialized directly and the same value serialized through an element
//! tree produce identical text. Floats keep their own width: an `f32` is never
//! widened to `f64` before formatting.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_json_element::{to_string, to_string_pretty};
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: f64 }
//!
//! let data = Data { x: 1, y: 1.0 };
//! assert_eq!(to_string(&data).unwrap(), r#"{"x":1,"y":1.0}"#);
//! assert_eq!(to_string_pretty(&data).unwrap(), "{\n  \"x\": 1,\n  \"y\": 1.0\n}");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_json_element::{JsonOptions, Serializer};
//!
//! let mut serializer = Serializer::new(JsonOptions::new());
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "[1,2,3]");
//! ```

use crate::format::{write_quoted, CanonicalFormat};
use crate::literal::LITERAL_TOKEN;
use crate::{Error, JsonElement, JsonLiteral, JsonMap, JsonOptions, Result};
use serde::{ser, Serialize};

/// The JSON text serializer.
pub struct Serializer {
    output: String,
    options: JsonOptions,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: JsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(128),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    fn begin_container(&mut self, open: char) {
        self.output.push(open);
        self.indent_level += 1;
    }

    fn begin_entry(&mut self, first: bool) {
        if !first {
            self.output.push(',');
        }
        self.write_indent();
    }

    fn end_container(&mut self, close: char, empty: bool) {
        self.indent_level -= 1;
        if !empty {
            self.write_indent();
        }
        self.output.push(close);
    }

    fn write_key(&mut self, key: &str) {
        write_quoted(&mut self.output, key);
        self.output.push(':');
        if self.options.pretty {
            self.output.push(' ');
        }
    }

    /// Opens `{"variant":` for externally tagged enum variants.
    fn begin_variant(&mut self, variant: &str) {
        self.begin_container('{');
        self.begin_entry(true);
        self.write_key(variant);
    }

    fn write_float<F>(&mut self, value: F, finite: bool) -> Result<()>
    where
        F: CanonicalFormat,
    {
        if !finite && !self.options.allow_special_floats {
            return Err(Error::non_finite_float(&value.to_canonical()));
        }
        value.write_canonical(&mut self.output);
        Ok(())
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = SeqSerializer<'a>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = MapSerializer<'a>;
    type SerializeStructVariant = MapSerializer<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        v.write_canonical(&mut self.output);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.write_float(v, v.is_finite())
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.write_float(v, v.is_finite())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        write_quoted(&mut self.output, v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.output.push_str("null");
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        if name == LITERAL_TOKEN {
            let text = value.serialize(RawTextEmitter)?;
            self.output.push_str(&text);
            return Ok(());
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.begin_variant(variant);
        value.serialize(&mut *self)?;
        self.end_container('}', false);
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.begin_container('[');
        Ok(SeqSerializer {
            ser: self,
            first: true,
            variant: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.begin_variant(variant);
        self.begin_container('[');
        Ok(SeqSerializer {
            ser: self,
            first: true,
            variant: true,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.begin_container('{');
        Ok(MapSerializer {
            ser: self,
            first: true,
            variant: false,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.begin_variant(variant);
        self.begin_container('{');
        Ok(MapSerializer {
            ser: self,
            first: true,
            variant: true,
        })
    }
}

/// Writes array elements; also closes the wrapping object of a tuple variant.
pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
    variant: bool,
}

impl<'a> SeqSerializer<'a> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.begin_entry(self.first);
        self.first = false;
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        self.ser.end_container(']', self.first);
        if self.variant {
            self.ser.end_container('}', false);
        }
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTuple for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleVariant for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// Writes object members; also closes the wrapping object of a struct variant.
pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
    variant: bool,
}

impl<'a> MapSerializer<'a> {
    fn field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.begin_entry(self.first);
        self.first = false;
        self.ser.write_key(key);
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        self.ser.end_container('}', self.first);
        if self.variant {
            self.ser.end_container('}', false);
        }
        Ok(())
    }
}

impl<'a> ser::SerializeMap for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = key_to_string(key)?;
        self.ser.begin_entry(self.first);
        self.first = false;
        self.ser.write_key(&key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeStruct for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeStructVariant for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// Map keys must render as a scalar; their content becomes the member name.
fn key_to_string<T>(key: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_element(key)? {
        JsonElement::Literal(literal) => Ok(literal.into_content()),
        other => Err(Error::invalid_key(&format!(
            "map keys must be strings, numbers or booleans, found {}",
            other.kind()
        ))),
    }
}

/// Extracts the raw token text carried inside a literal newtype.
struct RawTextEmitter;

fn raw_text_expected<T>() -> Result<T> {
    Err(Error::custom("literal token text must be a string"))
}

impl ser::Serializer for RawTextEmitter {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bool(self, _v: bool) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_char(self, _v: char) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_none(self) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        raw_text_expected()
    }

    fn serialize_unit(self) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<String> {
        raw_text_expected()
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, _value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        raw_text_expected()
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        raw_text_expected()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        raw_text_expected()
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        raw_text_expected()
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        raw_text_expected()
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        raw_text_expected()
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        raw_text_expected()
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        raw_text_expected()
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        raw_text_expected()
    }
}

/// Serializes any `Serialize` value into a [`JsonElement`] tree.
pub struct ElementSerializer;

pub struct SerializeVec {
    vec: Vec<JsonElement>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: JsonMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

fn literal<T: Into<JsonLiteral>>(value: T) -> Result<JsonElement> {
    Ok(JsonElement::Literal(value.into()))
}

fn float_literal<F>(value: F, finite: bool) -> Result<JsonElement>
where
    F: CanonicalFormat + Into<JsonLiteral>,
{
    if !finite {
        return Err(Error::non_finite_float(&value.to_canonical()));
    }
    literal(value)
}

impl ser::Serializer for ElementSerializer {
    type Ok = JsonElement;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_i8(self, v: i8) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_i16(self, v: i16) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_i32(self, v: i32) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_i64(self, v: i64) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_i128(self, v: i128) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_u8(self, v: u8) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_u16(self, v: u16) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_u32(self, v: u32) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_u64(self, v: u64) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_u128(self, v: u128) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_f32(self, v: f32) -> Result<JsonElement> {
        float_literal(v, v.is_finite())
    }

    fn serialize_f64(self, v: f64) -> Result<JsonElement> {
        float_literal(v, v.is_finite())
    }

    fn serialize_char(self, v: char) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_str(self, v: &str) -> Result<JsonElement> {
        literal(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsonElement> {
        let vec = v.iter().map(|&b| JsonElement::from(b)).collect();
        Ok(JsonElement::Array(vec))
    }

    fn serialize_none(self) -> Result<JsonElement> {
        Ok(JsonElement::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JsonElement>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsonElement> {
        Ok(JsonElement::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JsonElement> {
        Ok(JsonElement::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsonElement> {
        literal(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<JsonElement>
    where
        T: ?Sized + Serialize,
    {
        if name == LITERAL_TOKEN {
            let text = value.serialize(RawTextEmitter)?;
            return Ok(JsonElement::Literal(JsonLiteral::unquoted(text)));
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<JsonElement>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(Some(variant), to_element(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(variant)))
    }
}

fn wrap_variant(variant: Option<&'static str>, inner: JsonElement) -> JsonElement {
    match variant {
        Some(name) => {
            let mut object = JsonMap::with_capacity(1);
            object.insert(name.to_string(), inner);
            JsonElement::Object(object)
        }
        None => inner,
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_element(value)?);
        Ok(())
    }

    fn finish(self) -> Result<JsonElement> {
        Ok(wrap_variant(self.variant, JsonElement::Array(self.vec)))
    }
}

impl SerializeMap {
    fn new(variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: JsonMap::new(),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Result<JsonElement> {
        Ok(wrap_variant(self.variant, JsonElement::Object(self.map)))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_to_string(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_element(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_element(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = JsonElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_element(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonElement> {
        self.finish()
    }
}

pub(crate) fn to_element<T: Serialize + ?Sized>(value: &T) -> Result<JsonElement> {
    value.serialize(ElementSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonNull;
    use std::collections::BTreeMap;

    fn compact<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut serializer = Serializer::new(JsonOptions::new());
        value.serialize(&mut serializer)?;
        Ok(serializer.into_inner())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&true).unwrap(), "true");
        assert_eq!(compact(&-5i8).unwrap(), "-5");
        assert_eq!(compact(&u128::MAX).unwrap(), "340282366920938463463374607431768211455");
        assert_eq!(compact(&'q').unwrap(), "\"q\"");
        assert_eq!(compact(&JsonNull).unwrap(), "null");
        assert_eq!(compact(&None::<i32>).unwrap(), "null");
    }

    #[cfg(not(feature = "native-float-format"))]
    #[test]
    #[cfg_attr(feature = "native-float-format", ignore)]
    fn test_float_width() {
        assert_eq!(compact(&1.1f32).unwrap(), "1.1");
        assert_eq!(compact(&0.0f32).unwrap(), "0.0");
        assert_eq!(compact(&1e7f64).unwrap(), "1.0E7");
    }

    #[test]
    fn test_non_finite_rejected_by_default() {
        assert!(matches!(compact(&f64::NAN), Err(Error::NonFiniteFloat(_))));
        assert!(matches!(to_element(&f32::INFINITY), Err(Error::NonFiniteFloat(_))));

        let mut serializer = Serializer::new(JsonOptions::new().with_special_floats(true));
        f32::NEG_INFINITY.serialize(&mut serializer).unwrap();
        assert_eq!(serializer.into_inner(), "-Infinity");
    }

    #[test]
    fn test_unquoted_literal_written_raw() {
        let literal = JsonLiteral::unquoted("1.0E10");
        assert_eq!(compact(&literal).unwrap(), "1.0E10");
        assert_eq!(compact(&JsonLiteral::string("1.0E10")).unwrap(), "\"1.0E10\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(compact(&Vec::<i32>::new()).unwrap(), "[]");
        assert_eq!(compact(&BTreeMap::<String, i32>::new()).unwrap(), "{}");

        let mut serializer = Serializer::new(JsonOptions::pretty());
        Vec::<i32>::new().serialize(&mut serializer).unwrap();
        assert_eq!(serializer.into_inner(), "[]");
    }

    #[test]
    fn test_enum_variants() {
        #[derive(Serialize)]
        enum Shape {
            Unit,
            Circle(f64),
            Point(i32, i32),
            Rect { w: u8, h: u8 },
        }

        assert_eq!(compact(&Shape::Unit).unwrap(), "\"Unit\"");
        assert_eq!(compact(&Shape::Circle(2.5)).unwrap(), r#"{"Circle":2.5}"#);
        assert_eq!(compact(&Shape::Point(1, 2)).unwrap(), r#"{"Point":[1,2]}"#);
        assert_eq!(compact(&Shape::Rect { w: 3, h: 4 }).unwrap(), r#"{"Rect":{"w":3,"h":4}}"#);

        let element = to_element(&Shape::Point(1, 2)).unwrap();
        assert_eq!(element.to_string(), r#"{"Point":[1,2]}"#);
    }

    #[test]
    fn test_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(compact(&map).unwrap(), r#"{"1":"one","2":"two"}"#);

        let mut bad = BTreeMap::new();
        bad.insert(vec![1], 1);
        assert!(matches!(compact(&bad), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_element_serializer_keeps_quoting() {
        assert_eq!(to_element(&"239").unwrap(), JsonElement::Literal(JsonLiteral::string("239")));
        assert_eq!(to_element(&239).unwrap(), JsonElement::Literal(JsonLiteral::unquoted("239")));
        assert_eq!(
            to_element(&JsonLiteral::unquoted("1.0")).unwrap(),
            JsonElement::Literal(JsonLiteral::unquoted("1.0"))
        );
        assert_eq!(to_element(&[1u8, 2][..]).unwrap().to_string(), "[1,2]");
    }

    #[test]
    fn test_pretty_nesting() {
        let mut serializer = Serializer::new(JsonOptions::pretty());
        let value: BTreeMap<&str, Vec<i32>> = [("a", vec![1, 2]), ("b", vec![])].into_iter().collect();
        value.serialize(&mut serializer).unwrap();
        assert_eq!(
            serializer.into_inner(),
            "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": []\n}"
        );
    }
}
