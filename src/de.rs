//! JSON deserialization.
//!
//! This module provides [`Deserializer`], which reads strict JSON text, and
//! [`ElementDeserializer`], which reads an in-memory [`JsonElement`] tree.
//!
//! ## Overview
//!
//! - **Single pass**: text is consumed left to right with no backtracking
//! - **Literal fidelity**: [`JsonLiteral`](crate::JsonLiteral),
//!   [`JsonPrimitive`](crate::JsonPrimitive) and [`JsonElement`] targets receive
//!   unquoted tokens verbatim, so `1.0` stays `1.0`
//! - **Error reporting**: syntax errors and structural mismatches carry line and
//!   column information
//! - **Bounded nesting**: arrays and objects deeper than 128 levels are rejected
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_json_element::{from_str, JsonLiteral};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Wrapper { literal: JsonLiteral }
//!
//! let wrapper: Wrapper = from_str(r#"{"literal": 1.0}"#).unwrap();
//! assert_eq!(wrapper.literal, JsonLiteral::unquoted("1.0"));
//! ```

use crate::literal::{is_json_number, ELEMENT_TOKEN, LITERAL_TOKEN, PRIMITIVE_TOKEN};
use crate::{Error, JsonElement, JsonMap, JsonOptions, Result};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

const RECURSION_LIMIT: usize = 128;

/// A bare (unquoted) token.
enum Token {
    Null,
    Literal(String),
}

/// The JSON text deserializer.
///
/// Created via [`Deserializer::from_str`] or [`Deserializer::with_options`].
/// Call [`end`](Deserializer::end) after deserializing to reject trailing input.
pub struct Deserializer<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    options: JsonOptions,
    remaining_depth: usize,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, JsonOptions::default())
    }

    pub fn with_options(input: &'de str, options: JsonOptions) -> Self {
        Deserializer {
            input,
            position: 0,
            line: 1,
            column: 1,
            options,
            remaining_depth: RECURSION_LIMIT,
        }
    }

    /// Fails if anything but whitespace remains.
    pub fn end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.at_end() {
            Ok(())
        } else {
            Err(Error::trailing_characters(self.line, self.column))
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek_char() {
            self.next_char();
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn syntax_error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    fn eof_error(&self, expected: &str) -> Error {
        Error::unexpected_eof(self.line, self.column, expected)
    }

    fn expect_char(&mut self, expected: char, what: &str) -> Result<()> {
        self.skip_whitespace();
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.next_char();
                Ok(())
            }
            Some(_) => Err(self.syntax_error(&format!("expected {}", what))),
            None => Err(self.eof_error(what)),
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.remaining_depth == 0 {
            return Err(Error::recursion_limit(self.line, self.column));
        }
        self.remaining_depth -= 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.remaining_depth += 1;
    }

    /// Parses a quoted string; the cursor must be on the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        self.next_char();
        let mut result = String::new();
        loop {
            match self.next_char() {
                Some('"') => return Ok(result),
                Some('\\') => self.parse_escape(&mut result)?,
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(self.syntax_error("control character in string"))
                }
                Some(ch) => result.push(ch),
                None => return Err(self.eof_error("closing quote")),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        match self.next_char() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let ch = self.parse_unicode_escape()?;
                out.push(ch);
            }
            Some(_) => return Err(self.syntax_error("invalid escape sequence")),
            None => return Err(self.eof_error("escape sequence")),
        }
        Ok(())
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let first = self.parse_hex4()?;
        let code_point = match first {
            0xD800..=0xDBFF => {
                if self.next_char() != Some('\\') || self.next_char() != Some('u') {
                    return Err(self.syntax_error("unpaired surrogate in unicode escape"));
                }
                let second = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.syntax_error("unpaired surrogate in unicode escape"));
                }
                0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.syntax_error("unpaired surrogate in unicode escape"))
            }
            other => other,
        };
        char::from_u32(code_point).ok_or_else(|| self.syntax_error("invalid unicode code point"))
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = match self.next_char() {
                Some(ch) => ch
                    .to_digit(16)
                    .ok_or_else(|| self.syntax_error("invalid hex digit in unicode escape"))?,
                None => return Err(self.eof_error("hex digit")),
            };
            value = value * 16 + digit;
        }
        Ok(value)
    }

    /// Reads a bare token and validates it against the JSON literal grammar.
    fn parse_token(&mut self) -> Result<Token> {
        let (line, column) = (self.line, self.column);
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if is_delimiter(ch) {
                break;
            }
            self.next_char();
        }

        let text = &self.input[start..self.position];
        match text {
            "" => Err(Error::syntax(line, column, "expected value")),
            "null" => Ok(Token::Null),
            "true" | "false" => Ok(Token::Literal(text.to_string())),
            "NaN" | "Infinity" | "-Infinity" if self.options.allow_special_floats => {
                Ok(Token::Literal(text.to_string()))
            }
            _ if is_json_number(text) => Ok(Token::Literal(text.to_string())),
            _ => Err(Error::syntax(
                line,
                column,
                &format!("invalid literal `{}`", text),
            )),
        }
    }

    /// Drives `visitor` with the next value. With `raw` set, unquoted literals are
    /// handed over as text instead of being converted to numbers or booleans.
    fn deserialize_value<V>(&mut self, visitor: V, raw: bool) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(self.eof_error("value")),
            Some('[') => {
                self.enter()?;
                self.next_char();
                let value = visitor.visit_seq(SeqAccess::new(self))?;
                self.expect_char(']', "',' or ']'")?;
                self.leave();
                Ok(value)
            }
            Some('{') => {
                self.enter()?;
                self.next_char();
                let value = visitor.visit_map(MapAccess::new(self))?;
                self.expect_char('}', "',' or '}'")?;
                self.leave();
                Ok(value)
            }
            Some('"') => visitor.visit_string(self.parse_string()?),
            Some(_) => match self.parse_token()? {
                Token::Null => visitor.visit_unit(),
                Token::Literal(text) if raw => visitor.visit_map(RawLiteralAccess::new(text)),
                Token::Literal(text) => visit_unquoted(&text, visitor),
            },
        }
    }

    /// Hands a bare token to `visit`; anything else takes the regular path.
    fn deserialize_bare<V>(
        &mut self,
        visitor: V,
        visit: fn(&str, V) -> Result<V::Value>,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.skip_whitespace();
        match self.peek_char() {
            Some('"' | '[' | '{') | None => self.deserialize_value(visitor, false),
            Some(_) => match self.parse_token()? {
                Token::Null => visitor.visit_unit(),
                Token::Literal(text) => visit(&text, visitor),
            },
        }
    }

    /// Reads a single scalar for literal and primitive targets.
    ///
    /// Structural tokens are reported as a mismatch at their position.
    fn deserialize_scalar<V>(&mut self, visitor: V, allow_null: bool) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let expected = if allow_null { "primitive" } else { "literal" };
        self.skip_whitespace();
        let (line, column) = (self.line, self.column);
        match self.peek_char() {
            None => Err(self.eof_error(expected)),
            Some('{') => Err(Error::structural_mismatch_at(line, column, expected, "object")),
            Some('[') => Err(Error::structural_mismatch_at(line, column, expected, "array")),
            Some('"') => visitor.visit_string(self.parse_string()?),
            Some(_) => match self.parse_token()? {
                Token::Null if allow_null => visitor.visit_unit(),
                Token::Null => Err(Error::structural_mismatch_at(line, column, expected, "null")),
                Token::Literal(text) => visitor.visit_map(RawLiteralAccess::new(text)),
            },
        }
    }
}

fn is_delimiter(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\n' | '\r' | ',' | ':' | '[' | ']' | '{' | '}' | '"'
    )
}

/// Visits an unquoted literal with the most natural Rust scalar for its text.
fn visit_unquoted<'de, V>(text: &str, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    match text {
        "true" => visitor.visit_bool(true),
        "false" => visitor.visit_bool(false),
        _ => {
            if !text.contains(['.', 'e', 'E']) {
                if let Ok(n) = text.parse::<i64>() {
                    return visitor.visit_i64(n);
                }
                if let Ok(n) = text.parse::<u64>() {
                    return visitor.visit_u64(n);
                }
            }
            match text.parse::<f64>() {
                Ok(n) => visitor.visit_f64(n),
                Err(_) => Err(Error::coercion("number", text)),
            }
        }
    }
}

/// Reads `text` directly at `f32` width so the value is rounded once.
fn visit_unquoted_f32<'de, V>(text: &str, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    match text.parse::<f32>() {
        Ok(n) => visitor.visit_f32(n),
        Err(_) => visit_unquoted(text, visitor),
    }
}

/// Integers wider than 64 bits reach 128-bit targets exactly.
fn visit_unquoted_i128<'de, V>(text: &str, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    match text.parse::<i128>() {
        Ok(n) => visitor.visit_i128(n),
        Err(_) => visit_unquoted(text, visitor),
    }
}

fn visit_unquoted_u128<'de, V>(text: &str, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    match text.parse::<u128>() {
        Ok(n) => visitor.visit_u128(n),
        Err(_) => visit_unquoted(text, visitor),
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_value(visitor, false)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.skip_whitespace();
        if self.input[self.position..].starts_with("null") {
            match self.parse_token()? {
                Token::Null => visitor.visit_none(),
                Token::Literal(text) => {
                    Err(self.syntax_error(&format!("invalid literal `{}`", text)))
                }
            }
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match name {
            LITERAL_TOKEN => self.deserialize_scalar(visitor, false),
            PRIMITIVE_TOKEN => self.deserialize_scalar(visitor, true),
            ELEMENT_TOKEN => self.deserialize_value(visitor, true),
            _ => visitor.visit_newtype_struct(self),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.skip_whitespace();
        match self.peek_char() {
            Some('"') => {
                let variant = self.parse_string()?;
                visitor.visit_enum(variant.into_deserializer())
            }
            Some('{') => {
                self.enter()?;
                self.next_char();
                self.skip_whitespace();
                if self.peek_char() != Some('"') {
                    return Err(self.syntax_error("expected enum variant name"));
                }
                let variant = self.parse_string()?;
                self.expect_char(':', "':'")?;
                let value = visitor.visit_enum(TextEnumAccess { de: self, variant })?;
                self.expect_char('}', "'}' after enum variant")?;
                self.leave();
                Ok(value)
            }
            Some(_) => Err(self.syntax_error("expected string or object for enum")),
            None => Err(self.eof_error("enum")),
        }
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bare(visitor, visit_unquoted_f32)
    }

    fn deserialize_i128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bare(visitor, visit_unquoted_i128)
    }

    fn deserialize_u128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bare(visitor, visit_unquoted_u128)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct SeqAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    first: bool,
}

impl<'a, 'de> SeqAccess<'a, 'de> {
    fn new(de: &'a mut Deserializer<'de>) -> Self {
        SeqAccess { de, first: true }
    }
}

impl<'de, 'a> de::SeqAccess<'de> for SeqAccess<'a, 'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        self.de.skip_whitespace();
        if self.de.peek_char() == Some(']') {
            return Ok(None);
        }
        if !self.first {
            self.de.expect_char(',', "',' or ']'")?;
        }
        self.first = false;
        seed.deserialize(&mut *self.de).map(Some)
    }
}

struct MapAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    first: bool,
}

impl<'a, 'de> MapAccess<'a, 'de> {
    fn new(de: &'a mut Deserializer<'de>) -> Self {
        MapAccess { de, first: true }
    }
}

impl<'de, 'a> de::MapAccess<'de> for MapAccess<'a, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        self.de.skip_whitespace();
        if self.de.peek_char() == Some('}') {
            return Ok(None);
        }
        if !self.first {
            self.de.expect_char(',', "',' or '}'")?;
            self.de.skip_whitespace();
        }
        self.first = false;

        let key = match self.de.peek_char() {
            Some('"') => self.de.parse_string()?,
            Some(_) => return Err(self.de.syntax_error("expected string key")),
            None => return Err(self.de.eof_error("object key")),
        };
        self.de.expect_char(':', "':' after object key")?;
        seed.deserialize(MapKeyDeserializer { key }).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        seed.deserialize(&mut *self.de)
    }
}

struct TextEnumAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    variant: String,
}

impl<'de, 'a> de::EnumAccess<'de> for TextEnumAccess<'a, 'de> {
    type Error = Error;
    type Variant = TextVariantAccess<'a, 'de>;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(MapKeyDeserializer { key: self.variant })?;
        Ok((variant, TextVariantAccess { de: self.de }))
    }
}

struct TextVariantAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
}

impl<'de, 'a> de::VariantAccess<'de> for TextVariantAccess<'a, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        de::Deserialize::deserialize(self.de)
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.de)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.de, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.de, visitor)
    }
}

/// Hands an unquoted token to a literal visitor as `{LITERAL_TOKEN: text}`.
struct RawLiteralAccess {
    key_emitted: bool,
    text: Option<String>,
}

impl RawLiteralAccess {
    fn new(text: String) -> Self {
        RawLiteralAccess {
            key_emitted: false,
            text: Some(text),
        }
    }
}

impl<'de> de::MapAccess<'de> for RawLiteralAccess {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        if self.key_emitted {
            return Ok(None);
        }
        self.key_emitted = true;
        seed.deserialize(de::value::BorrowedStrDeserializer::<Error>::new(LITERAL_TOKEN))
            .map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.text.take() {
            Some(text) => {
                let text: de::value::StringDeserializer<Error> = text.into_deserializer();
                seed.deserialize(text)
            }
            None => Err(Error::custom("literal text requested twice")),
        }
    }
}

/// Object member names. Numeric and boolean targets parse the name, so maps
/// keyed by integers round-trip.
struct MapKeyDeserializer {
    key: String,
}

macro_rules! deserialize_parsed_key {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                match self.key.parse::<$ty>() {
                    Ok(value) => visitor.$visit(value),
                    Err(_) => visitor.visit_string(self.key),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for MapKeyDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key)
    }

    deserialize_parsed_key! {
        deserialize_bool => visit_bool: bool,
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.key.into_deserializer())
    }

    forward_to_deserialize_any! {
        char str string bytes byte_buf unit unit_struct seq tuple tuple_struct
        map struct identifier ignored_any
    }
}

/// Deserializes Rust values out of a [`JsonElement`] tree.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_json_element::{json_element, ElementDeserializer};
///
/// let element = json_element!([1, 2, 3]);
/// let numbers = Vec::<u8>::deserialize(ElementDeserializer::new(element)).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub struct ElementDeserializer {
    element: JsonElement,
}

impl ElementDeserializer {
    pub fn new(element: JsonElement) -> Self {
        ElementDeserializer { element }
    }

    fn deserialize_bare<'de, V>(
        self,
        visitor: V,
        visit: fn(&str, V) -> Result<V::Value>,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.element {
            JsonElement::Literal(literal) if !literal.is_string() => {
                visit(literal.content(), visitor)
            }
            other => visit_element(other, visitor, false),
        }
    }
}

fn visit_element<'de, V>(element: JsonElement, visitor: V, raw: bool) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    match element {
        JsonElement::Null => visitor.visit_unit(),
        JsonElement::Literal(literal) if literal.is_string() => {
            visitor.visit_string(literal.into_content())
        }
        JsonElement::Literal(literal) if raw => {
            visitor.visit_map(RawLiteralAccess::new(literal.into_content()))
        }
        JsonElement::Literal(literal) => visit_unquoted(literal.content(), visitor),
        JsonElement::Array(elements) => {
            let len = elements.len();
            let mut seq = SeqDeserializer::new(elements);
            let value = visitor.visit_seq(&mut seq)?;
            if seq.iter.len() == 0 {
                Ok(value)
            } else {
                Err(de::Error::invalid_length(len, &"fewer elements in array"))
            }
        }
        JsonElement::Object(map) => visitor.visit_map(MapDeserializer::new(map)),
    }
}

impl<'de> de::Deserializer<'de> for ElementDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visit_element(self.element, visitor, false)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.element {
            JsonElement::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match name {
            LITERAL_TOKEN | PRIMITIVE_TOKEN => {
                let allow_null = name == PRIMITIVE_TOKEN;
                match self.element {
                    JsonElement::Null if allow_null => visitor.visit_unit(),
                    literal @ JsonElement::Literal(_) => visit_element(literal, visitor, true),
                    other => Err(Error::structural_mismatch(
                        if allow_null { "primitive" } else { "literal" },
                        other.kind(),
                    )),
                }
            }
            ELEMENT_TOKEN => visit_element(self.element, visitor, true),
            _ => visitor.visit_newtype_struct(self),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.element {
            JsonElement::Literal(literal) if literal.is_string() => {
                visitor.visit_enum(literal.into_content().into_deserializer())
            }
            JsonElement::Object(map) if map.len() == 1 => match map.into_iter().next() {
                Some((variant, value)) => visitor.visit_enum(EnumDeserializer::new(variant, value)),
                None => Err(Error::structural_mismatch("enum", "object")),
            },
            other => Err(Error::structural_mismatch("enum", other.kind())),
        }
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bare(visitor, visit_unquoted_f32)
    }

    fn deserialize_i128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bare(visitor, visit_unquoted_i128)
    }

    fn deserialize_u128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bare(visitor, visit_unquoted_u128)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<JsonElement>,
}

impl SeqDeserializer {
    fn new(vec: Vec<JsonElement>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(element) => seed.deserialize(ElementDeserializer::new(element)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, JsonElement>,
    value: Option<JsonElement>,
}

impl MapDeserializer {
    fn new(map: JsonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(MapKeyDeserializer { key }).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ElementDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: JsonElement,
}

impl EnumDeserializer {
    fn new(variant: String, value: JsonElement) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(MapKeyDeserializer { key: self.variant })?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: JsonElement,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            JsonElement::Null => Ok(()),
            other => Err(Error::structural_mismatch("null", other.kind())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ElementDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            array @ JsonElement::Array(_) => visit_element(array, visitor, false),
            other => Err(Error::structural_mismatch("array", other.kind())),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            JsonElement::Object(map) => visitor.visit_map(MapDeserializer::new(map)),
            other => Err(Error::structural_mismatch("object", other.kind())),
        }
    }
}
