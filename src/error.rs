//! Error types for JSON element serialization and deserialization.
//!
//! Every failure in this crate is reported as an [`Error`] carrying enough context
//! (offending text, expected vs. actual kind, position) to build a diagnostic.
//! Nothing is ever swallowed into a default value.
//!
//! ## Error Categories
//!
//! - **Structural mismatch**: an element of the wrong kind was found, e.g. an object
//!   where a scalar literal was expected
//! - **Coercion failure**: a [`PrimitiveView`](crate::PrimitiveView) accessor could not
//!   read the literal content as the requested type
//! - **Malformed token**: syntax errors, unexpected end of input, trailing characters
//! - **I/O Errors**: reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_json_element::{from_str, Error, JsonLiteral};
//!
//! let result: Result<JsonLiteral, Error> = from_str("{\"a\": 1}");
//! assert!(matches!(result, Err(Error::StructuralMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during JSON element
/// serialization, deserialization and primitive coercion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed token at the given position
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// The decoder found an element of the wrong kind
    #[error("Structural mismatch{location}: expected {expected}, found {found}")]
    StructuralMismatch {
        expected: String,
        found: String,
        location: String,
    },

    /// A primitive accessor could not parse the literal content
    #[error("Cannot read {content:?} as {expected}")]
    Coercion { expected: String, content: String },

    /// Unexpected end of input
    #[error("Unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Non-whitespace content after a complete top-level value
    #[error("Trailing characters at line {line}, column {col}")]
    TrailingCharacters { line: usize, col: usize },

    /// Nesting deeper than the decoder allows
    #[error("Recursion limit exceeded at line {line}, column {col}")]
    RecursionLimitExceeded { line: usize, col: usize },

    /// NaN or an infinity was serialized while special floats are disabled
    #[error("Non-finite float {0} is not valid JSON; enable special floats to emit it")]
    NonFiniteFloat(String),

    /// Map key that cannot be written as a JSON string
    #[error("Invalid map key: {0}")]
    InvalidKey(String),

    /// Custom error raised through serde
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json_element::Error;
    ///
    /// let err = Error::syntax(10, 5, "invalid escape");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a structural mismatch error without position information.
    ///
    /// Used when decoding from an in-memory [`JsonElement`](crate::JsonElement)
    /// tree, where there is no source text to point at.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json_element::Error;
    ///
    /// let err = Error::structural_mismatch("literal", "object");
    /// assert_eq!(err.to_string(), "Structural mismatch: expected literal, found object");
    /// ```
    pub fn structural_mismatch(expected: &str, found: &str) -> Self {
        Error::StructuralMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
            location: String::new(),
        }
    }

    /// Creates a structural mismatch error pointing at a position in the source text.
    pub fn structural_mismatch_at(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::StructuralMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
            location: format!(" at line {}, column {}", line, col),
        }
    }

    /// Creates a coercion error for a primitive accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json_element::Error;
    ///
    /// let err = Error::coercion("i32", "foo");
    /// assert!(err.to_string().contains("\"foo\""));
    /// ```
    pub fn coercion(expected: &str, content: &str) -> Self {
        Error::Coercion {
            expected: expected.to_string(),
            content: content.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates a trailing characters error.
    pub fn trailing_characters(line: usize, col: usize) -> Self {
        Error::TrailingCharacters { line, col }
    }

    pub fn recursion_limit(line: usize, col: usize) -> Self {
        Error::RecursionLimitExceeded { line, col }
    }

    pub fn non_finite_float(text: &str) -> Self {
        Error::NonFiniteFloat(text.to_string())
    }

    pub fn invalid_key(msg: &str) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors caused by malformed input text.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. }
                | Error::UnexpectedEof { .. }
                | Error::TrailingCharacters { .. }
                | Error::RecursionLimitExceeded { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
