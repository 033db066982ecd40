//! Configuration options for JSON encoding and decoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_json_element::{to_string_with_options, JsonOptions};
//!
//! let options = JsonOptions::pretty().with_indent(4);
//! let json = to_string_with_options(&vec![1, 2], options).unwrap();
//! assert_eq!(json, "[\n    1,\n    2\n]");
//! ```

/// Configuration options for JSON encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::JsonOptions;
///
/// // Default compact options
/// let options = JsonOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
/// assert_eq!(options.indent, 2);
///
/// // Accept and emit NaN / Infinity as bare tokens
/// let options = JsonOptions::new().with_special_floats(true);
/// assert!(options.allow_special_floats);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct JsonOptions {
    pub indent: usize,
    pub pretty: bool,
    pub allow_special_floats: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 2,
            pretty: false,
            allow_special_floats: false,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output, strict floats, 2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Allows `NaN`, `Infinity` and `-Infinity` as bare tokens.
    ///
    /// When disabled, serializing a non-finite float fails and decoding such a
    /// token is a syntax error.
    #[must_use]
    pub fn with_special_floats(mut self, allow: bool) -> Self {
        self.allow_special_floats = allow;
        self
    }
}
