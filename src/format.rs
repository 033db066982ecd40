//! Canonical scalar formatting.
//!
//! Every scalar that becomes a [`JsonLiteral`](crate::JsonLiteral) is rendered
//! through exactly one [`CanonicalFormat`] implementation for its type. The same
//! text is used by `Display` and by the serializers, so printing a literal and
//! serializing it can never disagree.
//!
//! ## Float layout
//!
//! By default floats use the JVM layout:
//!
//! | Value | Text |
//! |-------|------|
//! | `0.0f64` | `0.0` |
//! | `1.0f64` | `1.0` |
//! | `1e7f64` | `1.0E7` |
//! | `0.001f64` | `0.001` |
//! | `f32::MAX` | `3.4028235E38` |
//! | `f64::MAX` | `1.7976931348623157E308` |
//! | smallest subnormal `f64` | `4.9E-324` |
//!
//! Digits are the shortest decimal that round-trips for the value's own width.
//! Magnitudes in `[1e-3, 1e7)` are written as plain decimals, everything else in
//! scientific notation. The `native-float-format` feature replaces this layout
//! with Rust's shortest representation (`1e7` stays `10000000.0`, the smallest
//! subnormal becomes `5e-324`).
//!
//! ```rust
//! use serde_json_element::CanonicalFormat;
//!
//! assert_eq!(42i64.to_canonical(), "42");
//! assert_eq!(true.to_canonical(), "true");
//! # #[cfg(not(feature = "native-float-format"))]
//! assert_eq!(0.0f32.to_canonical(), "0.0");
//! ```

/// Canonical, locale-independent text for a scalar of one concrete type.
pub trait CanonicalFormat {
    /// Appends the canonical text to `out`.
    fn write_canonical(&self, out: &mut String);

    /// Returns the canonical text.
    fn to_canonical(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }
}

impl CanonicalFormat for bool {
    fn write_canonical(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! impl_canonical_integer {
    ($($ty:ty),*) => {
        $(
            impl CanonicalFormat for $ty {
                #[inline]
                fn write_canonical(&self, out: &mut String) {
                    let mut buffer = itoa::Buffer::new();
                    out.push_str(buffer.format(*self));
                }
            }
        )*
    };
}

impl_canonical_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CanonicalFormat for f32 {
    fn write_canonical(&self, out: &mut String) {
        write_float(*self, out);
    }
}

impl CanonicalFormat for f64 {
    fn write_canonical(&self, out: &mut String) {
        write_float(*self, out);
    }
}

trait FloatRepr: ryu::Float + Copy + std::fmt::LowerExp {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
    fn is_sign_negative(self) -> bool;
}

macro_rules! impl_float_repr {
    ($($ty:ty),*) => {
        $(
            impl FloatRepr for $ty {
                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }

                fn is_infinite(self) -> bool {
                    <$ty>::is_infinite(self)
                }

                fn is_zero(self) -> bool {
                    self == 0.0
                }

                fn is_sign_negative(self) -> bool {
                    <$ty>::is_sign_negative(self)
                }
            }
        )*
    };
}

impl_float_repr!(f32, f64);

fn write_float<F: FloatRepr>(value: F, out: &mut String) {
    if value.is_nan() {
        out.push_str("NaN");
    } else if value.is_infinite() {
        out.push_str(if value.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        });
    } else {
        write_finite(value, out);
    }
}

#[cfg(feature = "native-float-format")]
fn write_finite<F: FloatRepr>(value: F, out: &mut String) {
    let mut buffer = ryu::Buffer::new();
    out.push_str(buffer.format_finite(value));
}

#[cfg(not(feature = "native-float-format"))]
fn write_finite<F: FloatRepr>(value: F, out: &mut String) {
    if value.is_zero() {
        out.push_str(if value.is_sign_negative() { "-0.0" } else { "0.0" });
        return;
    }

    let mut buffer = ryu::Buffer::new();
    let mut decimal = Decimal::parse(buffer.format_finite(value));
    // A lone significant digit is widened to the closest two-digit decimal.
    if decimal.digits.len() == 1 {
        decimal = Decimal::parse(&format!("{:.1e}", value));
    }
    decimal.write_jvm(value.is_sign_negative(), out);
}

/// Significant digits `d1 d2 ...` of a non-zero value `d1.d2... * 10^exponent`.
#[cfg(not(feature = "native-float-format"))]
struct Decimal {
    digits: String,
    exponent: i32,
}

#[cfg(not(feature = "native-float-format"))]
impl Decimal {
    /// Parses plain (`123.45`) or scientific (`1.2345e2`) float text.
    fn parse(text: &str) -> Self {
        let text = text.trim_start_matches('-');
        let (mantissa, exponent) = match text.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
            None => (text, 0),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all: String = int_part.chars().chain(frac_part.chars()).collect();
        let leading_zeros = all.bytes().take_while(|b| *b == b'0').count();
        let digits = all[leading_zeros..].trim_end_matches('0').to_string();

        Decimal {
            digits,
            exponent: exponent + int_part.len() as i32 - 1 - leading_zeros as i32,
        }
    }

    fn write_jvm(&self, negative: bool, out: &mut String) {
        if negative {
            out.push('-');
        }

        let digits = self.digits.as_str();
        if (-3..7).contains(&self.exponent) {
            if self.exponent >= 0 {
                let int_len = self.exponent as usize + 1;
                if digits.len() > int_len {
                    out.push_str(&digits[..int_len]);
                    out.push('.');
                    out.push_str(&digits[int_len..]);
                } else {
                    out.push_str(digits);
                    push_zeros(out, int_len - digits.len());
                    out.push_str(".0");
                }
            } else {
                out.push_str("0.");
                push_zeros(out, (-self.exponent - 1) as usize);
                out.push_str(digits);
            }
        } else {
            out.push_str(&digits[..1]);
            out.push('.');
            if digits.len() > 1 {
                out.push_str(&digits[1..]);
            } else {
                out.push('0');
            }
            out.push('E');
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(self.exponent));
        }
    }
}

#[cfg(not(feature = "native-float-format"))]
fn push_zeros(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('0').take(count));
}

/// Appends `s` as a quoted JSON string, escaping quotes, backslashes and control characters.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
