//! Exact literal round-trips and primitive views.
//!
//! Run with: cargo run --example literals

use serde::{Deserialize, Serialize};
use serde_json_element::{from_str, to_string, JsonLiteral, JsonPrimitive, PrimitiveView};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Setting {
    name: String,
    value: JsonLiteral,
    fallback: JsonPrimitive,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Literal text follows the scalar's own type
    println!("Canonical literals:");
    for literal in [
        JsonLiteral::from(0i64),
        JsonLiteral::from(1.0f64),
        JsonLiteral::from(f32::MAX),
        JsonLiteral::from(f64::from_bits(1)),
        JsonLiteral::from("239"),
    ] {
        println!("  {:<28} is_string={}", literal.to_string(), literal.is_string());
    }
    println!();

    // Decoded token text is kept verbatim
    let json = r#"{"name":"ratio","value":1.50,"fallback":null}"#;
    let setting: Setting = from_str(json)?;
    println!("Decoded: {:?}", setting);
    println!("Re-encoded: {}\n", to_string(&setting)?);

    // Views read the same content as different types
    let quoted: JsonLiteral = from_str("\"239\"")?;
    println!("\"239\" as i32: {}", quoted.as_i32()?);
    println!("\"239\" as f64: {}", quoted.as_f64()?);
    println!("1.50 as f32: {}", setting.value.as_f32()?);

    // Null-tolerant accessors return None instead of failing
    println!("fallback as i32 (or null): {:?}", setting.fallback.as_i32_or_null());
    if let Err(err) = setting.fallback.as_i32() {
        println!("fallback as i32: {}", err);
    }

    // Structures are rejected where a literal is expected
    if let Err(err) = from_str::<JsonLiteral>("\n  [1, 2]") {
        println!("Decoding [1, 2] as a literal: {}", err);
    }

    Ok(())
}
