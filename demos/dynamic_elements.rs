//! Building and inspecting element trees without a schema.
//!
//! Run with: cargo run --example dynamic_elements

use serde::Serialize;
use serde_json_element::{
    from_str, json_element, to_element, to_string_pretty, JsonElement, JsonMap,
};
use std::error::Error;

#[derive(Serialize)]
struct Sample {
    id: u32,
    weight: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse arbitrary JSON into an element tree
    let element: JsonElement = from_str(r#"{"id": 7, "values": [1.0, 2.50, -3E2], "note": null}"#)?;
    println!("Parsed: {}", element);

    if let Some(values) = element.get("values").and_then(JsonElement::as_array) {
        for value in values {
            let view = value.primitive()?;
            println!("  {} -> {}", value, view.as_f64()?);
        }
    }
    println!();

    // Build one with the macro
    let built = json_element!({
        "name": "widget",
        "sizes": [1, 2.0, "large"],
        "discontinued": false
    });
    println!("Built:\n{}\n", to_string_pretty(&built)?);

    // Or by hand
    let mut map = JsonMap::new();
    map.insert("kind".to_string(), JsonElement::from("manual"));
    map.insert("count".to_string(), JsonElement::from(3u8));
    println!("Manual: {}", JsonElement::Object(map));

    // Any Serialize type converts to an element
    let sample = to_element(&Sample { id: 1, weight: 0.1 })?;
    println!("From struct: {}", sample);

    // Containers have no primitive view
    if let Err(err) = built.primitive() {
        println!("Primitive view of an object: {}", err);
    }

    Ok(())
}
