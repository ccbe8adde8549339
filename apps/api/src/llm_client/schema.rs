//! Builders for Gemini response schemas (OpenAPI subset, upper-case type names).

use serde_json::{json, Map, Value};

pub fn string() -> Value {
    json!({ "type": "STRING" })
}

pub fn number() -> Value {
    json!({ "type": "NUMBER" })
}

pub fn string_array() -> Value {
    array_of(string())
}

pub fn array_of(items: Value) -> Value {
    json!({ "type": "ARRAY", "items": items })
}

/// An object whose inner shape is left to the model.
pub fn loose_object() -> Value {
    json!({ "type": "OBJECT" })
}

/// An object with the given properties, of which `required` must be present.
pub fn object(properties: &[(&str, Value)], required: &[&str]) -> Value {
    let properties: Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();
    let mut schema = json!({ "type": "OBJECT", "properties": properties });
    if !required.is_empty() {
        schema["required"] = json!(required);
    }
    schema
}
