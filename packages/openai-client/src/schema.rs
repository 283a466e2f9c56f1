//! JSON-schema generation from Rust types, in OpenAI's dialect.
//!
//! Uses `schemars` to derive a schema from a type, then reshapes it for
//! OpenAI's strict function-calling validation, which requires:
//!
//! 1. `additionalProperties: false` on every object schema
//! 2. every property listed in `required`, nullable ones included
//! 3. fully inlined schemas (`$ref` is not followed reliably)

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Types that can serve as a structured model output.
///
/// Automatically implemented for anything that is `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate an OpenAI-compatible JSON schema for this type.
    fn openai_schema() -> serde_json::Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();

        enforce_strict_objects(&mut value);

        if let Some(definitions) = value.get("definitions").cloned() {
            inline_definitions(&mut value, &definitions);
        }
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// The schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Walk the schema and make every object strict: `additionalProperties: false`
/// and all properties required.
fn enforce_strict_objects(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if map.get("type") == Some(&serde_json::Value::String("object".into())) {
                map.insert("additionalProperties".into(), serde_json::Value::Bool(false));

                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let all_keys: Vec<serde_json::Value> = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".into(), serde_json::Value::Array(all_keys));
                }
            }

            for (_, v) in map.iter_mut() {
                enforce_strict_objects(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                enforce_strict_objects(item);
            }
        }
        _ => {}
    }
}

/// Replace `$ref` nodes with the referenced definition, recursively.
fn inline_definitions(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(name) {
                        *value = def.clone();
                        inline_definitions(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_definitions(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_definitions(item, definitions);
            }
        }
        _ => {}
    }
}
