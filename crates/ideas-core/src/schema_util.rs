//! Helpers for turning Rust type information into JSON Schema that can be
//! shipped alongside a prompt. The JSON is produced with [`schemars`] and
//! forwarded to providers that support structured responses (OpenAI’s
//! *response_format = json_schema*).

use schemars::{
    r#gen::{SchemaGenerator, SchemaSettings},
    JsonSchema,
};
use serde_json::{json, Value};

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// # Example
///
/// ```
/// use ideas_core::schema_util::derive_response_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_response_schema::<Foo>().unwrap();
/// assert_eq!(schema["type"], "object");
/// ```
pub fn derive_response_schema<T>() -> serde_json::Result<Value>
where
    T: JsonSchema + 'static,
{
    // Providers do not reliably resolve `$ref`s.
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root)
}

/// Wrap the schema of `T` in the `response_format` object accepted by
/// OpenAI-compatible chat endpoints.
pub fn json_schema_response_format<T>(name: &str) -> serde_json::Result<Value>
where
    T: JsonSchema + 'static,
{
    let schema = derive_response_schema::<T>()?;

    Ok(json!({
        "type": "json_schema",
        "json_schema": {
            "name": name,
            "schema": schema,
            "strict": true,
        }
    }))
}
