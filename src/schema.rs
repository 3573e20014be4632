use std::fmt;

use schemars::JsonSchema;
use serde_json::Value;

use crate::widget::WidgetConfig;

/// Ordered mapping of schema keys to JSON values. Key order is the caller's
/// and survives into the serialized payload.
pub type Schema = serde_json::Map<String, Value>;

/// Computes a schema per render, with the widget configuration as context.
pub type SchemaProducer = Box<dyn Fn(&WidgetConfig) -> Schema + Send + Sync>;

pub enum SchemaSource {
    Literal(Schema),
    Producer(SchemaProducer),
}

impl SchemaSource {
    pub fn producer(producer: impl Fn(&WidgetConfig) -> Schema + Send + Sync + 'static) -> Self {
        Self::Producer(Box::new(producer))
    }

    /// Produces the schema for one render. Literal sources hand out a clone,
    /// so the caller's original mapping is never touched by normalization.
    pub fn resolve(&self, config: &WidgetConfig) -> Schema {
        match self {
            Self::Literal(schema) => schema.clone(),
            Self::Producer(producer) => producer(config),
        }
    }
}

impl From<Schema> for SchemaSource {
    fn from(schema: Schema) -> Self {
        Self::Literal(schema)
    }
}

impl fmt::Debug for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(schema) => f.debug_tuple("Literal").field(schema).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    message: String,
}

impl SchemaError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for SchemaError {}

pub fn schema_from_value(value: Value) -> Result<Schema, SchemaError> {
    match value {
        Value::Object(schema) => Ok(schema),
        other => Err(SchemaError::new(format!(
            "schema root must be a mapping, got {}",
            kind_of(&other)
        ))),
    }
}

pub fn schema_from_json(input: &str) -> Result<Schema, SchemaError> {
    let value: Value = serde_json::from_str(input)
        .map_err(|err| SchemaError::new(format!("invalid schema JSON: {err}")))?;
    schema_from_value(value)
}

pub fn schema_from_yaml(input: &str) -> Result<Schema, SchemaError> {
    let value: Value = serde_yaml::from_str(input)
        .map_err(|err| SchemaError::new(format!("invalid schema YAML: {err}")))?;
    schema_from_value(value)
}

/// Derives a schema from a Rust type, so an editor can be driven by the same
/// type the application deserializes the field into.
pub fn schema_for<T: JsonSchema>() -> Result<Schema, SchemaError> {
    let root = schemars::schema_for!(T);
    let value = serde_json::to_value(root)
        .map_err(|err| SchemaError::new(format!("could not serialize derived schema: {err}")))?;
    schema_from_value(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
