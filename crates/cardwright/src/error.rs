//! Error types for configuration resolution and input validation.

use serde_json::Value;

/// Error returned when a host configuration document cannot be resolved.
///
/// Configuration errors are fatal to the resolve step: no partial
/// configuration is produced, and rendering must not begin.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A base scale that every renderer dereferences is absent or `null`.
    #[error("host config is missing required block '{key}'")]
    MissingRequired { key: &'static str },

    /// The document root is not a key/value mapping.
    #[error("host config document must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// The JSON text is malformed or a field has the wrong shape.
    #[error("invalid host config: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML text is malformed or a field has the wrong shape.
    #[error("invalid host config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A required input had no value when a submit action fired.
///
/// Carries the input identifier and the host control that rendered it so the
/// host can focus or highlight the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingInputError<N> {
    /// Logical identifier of the input.
    pub input_id: String,
    /// The live control created for the input.
    pub control: N,
}

impl<N> MissingInputError<N> {
    pub fn new(input_id: impl Into<String>, control: N) -> Self {
        Self {
            input_id: input_id.into(),
            control,
        }
    }
}

impl<N> std::fmt::Display for MissingInputError<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "required input '{}' has no value", self.input_id)
    }
}

impl<N: std::fmt::Debug> std::error::Error for MissingInputError<N> {}

/// JSON type name of a value, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_display() {
        let err = ConfigError::MissingRequired { key: "fontSizes" };
        assert!(err.to_string().contains("fontSizes"));
    }

    #[test]
    fn test_not_an_object_display() {
        let err = ConfigError::NotAnObject { found: "array" };
        assert_eq!(
            err.to_string(),
            "host config document must be an object, found array"
        );
    }

    #[test]
    fn test_missing_input_display() {
        let err = MissingInputError::new("email", 7u32);
        assert_eq!(err.to_string(), "required input 'email' has no value");
        assert_eq!(err.control, 7);
    }

    #[test]
    fn test_value_kind_names() {
        let kinds: Vec<&str> = [
            Value::Null,
            Value::from(true),
            Value::from(1),
            Value::from("x"),
            Value::Array(Vec::new()),
            Value::Object(serde_json::Map::new()),
        ]
        .iter()
        .map(value_kind)
        .collect();
        assert_eq!(
            kinds,
            vec!["null", "boolean", "number", "string", "array", "object"]
        );
    }
}
