//! Data formats backed by serde
//!
//! Objects serialize as `{"type": <kind>, "value": <payload>}`, with list
//! payloads holding nested objects and the error sentinel carrying no value.

use super::registry::{FormatError, Formatter};
use crate::lison::ast::Object;

/// Pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, object: &Object) -> Result<String, FormatError> {
        serde_json::to_string_pretty(object)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Object tree as pretty JSON"
    }
}

/// YAML document
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, object: &Object) -> Result<String, FormatError> {
        serde_yaml::to_string(object).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Object tree as YAML"
    }
}
