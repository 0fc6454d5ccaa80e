use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::Value;

fn json_to_database(type_name: &str, value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Json(v) => serde_json::to_string(v)
            .map(Value::String)
            .map_err(|err| Error::invalid_format_caused(v, type_name, "JSON", err)),
        // already-encoded text passes through
        Value::String(s) => Ok(Value::String(s.clone())),
        other => Err(Error::invalid_type(other, type_name, &["null", "Json"])),
    }
}

fn json_from_database(type_name: &str, s: &str) -> Result<Value> {
    serde_json::from_str(s)
        .map(Value::Json)
        .map_err(|err| Error::invalid_format_caused(s, type_name, "JSON", err))
}

/// Maps a JSON column to a host [`serde_json::Value`].
///
/// Stored as character data when the platform has no native JSON type.
#[derive(Debug, Default)]
pub struct JsonType;

impl Type for JsonType {
    fn name(&self) -> &str {
        names::JSON
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.json_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        json_to_database(self.name(), value)
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Json(v) => Ok(Value::Json(v.clone())),
            Value::String(s) if s.is_empty() => Ok(Value::Null),
            Value::String(s) => json_from_database(self.name(), s),
            other => Err(Error::invalid_format(other, self.name(), "JSON")),
        }
    }

    fn requires_sql_comment_hint(&self, platform: &dyn Platform) -> bool {
        !platform.has_native_json_type()
    }
}

/// Legacy JSON-array mapping kept for schemas that predate the plain
/// `json` type: an empty stored string decodes to an empty array, and the
/// comment hint is unconditional.
#[derive(Debug, Default)]
pub struct JsonArrayType;

impl Type for JsonArrayType {
    fn name(&self) -> &str {
        names::JSON_ARRAY
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.json_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        json_to_database(self.name(), value)
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Json(v) => Ok(Value::Json(v.clone())),
            Value::String(s) if s.is_empty() => Ok(Value::Json(serde_json::Value::Array(Vec::new()))),
            Value::String(s) => json_from_database(self.name(), s),
            other => Err(Error::invalid_format(other, self.name(), "JSON")),
        }
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}
