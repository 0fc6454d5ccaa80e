use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::Value;

fn structured_to_database(type_name: &str, value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Json(v) => serde_json::to_string(v)
            .map(Value::String)
            .map_err(|err| Error::invalid_format_caused(v, type_name, "JSON", err)),
        other => Err(Error::invalid_type(other, type_name, &["null", "Json"])),
    }
}

fn structured_to_host(type_name: &str, value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Json(v) => Ok(Value::Json(v.clone())),
        Value::String(s) => serde_json::from_str(s)
            .map(Value::Json)
            .map_err(|err| Error::invalid_format_caused(s, type_name, "JSON", err)),
        other => Err(Error::invalid_format(other, type_name, "JSON")),
    }
}

/// Maps arbitrary structured data to a character column holding its JSON
/// serialization.
///
/// The stored text is opaque to the database; an undecodable column value
/// is a data-integrity failure, not a fallback case.
#[derive(Debug, Default)]
pub struct ArrayType;

impl Type for ArrayType {
    fn name(&self) -> &str {
        names::ARRAY
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.clob_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        structured_to_database(self.name(), value)
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        structured_to_host(self.name(), value)
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}

/// Like [`ArrayType`] but for single structured objects.
#[derive(Debug, Default)]
pub struct ObjectType;

impl Type for ObjectType {
    fn name(&self) -> &str {
        names::OBJECT
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.clob_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        structured_to_database(self.name(), value)
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        structured_to_host(self.name(), value)
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}

/// Maps a list of scalars to one comma-joined string column.
///
/// Lossy by design: element order survives, element types do not (every
/// element comes back as a string). An empty list stores as `NULL`.
#[derive(Debug, Default)]
pub struct SimpleArrayType;

impl SimpleArrayType {
    fn element_to_string(&self, element: &Value) -> Result<String> {
        match element {
            Value::String(s) => Ok(s.clone()),
            Value::SmallInt(v) => Ok(v.to_string()),
            Value::Int(v) => Ok(v.to_string()),
            Value::BigInt(v) => Ok(v.to_string()),
            Value::Float(v) => Ok(v.to_string()),
            Value::Decimal(d) => Ok(d.to_string()),
            other => Err(Error::invalid_type(
                other,
                self.name(),
                &["null", "Array of scalars"],
            )),
        }
    }
}

impl Type for SimpleArrayType {
    fn name(&self) -> &str {
        names::SIMPLE_ARRAY
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.clob_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Array(items) if items.is_empty() => Ok(Value::Null),
            Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.element_to_string(item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::String(parts.join(",")))
            }
            other => Err(Error::invalid_type(
                other,
                self.name(),
                &["null", "Array of scalars"],
            )),
        }
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => Ok(Value::Array(items.clone())),
            Value::String(s) if s.is_empty() => Ok(Value::Array(Vec::new())),
            Value::String(s) => Ok(Value::Array(
                s.split(',').map(|part| Value::String(part.to_owned())).collect(),
            )),
            other => Err(Error::invalid_format(other, self.name(), "comma-joined string")),
        }
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}
