use crate::column::ColumnDefinition;
use crate::error::Result;
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::Value;

/// Maps an SQL VARCHAR to a host string. Conversions are identity.
#[derive(Debug, Default)]
pub struct StringType;

impl Type for StringType {
    fn name(&self) -> &str {
        names::STRING
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.varchar_type_declaration_sql(column))
    }
}

/// Maps an SQL CLOB/TEXT to a host string.
#[derive(Debug, Default)]
pub struct TextType;

impl Type for TextType {
    fn name(&self) -> &str {
        names::TEXT
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.clob_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            // some drivers surface large character data as raw bytes
            Value::Bytes(b) => Ok(Value::String(String::from_utf8_lossy(b).into_owned())),
            other => Ok(other.clone()),
        }
    }
}
