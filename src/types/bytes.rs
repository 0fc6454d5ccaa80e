use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, BindingType, Type};
use crate::value::Value;

/// Maps an SQL VARBINARY to host bytes.
#[derive(Debug, Default)]
pub struct BinaryType;

impl Type for BinaryType {
    fn name(&self) -> &str {
        names::BINARY
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.binary_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Bytes(b) => Ok(Value::Bytes(b.clone())),
            Value::String(s) => Ok(Value::Bytes(s.clone().into_bytes())),
            other => Err(Error::invalid_format(other, self.name(), "binary data")),
        }
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Binary
    }
}

/// Maps an SQL BLOB to host bytes.
#[derive(Debug, Default)]
pub struct BlobType;

impl Type for BlobType {
    fn name(&self) -> &str {
        names::BLOB
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.blob_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Bytes(b) => Ok(Value::Bytes(b.clone())),
            Value::String(s) => Ok(Value::Bytes(s.clone().into_bytes())),
            other => Err(Error::invalid_format(other, self.name(), "binary data")),
        }
    }

    fn binding_type(&self) -> BindingType {
        BindingType::LargeObject
    }
}
