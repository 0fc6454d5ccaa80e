use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, BindingType, Type};
use crate::value::Value;

/// Maps an SQL boolean to a host `bool`.
///
/// The database representation is dialect-defined: platforms storing
/// booleans as integers rewrite the value through their boolean hook.
#[derive(Debug, Default)]
pub struct BooleanType;

impl Type for BooleanType {
    fn name(&self) -> &str {
        names::BOOLEAN
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.boolean_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Boolean(b) => Ok(platform.convert_boolean_to_database_value(*b)),
            other => Err(Error::invalid_type(other, self.name(), &["null", "bool"])),
        }
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Boolean(b) => Ok(Value::Boolean(*b)),
            Value::SmallInt(v) => Ok(Value::Boolean(*v != 0)),
            Value::Int(v) => Ok(Value::Boolean(*v != 0)),
            Value::BigInt(v) => Ok(Value::Boolean(*v != 0)),
            Value::String(s) => match s.as_str() {
                "" | "0" | "f" | "false" => Ok(Value::Boolean(false)),
                _ => Ok(Value::Boolean(true)),
            },
            other => Err(Error::invalid_format(other, self.name(), "boolean or 0/1")),
        }
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Boolean
    }
}
