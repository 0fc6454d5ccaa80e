use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::Value;

/// Maps an SQL double-precision float to a host `f64`.
#[derive(Debug, Default)]
pub struct FloatType;

impl Type for FloatType {
    fn name(&self) -> &str {
        names::FLOAT
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.float_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Float(v) => Ok(Value::Float(*v)),
            Value::SmallInt(v) => Ok(Value::Float(f64::from(*v))),
            Value::Int(v) => Ok(Value::Float(f64::from(*v))),
            Value::BigInt(v) => Ok(Value::Float(*v as f64)),
            Value::Decimal(d) => d
                .to_string()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|err| Error::invalid_format_caused(d, self.name(), "floating point number", err)),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|err| Error::invalid_format_caused(s, self.name(), "floating point number", err)),
            other => Err(Error::invalid_format(other, self.name(), "floating point number")),
        }
    }
}
