use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, BindingType, Type};
use crate::value::Value;

/// Maps an SQL SMALLINT to a host `i16`.
#[derive(Debug, Default)]
pub struct SmallIntType;

impl Type for SmallIntType {
    fn name(&self) -> &str {
        names::SMALLINT
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.smallint_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::SmallInt(v) => Ok(Value::SmallInt(*v)),
            Value::Int(v) => i16::try_from(*v)
                .map(Value::SmallInt)
                .map_err(|err| Error::invalid_format_caused(v, self.name(), "16-bit integer", err)),
            Value::BigInt(v) => i16::try_from(*v)
                .map(Value::SmallInt)
                .map_err(|err| Error::invalid_format_caused(v, self.name(), "16-bit integer", err)),
            Value::String(s) => s
                .trim()
                .parse::<i16>()
                .map(Value::SmallInt)
                .map_err(|err| Error::invalid_format_caused(s, self.name(), "16-bit integer", err)),
            other => Err(Error::invalid_format(other, self.name(), "16-bit integer")),
        }
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Integer
    }
}

/// Maps an SQL INT to a host `i32`.
#[derive(Debug, Default)]
pub struct IntegerType;

impl Type for IntegerType {
    fn name(&self) -> &str {
        names::INTEGER
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.integer_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Int(v) => Ok(Value::Int(*v)),
            Value::SmallInt(v) => Ok(Value::Int(i32::from(*v))),
            Value::BigInt(v) => i32::try_from(*v)
                .map(Value::Int)
                .map_err(|err| Error::invalid_format_caused(v, self.name(), "32-bit integer", err)),
            Value::String(s) => s
                .trim()
                .parse::<i32>()
                .map(Value::Int)
                .map_err(|err| Error::invalid_format_caused(s, self.name(), "32-bit integer", err)),
            other => Err(Error::invalid_format(other, self.name(), "32-bit integer")),
        }
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Integer
    }
}

/// Maps an SQL BIGINT to a host `i64`.
#[derive(Debug, Default)]
pub struct BigIntType;

impl Type for BigIntType {
    fn name(&self) -> &str {
        names::BIGINT
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.bigint_type_declaration_sql(column))
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::BigInt(v) => Ok(Value::BigInt(*v)),
            Value::Int(v) => Ok(Value::BigInt(i64::from(*v))),
            Value::SmallInt(v) => Ok(Value::BigInt(i64::from(*v))),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::BigInt)
                .map_err(|err| Error::invalid_format_caused(s, self.name(), "64-bit integer", err)),
            other => Err(Error::invalid_format(other, self.name(), "64-bit integer")),
        }
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Integer
    }
}
