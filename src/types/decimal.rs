use std::str::FromStr;

use rust_decimal::Decimal;

use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::Value;

/// Maps an SQL DECIMAL/NUMERIC to a host [`Decimal`].
///
/// The wire form is textual so no precision is lost crossing drivers that
/// lack an exact-numeric binary representation.
#[derive(Debug, Default)]
pub struct DecimalType;

impl Type for DecimalType {
    fn name(&self) -> &str {
        names::DECIMAL
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.decimal_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Decimal(d) => Ok(Value::String(d.to_string())),
            Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(Error::invalid_type(other, self.name(), &["null", "Decimal"])),
        }
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Decimal(d) => Ok(Value::Decimal(*d)),
            Value::SmallInt(v) => Ok(Value::Decimal(Decimal::from(*v))),
            Value::Int(v) => Ok(Value::Decimal(Decimal::from(*v))),
            Value::BigInt(v) => Ok(Value::Decimal(Decimal::from(*v))),
            Value::String(s) => Decimal::from_str(s.trim())
                .map(Value::Decimal)
                .map_err(|err| Error::invalid_format_caused(s, self.name(), "exact numeric", err)),
            other => Err(Error::invalid_format(other, self.name(), "exact numeric")),
        }
    }
}
