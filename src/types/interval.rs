use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::{Interval, Value};

/// Maps an interval string to a host [`Interval`].
///
/// Stored as a fixed 255-character character column holding the
/// `P1Y2M3DT4H5M6S` duration form; there is no portable native interval
/// column type.
#[derive(Debug, Default)]
pub struct DateIntervalType;

impl Type for DateIntervalType {
    fn name(&self) -> &str {
        names::DATEINTERVAL
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        let column = column.clone().length(255).fixed(true);
        Ok(platform.varchar_type_declaration_sql(&column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Interval(interval) => Ok(Value::String(interval.to_string())),
            other => Err(Error::invalid_type(other, self.name(), &["null", "Interval"])),
        }
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Interval(interval) => Ok(Value::Interval(*interval)),
            Value::String(s) => s
                .parse::<Interval>()
                .map(Value::Interval)
                .map_err(|err| {
                    Error::invalid_format_caused(s, self.name(), "P%YY%MM%DDT%HH%IM%SS", err)
                }),
            other => Err(Error::invalid_format(other, self.name(), "P%YY%MM%DDT%HH%IM%SS")),
        }
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}
