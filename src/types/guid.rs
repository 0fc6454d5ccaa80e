use uuid::Uuid;

use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::Value;

/// Maps a GUID/UUID column (the terms are synonyms) to a host [`Uuid`].
///
/// On platforms without a native GUID column type the value lives in a
/// fixed character column and needs a comment hint to survive reverse
/// engineering.
#[derive(Debug, Default)]
pub struct GuidType;

impl Type for GuidType {
    fn name(&self) -> &str {
        names::GUID
    }

    fn sql_declaration(
        &self,
        column: &ColumnDefinition,
        platform: &dyn Platform,
    ) -> Result<String> {
        Ok(platform.guid_type_declaration_sql(column))
    }

    fn convert_to_database_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Uuid(u) => Ok(Value::String(u.hyphenated().to_string())),
            // textual input is accepted but must itself be a UUID; the wire
            // form is normalized to hyphenated lowercase either way
            Value::String(s) => Uuid::parse_str(s)
                .map(|u| Value::String(u.hyphenated().to_string()))
                .map_err(|err| {
                    Error::invalid_format_caused(s, self.name(), "hyphenated UUID", err)
                }),
            other => Err(Error::invalid_type(other, self.name(), &["null", "Uuid"])),
        }
    }

    fn convert_to_host_value(&self, value: &Value, _platform: &dyn Platform) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Uuid(u) => Ok(Value::Uuid(*u)),
            Value::String(s) => Uuid::parse_str(s)
                .map(Value::Uuid)
                .map_err(|err| {
                    Error::invalid_format_caused(s, self.name(), "hyphenated UUID", err)
                }),
            other => Err(Error::invalid_format(other, self.name(), "hyphenated UUID")),
        }
    }

    fn requires_sql_comment_hint(&self, platform: &dyn Platform) -> bool {
        !platform.has_native_guid_type()
    }
}
