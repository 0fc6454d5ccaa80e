//! The temporal conversion engine.
//!
//! All date/time logical types share one conversion routine parameterized
//! by kind and required mutability; the per-name types below are thin
//! shells over it. Parsing is strict against the platform format string and
//! anchors unrelated components at a fixed epoch: a pure date carries a
//! zeroed time-of-day, a pure time sits on 1970-01-01. The datetime kinds
//! additionally fall back to a lenient free-form parse before failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::column::ColumnDefinition;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::types::{names, Type};
use crate::value::{DateTimeValue, Mutability, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemporalKind {
    Date,
    Time,
    DateTime,
    DateTimeTz,
}

impl TemporalKind {
    fn format_string<'p>(self, platform: &'p dyn Platform) -> &'p str {
        match self {
            TemporalKind::Date => platform.date_format_string(),
            TemporalKind::Time => platform.time_format_string(),
            TemporalKind::DateTime => platform.date_time_format_string(),
            TemporalKind::DateTimeTz => platform.date_time_tz_format_string(),
        }
    }

    fn has_lenient_fallback(self) -> bool {
        matches!(self, TemporalKind::DateTime | TemporalKind::DateTimeTz)
    }
}

/// Whether a host value tagged `actual` is acceptable to a type requiring
/// `required`. Mutable types accept both families; immutable types accept
/// only immutable values.
fn accepts(required: Mutability, actual: Mutability) -> bool {
    match required {
        Mutability::Mutable => true,
        Mutability::Immutable => actual == Mutability::Immutable,
    }
}

fn expected_host_type(required: Mutability) -> &'static str {
    match required {
        Mutability::Mutable => "DateTime",
        Mutability::Immutable => "DateTimeImmutable",
    }
}

pub(crate) fn temporal_to_database(
    kind: TemporalKind,
    required: Mutability,
    type_name: &str,
    value: &Value,
    platform: &dyn Platform,
) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::DateTime(dt) if accepts(required, dt.mutability()) => {
            Ok(Value::String(dt.format(kind.format_string(platform))))
        }
        other => Err(Error::invalid_type(
            other,
            type_name,
            &["null", expected_host_type(required)],
        )),
    }
}

pub(crate) fn temporal_to_host(
    kind: TemporalKind,
    required: Mutability,
    type_name: &str,
    value: &Value,
    platform: &dyn Platform,
) -> Result<Value> {
    let format = kind.format_string(platform);

    match value {
        Value::Null => Ok(Value::Null),
        Value::DateTime(dt) if accepts(required, dt.mutability()) => Ok(value.clone()),
        Value::String(s) => match parse_strict(kind, required, s, format) {
            Ok(dt) => Ok(Value::DateTime(dt)),
            Err(err) if kind.has_lenient_fallback() => parse_lenient(s, required)
                .map(Value::DateTime)
                .ok_or_else(|| Error::invalid_format_caused(s, type_name, format, err)),
            Err(err) => Err(Error::invalid_format_caused(s, type_name, format, err)),
        },
        other => Err(Error::invalid_format(other, type_name, format)),
    }
}

fn parse_strict(
    kind: TemporalKind,
    mutability: Mutability,
    s: &str,
    format: &str,
) -> std::result::Result<DateTimeValue, chrono::ParseError> {
    match kind {
        TemporalKind::Date => {
            NaiveDate::parse_from_str(s, format).map(|d| DateTimeValue::from_date(d, mutability))
        }
        TemporalKind::Time => {
            NaiveTime::parse_from_str(s, format).map(|t| DateTimeValue::from_time(t, mutability))
        }
        TemporalKind::DateTime => {
            NaiveDateTime::parse_from_str(s, format).map(|dt| DateTimeValue::new(dt, mutability))
        }
        TemporalKind::DateTimeTz => DateTime::parse_from_str(s, format)
            .map(|dt| DateTimeValue::with_offset(dt.naive_local(), *dt.offset(), mutability)),
    }
}

/// Best-effort parse of free-form datetime text, tried after a strict parse
/// fails for the forgiving kinds.
pub(crate) fn parse_lenient(s: &str, mutability: Mutability) -> Option<DateTimeValue> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(DateTimeValue::with_offset(
            dt.naive_local(),
            *dt.offset(),
            mutability,
        ));
    }

    for format in ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(DateTimeValue::with_offset(
                dt.naive_local(),
                *dt.offset(),
                mutability,
            ));
        }
    }

    for format in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(DateTimeValue::new(dt, mutability));
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(DateTimeValue::from_date(d, mutability));
    }

    None
}

macro_rules! temporal_type {
    (
        $(#[$meta:meta])*
        $name:ident, $logical:path, $kind:expr, $mutability:expr, $declaration:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name;

        impl Type for $name {
            fn name(&self) -> &str {
                $logical
            }

            fn sql_declaration(
                &self,
                column: &ColumnDefinition,
                platform: &dyn Platform,
            ) -> Result<String> {
                Ok(platform.$declaration(column))
            }

            fn convert_to_database_value(
                &self,
                value: &Value,
                platform: &dyn Platform,
            ) -> Result<Value> {
                temporal_to_database($kind, $mutability, self.name(), value, platform)
            }

            fn convert_to_host_value(
                &self,
                value: &Value,
                platform: &dyn Platform,
            ) -> Result<Value> {
                temporal_to_host($kind, $mutability, self.name(), value, platform)
            }

            fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
                true
            }
        }
    };
}

temporal_type!(
    /// Maps an SQL DATE to a host date value; time-of-day is discarded on
    /// the way out and zeroed on the way back in.
    DateType, names::DATE, TemporalKind::Date, Mutability::Mutable, date_type_declaration_sql
);

temporal_type!(
    /// Immutable variant of [`DateType`].
    DateImmutableType, names::DATE_IMMUTABLE, TemporalKind::Date, Mutability::Immutable,
    date_type_declaration_sql
);

temporal_type!(
    /// Maps an SQL TIME to a host time value anchored at the epoch day.
    TimeType, names::TIME, TemporalKind::Time, Mutability::Mutable, time_type_declaration_sql
);

temporal_type!(
    /// Immutable variant of [`TimeType`].
    TimeImmutableType, names::TIME_IMMUTABLE, TemporalKind::Time, Mutability::Immutable,
    time_type_declaration_sql
);

temporal_type!(
    /// Maps an SQL DATETIME/TIMESTAMP to a host datetime value.
    DateTimeType, names::DATETIME, TemporalKind::DateTime, Mutability::Mutable,
    date_time_type_declaration_sql
);

temporal_type!(
    /// Immutable variant of [`DateTimeType`].
    DateTimeImmutableType, names::DATETIME_IMMUTABLE, TemporalKind::DateTime,
    Mutability::Immutable, date_time_type_declaration_sql
);

temporal_type!(
    /// Maps an SQL TIMESTAMP WITH TIME ZONE to an offset-aware host value.
    DateTimeTzType, names::DATETIMETZ, TemporalKind::DateTimeTz, Mutability::Mutable,
    date_time_tz_type_declaration_sql
);

temporal_type!(
    /// Immutable variant of [`DateTimeTzType`].
    DateTimeTzImmutableType, names::DATETIMETZ_IMMUTABLE, TemporalKind::DateTimeTz,
    Mutability::Immutable, date_time_tz_type_declaration_sql
);

macro_rules! var_datetime_type {
    ($(#[$meta:meta])* $name:ident, $logical:path, $mutability:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name;

        impl Type for $name {
            fn name(&self) -> &str {
                $logical
            }

            fn sql_declaration(
                &self,
                column: &ColumnDefinition,
                platform: &dyn Platform,
            ) -> Result<String> {
                Ok(platform.date_time_type_declaration_sql(column))
            }

            fn convert_to_database_value(
                &self,
                value: &Value,
                platform: &dyn Platform,
            ) -> Result<Value> {
                temporal_to_database(
                    TemporalKind::DateTime,
                    $mutability,
                    self.name(),
                    value,
                    platform,
                )
            }

            fn convert_to_host_value(
                &self,
                value: &Value,
                _platform: &dyn Platform,
            ) -> Result<Value> {
                match value {
                    Value::Null => Ok(Value::Null),
                    Value::DateTime(dt) if accepts($mutability, dt.mutability()) => {
                        Ok(value.clone())
                    }
                    Value::String(s) => parse_lenient(s, $mutability)
                        .map(Value::DateTime)
                        .ok_or_else(|| {
                            Error::invalid_format(s, self.name(), "any recognizable datetime")
                        }),
                    other => {
                        Err(Error::invalid_format(other, self.name(), "any recognizable datetime"))
                    }
                }
            }

            fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
                true
            }
        }
    };
}

var_datetime_type!(
    /// Forgiving datetime variant for columns holding vendor-specific
    /// datetime text a strict format string cannot cover. Reports the
    /// `datetime` logical name; register it via
    /// [`override_type`][crate::TypeRegistry::override_type].
    VarDateTimeType, names::DATETIME, Mutability::Mutable
);

var_datetime_type!(
    /// Immutable variant of [`VarDateTimeType`].
    VarDateTimeImmutableType, names::DATETIME_IMMUTABLE, Mutability::Immutable
);
