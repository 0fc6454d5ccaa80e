use crate::column::ColumnDefinition;
use crate::value::Value;

/// Capability surface a SQL dialect presents to the type layer.
///
/// Supplies per-dialect formatting strings, native column-declaration SQL,
/// and capability flags. Consumed by reference in every conversion call;
/// implementations must be safe for concurrent reads.
///
/// ANSI-flavored defaults are provided for everything except [`name`],
/// so a dialect overrides only what actually differs.
///
/// [`name`]: Platform::name
pub trait Platform: Send + Sync {
    /// The dialect name, e.g. `"postgresql"`.
    fn name(&self) -> &str;

    /// chrono format pattern for the textual form of a pure date.
    fn date_format_string(&self) -> &str {
        "%Y-%m-%d"
    }

    /// chrono format pattern for the textual form of a pure time.
    fn time_format_string(&self) -> &str {
        "%H:%M:%S"
    }

    /// chrono format pattern for the textual form of a datetime.
    fn date_time_format_string(&self) -> &str {
        "%Y-%m-%d %H:%M:%S"
    }

    /// chrono format pattern for the textual form of an offset-aware datetime.
    fn date_time_tz_format_string(&self) -> &str {
        "%Y-%m-%d %H:%M:%S%z"
    }

    fn varchar_type_declaration_sql(&self, column: &ColumnDefinition) -> String {
        let length = column.length.unwrap_or(255);
        if column.fixed {
            format!("CHAR({length})")
        } else {
            format!("VARCHAR({length})")
        }
    }

    fn clob_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "TEXT".to_owned()
    }

    fn binary_type_declaration_sql(&self, column: &ColumnDefinition) -> String {
        let length = column.length.unwrap_or(255);
        if column.fixed {
            format!("BINARY({length})")
        } else {
            format!("VARBINARY({length})")
        }
    }

    fn blob_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "BLOB".to_owned()
    }

    fn boolean_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "BOOLEAN".to_owned()
    }

    fn smallint_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "SMALLINT".to_owned()
    }

    fn integer_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "INTEGER".to_owned()
    }

    fn bigint_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "BIGINT".to_owned()
    }

    fn decimal_type_declaration_sql(&self, column: &ColumnDefinition) -> String {
        let precision = column.precision.unwrap_or(10);
        let scale = column.scale.unwrap_or(0);
        format!("NUMERIC({precision}, {scale})")
    }

    fn float_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "DOUBLE PRECISION".to_owned()
    }

    fn date_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "DATE".to_owned()
    }

    fn time_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "TIME".to_owned()
    }

    fn date_time_type_declaration_sql(&self, _column: &ColumnDefinition) -> String {
        "TIMESTAMP".to_owned()
    }

    /// Dialects without a distinct offset-aware column type fall back to the
    /// plain datetime declaration.
    fn date_time_tz_type_declaration_sql(&self, column: &ColumnDefinition) -> String {
        self.date_time_type_declaration_sql(column)
    }

    /// Declaration for a GUID column. Without a native GUID type this is a
    /// fixed 36-character character column.
    fn guid_type_declaration_sql(&self, column: &ColumnDefinition) -> String {
        let column = column.clone().length(36).fixed(true);
        self.varchar_type_declaration_sql(&column)
    }

    /// Declaration for a JSON column. Without a native JSON type the value
    /// is stored as character data.
    fn json_type_declaration_sql(&self, column: &ColumnDefinition) -> String {
        self.clob_type_declaration_sql(column)
    }

    fn has_native_guid_type(&self) -> bool {
        false
    }

    fn has_native_json_type(&self) -> bool {
        false
    }

    /// The database representation of a boolean. Dialects storing booleans
    /// as integers override this to return `0`/`1`.
    fn convert_boolean_to_database_value(&self, value: bool) -> Value {
        Value::Boolean(value)
    }
}
