//! Conversions between host values and dialect wire representations.
//!
//! # Built-in logical types
//!
//! | Logical name(s)                       | Host value                 | Wire form                       |
//! |---------------------------------------|----------------------------|---------------------------------|
//! | `boolean`                             | `Value::Boolean`           | platform boolean representation |
//! | `smallint`, `integer`, `bigint`       | `i16` / `i32` / `i64`      | integer                         |
//! | `float`                               | `f64`                      | floating point                  |
//! | `decimal`                             | `rust_decimal::Decimal`    | exact numeric text              |
//! | `string`, `text`                      | `Value::String`            | character data                  |
//! | `binary`, `blob`                      | `Value::Bytes`             | binary data                     |
//! | `guid`                                | `uuid::Uuid`               | hyphenated text or native GUID  |
//! | `date`, `time`, `datetime`, `datetimetz` (each `× _immutable`) | [`DateTimeValue`] | platform-formatted text |
//! | `dateinterval`                        | [`Interval`]               | `P1Y2M3DT4H5M6S`                |
//! | `json`, `json_array`, `array`, `object` | `serde_json::Value`      | JSON text                       |
//! | `simple_array`                        | `Value::Array` of scalars  | comma-joined string             |
//!
//! Temporal logical types that share one physical column type cannot be told
//! apart by catalog metadata alone; they report
//! [`requires_sql_comment_hint`][Type::requires_sql_comment_hint] so
//! reverse engineering can annotate the column with the logical name.
//!
//! [`DateTimeValue`]: crate::DateTimeValue
//! [`Interval`]: crate::Interval

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::column::ColumnDefinition;
use crate::error::Result;
use crate::platform::Platform;
use crate::registry::{TypeDescriptor, TypeRegistry};
use crate::value::Value;

mod array;
mod boolean;
mod bytes;
mod datetime;
mod decimal;
mod float;
mod guid;
mod int;
mod interval;
mod json;
mod str;

pub use array::{ArrayType, ObjectType, SimpleArrayType};
pub use boolean::BooleanType;
pub use bytes::{BinaryType, BlobType};
pub use datetime::{
    DateImmutableType, DateTimeImmutableType, DateTimeType, DateTimeTzImmutableType,
    DateTimeTzType, DateType, TimeImmutableType, TimeType, VarDateTimeImmutableType,
    VarDateTimeType,
};
pub use decimal::DecimalType;
pub use float::FloatType;
pub use guid::GuidType;
pub use int::{BigIntType, IntegerType, SmallIntType};
pub use interval::DateIntervalType;
pub use json::{JsonArrayType, JsonType};
pub use str::{StringType, TextType};

/// The preferred statement-binding hint for values of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingType {
    Boolean,
    Integer,
    String,
    Binary,
    LargeObject,
}

/// The polymorphic contract every logical type implements.
///
/// Instances are stateless flyweights shared as `Arc<dyn Type>`; all
/// operations are pure, synchronous, in-memory transformations.
pub trait Type: Any + Send + Sync + Debug {
    /// The logical type name, as registered.
    fn name(&self) -> &str;

    /// The SQL declaration snippet for a column of this type, delegated to
    /// the platform method appropriate to the kind.
    fn sql_declaration(&self, column: &ColumnDefinition, platform: &dyn Platform)
        -> Result<String>;

    /// Convert a host value to its database representation.
    ///
    /// `Null` maps to `Null` unconditionally; the default is identity
    /// passthrough.
    fn convert_to_database_value(&self, value: &Value, platform: &dyn Platform) -> Result<Value> {
        let _ = platform;
        Ok(value.clone())
    }

    /// Convert a database representation back to the host value.
    ///
    /// `Null` maps to `Null` unconditionally; the default is identity
    /// passthrough.
    fn convert_to_host_value(&self, value: &Value, platform: &dyn Platform) -> Result<Value> {
        let _ = platform;
        Ok(value.clone())
    }

    fn binding_type(&self) -> BindingType {
        BindingType::String
    }

    /// Whether reverse engineering needs an SQL comment to distinguish this
    /// logical type from others sharing the same physical column type.
    fn requires_sql_comment_hint(&self, platform: &dyn Platform) -> bool {
        let _ = platform;
        false
    }

    /// Whether working with this column requires SQL-level conversion
    /// functions. Metadata only; most types answer `false`.
    fn can_require_sql_conversion(&self) -> bool {
        false
    }

    /// Rewrite an SQL expression so it converts to the database value
    /// in-query. String-level, not value-level; default is identity.
    fn convert_to_database_value_sql(&self, sql_expr: &str, platform: &dyn Platform) -> String {
        let _ = platform;
        sql_expr.to_owned()
    }

    /// Rewrite an SQL expression so it converts to the host value in-query.
    fn convert_to_host_value_sql(&self, sql_expr: &str, platform: &dyn Platform) -> String {
        let _ = platform;
        sql_expr.to_owned()
    }

    /// The native database type names this logical type claims on a
    /// platform, for reverse engineering.
    fn mapped_database_types(&self, platform: &dyn Platform) -> Vec<String> {
        let _ = platform;
        Vec::new()
    }
}

/// The stable vocabulary of built-in logical type names.
///
/// External code should depend on these constants, not on implementation
/// identifiers.
pub mod names {
    pub const ARRAY: &str = "array";
    pub const SIMPLE_ARRAY: &str = "simple_array";
    pub const JSON_ARRAY: &str = "json_array";
    pub const JSON: &str = "json";
    pub const OBJECT: &str = "object";
    pub const BOOLEAN: &str = "boolean";
    pub const INTEGER: &str = "integer";
    pub const SMALLINT: &str = "smallint";
    pub const BIGINT: &str = "bigint";
    pub const STRING: &str = "string";
    pub const TEXT: &str = "text";
    pub const BINARY: &str = "binary";
    pub const BLOB: &str = "blob";
    pub const DECIMAL: &str = "decimal";
    pub const FLOAT: &str = "float";
    pub const GUID: &str = "guid";
    pub const DATE: &str = "date";
    pub const DATE_IMMUTABLE: &str = "date_immutable";
    pub const TIME: &str = "time";
    pub const TIME_IMMUTABLE: &str = "time_immutable";
    pub const DATETIME: &str = "datetime";
    pub const DATETIME_IMMUTABLE: &str = "datetime_immutable";
    pub const DATETIMETZ: &str = "datetimetz";
    pub const DATETIMETZ_IMMUTABLE: &str = "datetimetz_immutable";
    pub const DATEINTERVAL: &str = "dateinterval";
}

/// Seed a registry with the built-in name → implementation map.
pub(crate) fn register_builtins(registry: &mut TypeRegistry) {
    let builtins: &[(&str, TypeDescriptor)] = &[
        (names::ARRAY, TypeDescriptor::of::<ArrayType>()),
        (names::SIMPLE_ARRAY, TypeDescriptor::of::<SimpleArrayType>()),
        (names::JSON_ARRAY, TypeDescriptor::of::<JsonArrayType>()),
        (names::JSON, TypeDescriptor::of::<JsonType>()),
        (names::OBJECT, TypeDescriptor::of::<ObjectType>()),
        (names::BOOLEAN, TypeDescriptor::of::<BooleanType>()),
        (names::INTEGER, TypeDescriptor::of::<IntegerType>()),
        (names::SMALLINT, TypeDescriptor::of::<SmallIntType>()),
        (names::BIGINT, TypeDescriptor::of::<BigIntType>()),
        (names::STRING, TypeDescriptor::of::<StringType>()),
        (names::TEXT, TypeDescriptor::of::<TextType>()),
        (names::BINARY, TypeDescriptor::of::<BinaryType>()),
        (names::BLOB, TypeDescriptor::of::<BlobType>()),
        (names::DECIMAL, TypeDescriptor::of::<DecimalType>()),
        (names::FLOAT, TypeDescriptor::of::<FloatType>()),
        (names::GUID, TypeDescriptor::of::<GuidType>()),
        (names::DATE, TypeDescriptor::of::<DateType>()),
        (names::DATE_IMMUTABLE, TypeDescriptor::of::<DateImmutableType>()),
        (names::TIME, TypeDescriptor::of::<TimeType>()),
        (names::TIME_IMMUTABLE, TypeDescriptor::of::<TimeImmutableType>()),
        (names::DATETIME, TypeDescriptor::of::<DateTimeType>()),
        (names::DATETIME_IMMUTABLE, TypeDescriptor::of::<DateTimeImmutableType>()),
        (names::DATETIMETZ, TypeDescriptor::of::<DateTimeTzType>()),
        (names::DATETIMETZ_IMMUTABLE, TypeDescriptor::of::<DateTimeTzImmutableType>()),
        (names::DATEINTERVAL, TypeDescriptor::of::<DateIntervalType>()),
    ];

    for (name, descriptor) in builtins {
        registry.register_builtin(name, *descriptor);
    }

    tracing::debug!(count = builtins.len(), "seeded built-in types");
}

static REGISTRY: LazyLock<RwLock<TypeRegistry>> =
    LazyLock::new(|| RwLock::new(TypeRegistry::with_builtins()));

/// Process-wide access point over a shared [`TypeRegistry`], seeded with the
/// built-in mappings on first use.
///
/// Runtime registration is expected to happen during application bootstrap,
/// before concurrent read traffic begins; the lock makes late registration
/// safe regardless.
pub struct Types;

impl Types {
    /// Resolve a logical type name to its flyweight instance.
    ///
    /// Cache hits are served under the read lock, so steady-state lookups
    /// from concurrent callers do not serialize; only a first resolution
    /// takes the write lock to instantiate.
    pub fn get(name: &str) -> Result<Arc<dyn Type>> {
        let cached = REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cached(name);
        if let Some(instance) = cached {
            return Ok(instance);
        }

        Self::registry_mut().get_type(name)
    }

    /// Register a custom type under a new logical name.
    pub fn add(name: &str, descriptor: TypeDescriptor) -> Result<()> {
        Self::registry_mut().add_type(name, descriptor)
    }

    /// Whether a logical type name is registered.
    pub fn has(name: &str) -> bool {
        REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_type(name)
    }

    /// Replace the implementation behind an already-registered name.
    pub fn override_type(name: &str, descriptor: TypeDescriptor) -> Result<()> {
        Self::registry_mut().override_type(name, descriptor)
    }

    /// Read-only snapshot of name → implementation-identifier pairs.
    pub fn types_map() -> BTreeMap<String, &'static str> {
        REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .types_map()
    }

    fn registry_mut() -> std::sync::RwLockWriteGuard<'static, TypeRegistry> {
        REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
    }
}
