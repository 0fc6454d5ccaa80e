//! Dialect-aware type mapping and value conversion for SQL database
//! abstraction layers.
//!
//! The crate translates between host value representations (dates,
//! intervals, GUIDs, numerics, booleans) and the textual form a given SQL
//! dialect expects, through a pluggable registry of logical types:
//!
//! - [`TypeRegistry`] owns the mapping from logical type name to converter
//!   singleton, with lazy instantiation, custom registration, override,
//!   and reverse lookup.
//! - [`Types`] is the process-wide access point, seeded with the built-in
//!   [`names`] vocabulary on first use.
//! - [`Type`] is the contract every logical type implements; the
//!   [`types`] module holds one implementation per kind.
//! - [`Platform`] is the capability surface a dialect supplies: format
//!   strings, declaration SQL, capability flags.
//!
//! ```
//! use dbal_types::{names, Platform, Types, Value};
//!
//! struct AnsiPlatform;
//!
//! impl Platform for AnsiPlatform {
//!     fn name(&self) -> &str {
//!         "ansi"
//!     }
//! }
//!
//! let ty = Types::get(names::DATE)?;
//! let wire = ty.convert_to_database_value(&Value::Null, &AnsiPlatform)?;
//! assert!(wire.is_null());
//! # Ok::<(), dbal_types::Error>(())
//! ```
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]

mod column;
mod error;
mod platform;
mod registry;
pub mod types;
mod value;

pub use column::ColumnDefinition;
pub use error::{BoxDynError, Error, Result};
pub use platform::Platform;
pub use registry::{TypeDescriptor, TypeRegistry};
pub use types::{names, BindingType, Type, Types};
pub use value::{DateTimeValue, Interval, Mutability, ParseIntervalError, Value};
