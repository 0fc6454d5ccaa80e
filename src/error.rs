use std::fmt::Debug;

use crate::value::Value;

/// A type-erased error source, used to carry an underlying parse failure.
pub type BoxDynError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A specialized `Result` for type registry and conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the registry and by value conversions.
///
/// Every error is raised synchronously at the point of detection and
/// propagated unmodified. Conversion failures signal a data-integrity
/// problem, never a transient condition; callers decide whether to abort,
/// skip, or surface them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A logical type name was requested that has never been registered.
    #[error("unknown column type {name:?} requested; register it before use")]
    UnknownType { name: String },

    /// An attempt to register a logical type name that already exists.
    #[error("type {name:?} already exists; use override_type to replace it")]
    TypeAlreadyExists { name: String },

    /// An override or reverse lookup referenced an unregistered type.
    #[error("type {name:?} is not registered")]
    TypeNotFound { name: String },

    /// A host value outside the accepted domain was passed to the
    /// database-direction conversion.
    #[error(
        "could not convert host value {value} to database value of type {type_name:?}; \
         expected one of: {}", expected.join(", ")
    )]
    InvalidType {
        value: String,
        type_name: String,
        expected: Vec<&'static str>,
    },

    /// A database value failed to parse against the expected wire format.
    #[error(
        "could not convert database value {value} to host value of type {type_name:?}; \
         expected format: {expected_format}"
    )]
    InvalidFormat {
        value: String,
        type_name: String,
        expected_format: String,
        #[source]
        source: Option<BoxDynError>,
    },
}

impl Error {
    pub(crate) fn unknown_type(name: &str) -> Self {
        Error::UnknownType { name: name.to_owned() }
    }

    pub(crate) fn type_exists(name: &str) -> Self {
        Error::TypeAlreadyExists { name: name.to_owned() }
    }

    pub(crate) fn type_not_found(name: &str) -> Self {
        Error::TypeNotFound { name: name.to_owned() }
    }

    pub(crate) fn invalid_type(value: &Value, type_name: &str, expected: &[&'static str]) -> Self {
        Error::InvalidType {
            value: format!("{value:?}"),
            type_name: type_name.to_owned(),
            expected: expected.to_vec(),
        }
    }

    pub(crate) fn invalid_format(value: impl Debug, type_name: &str, expected_format: &str) -> Self {
        Error::InvalidFormat {
            value: format!("{value:?}"),
            type_name: type_name.to_owned(),
            expected_format: expected_format.to_owned(),
            source: None,
        }
    }

    pub(crate) fn invalid_format_caused(
        value: impl Debug,
        type_name: &str,
        expected_format: &str,
        source: impl Into<BoxDynError>,
    ) -> Self {
        Error::InvalidFormat {
            value: format!("{value:?}"),
            type_name: type_name.to_owned(),
            expected_format: expected_format.to_owned(),
            source: Some(source.into()),
        }
    }
}
