//! Error types

use thiserror::Error;

use crate::binder::ViewType;

/// Errors raised while constructing items, building the adapter or binding rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A required text field was empty or blank.
    #[error("{field} must not be empty")]
    InvalidArgument { field: &'static str },

    /// A selection or value lies outside the declared domain.
    #[error("{field} value {value} is outside {domain}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        domain: String,
    },

    /// Two items in one collection share a keyword.
    #[error("keyword '{0}' is used by more than one item")]
    DuplicateIdentifier(String),

    /// A row created for one view type was handed an item of another.
    #[error("row of type {found:?} cannot display an item of type {expected:?}")]
    ViewTypeMismatch { expected: ViewType, found: ViewType },
}

impl SettingsError {
    /// Creates an invalid argument error for the named field.
    pub fn invalid(field: &'static str) -> Self {
        Self::InvalidArgument { field }
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(field: &'static str, value: impl Into<i64>, domain: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            domain: domain.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while moving records in and out of a state bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to encode bundle record: {0}")]
    Encode(bincode::Error),
    #[error("failed to decode bundle record: {0}")]
    Decode(bincode::Error),
}
