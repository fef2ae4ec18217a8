// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("notification manager lock poisoned")]
    Poisoned,
}

/// Rejected toast options.
///
/// Raised synchronously at the `show` boundary when options arrive from an
/// untyped source (a form, the command line, a config file).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A duration field was below zero.
    #[error("{field} must not be negative (got {value} ms)")]
    NegativeDuration {
        /// Name of the offending option.
        field: &'static str,
        /// The raw value in milliseconds.
        value: i64,
    },

    /// The variant name is not one of the known variants.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// The position name is not one of the known anchors.
    #[error("unknown position: {0}")]
    UnknownPosition(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::Poisoned
    }
}

pub type Result<T> = std::result::Result<T, Error>;
