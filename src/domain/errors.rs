// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure code reported by the storage engine for a rejected statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCode {
    /// A value could not be parsed into the column's type.
    InvalidTextRepresentation,
    /// A referenced row (author, article) does not exist.
    ForeignKeyViolation,
    /// A required column was given no value.
    NotNullViolation,
    /// Arithmetic left the column's numeric range.
    NumericValueOutOfRange,
    Other(String),
}

impl fmt::Display for StorageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTextRepresentation => f.write_str("invalid_text_representation"),
            Self::ForeignKeyViolation => f.write_str("foreign_key_violation"),
            Self::NotNullViolation => f.write_str("not_null_violation"),
            Self::NumericValueOutOfRange => f.write_str("numeric_value_out_of_range"),
            Self::Other(code) => write!(f, "sqlstate {code}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage failure ({code}): {message}")]
    Storage { code: StorageCode, message: String },
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn storage(code: StorageCode, message: impl Into<String>) -> Self {
        Self::Storage {
            code,
            message: message.into(),
        }
    }
}
