use crate::domain::errors::{DomainError, StorageCode};

const SQLSTATE_INVALID_TEXT_REPRESENTATION: &str = "22P02";
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";
const SQLSTATE_NOT_NULL_VIOLATION: &str = "23502";
const SQLSTATE_NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

pub fn storage_code(sqlstate: &str) -> StorageCode {
    match sqlstate {
        SQLSTATE_INVALID_TEXT_REPRESENTATION => StorageCode::InvalidTextRepresentation,
        SQLSTATE_FOREIGN_KEY_VIOLATION => StorageCode::ForeignKeyViolation,
        SQLSTATE_NOT_NULL_VIOLATION => StorageCode::NotNullViolation,
        SQLSTATE_NUMERIC_VALUE_OUT_OF_RANGE => StorageCode::NumericValueOutOfRange,
        other => StorageCode::Other(other.to_string()),
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();
            match db_err.code() {
                Some(code) => DomainError::storage(storage_code(&code), message),
                None => DomainError::Persistence(message),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
