// src/domain/validation.rs
//! Input checks shared by the identifier value objects.

use crate::domain::errors::{DomainError, DomainResult};

pub const INVALID_ID: &str = "Invalid ID";

/// Parse a path identifier as the store's 32-bit integer key.
pub fn parse_identifier(raw: &str) -> DomainResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| DomainError::Validation(INVALID_ID.into()))
}
