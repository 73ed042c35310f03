// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::parse_identifier;
use std::fmt;

pub const VOTES_NUMBERS_ONLY: &str = "Votes are numbers only!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(i32);

impl ArticleId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse the raw `:article_id` path segment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_identifier(raw).map(Self)
    }
}

impl From<ArticleId> for i32 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed adjustment applied to an article's vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i32);

impl VoteDelta {
    pub fn new(delta: i64) -> DomainResult<Self> {
        i32::try_from(delta)
            .map(Self)
            .map_err(|_| DomainError::Validation(VOTES_NUMBERS_ONLY.into()))
    }
}

impl From<VoteDelta> for i32 {
    fn from(value: VoteDelta) -> Self {
        value.0
    }
}
