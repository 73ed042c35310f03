// src/domain/comment/value_objects.rs
use crate::domain::errors::DomainResult;
use crate::domain::validation::parse_identifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(i32);

impl CommentId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse the raw `:comment_id` path segment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_identifier(raw).map(Self)
    }
}

impl From<CommentId> for i32 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}
