// src/domain/topic/entity.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
