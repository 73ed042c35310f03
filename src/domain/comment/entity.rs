// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::CommentId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment to be inserted. `author` and `body` are passed through as given;
/// the store enforces that both are present and that the author exists.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: Option<String>,
    pub body: Option<String>,
}
