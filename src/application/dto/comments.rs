use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.id.into(),
            article_id: comment.article_id.into(),
            author: comment.author,
            body: comment.body,
            votes: comment.votes,
            created_at: comment.created_at,
        }
    }
}
