// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

/// An article as read back from the store, annotated with the number of
/// comments that reference it.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}
