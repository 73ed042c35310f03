use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
            comment_count: article.comment_count,
        }
    }
}
