// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i32,
    article_id: i32,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::new(row.comment_id),
            article_id: ArticleId::new(row.article_id),
            author: row.author,
            body: row.body,
            votes: row.votes,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT comment_id, article_id, author, body, votes, created_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at DESC",
        )
        .bind(i32::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            body,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author, body)
             VALUES ($1, $2, $3)
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(i32::from(article_id))
        .bind(author)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Comment::from(row))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(i32::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
