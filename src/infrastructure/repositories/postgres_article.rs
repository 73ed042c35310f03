// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleQuery, ArticleRepository, SortColumn, VoteDelta,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_WITH_COMMENT_COUNT: &str = "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
     articles.body, articles.created_at, articles.votes, articles.article_img_url, \
     COUNT(comments.comment_id) AS comment_count \
     FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId::new(row.article_id),
            title: row.title,
            topic: row.topic,
            author: row.author,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }
}

const fn sort_expression(column: SortColumn) -> &'static str {
    match column {
        SortColumn::ArticleId => "articles.article_id",
        SortColumn::Title => "articles.title",
        SortColumn::Author => "articles.author",
        SortColumn::CommentCount => "comment_count",
        SortColumn::Topic => "articles.topic",
        SortColumn::CreatedAt => "articles.created_at",
        SortColumn::ArticleImgUrl => "articles.article_img_url",
        SortColumn::Votes => "articles.votes",
        SortColumn::Body => "articles.body",
    }
}

impl PostgresArticleRepository {
    /// Render the listing statement. The topic is always a bound parameter;
    /// only the whitelisted column and direction are pushed as SQL text.
    fn list_statement(query: &ArticleQuery) -> QueryBuilder<'_, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_WITH_COMMENT_COUNT);

        if let Some(topic) = query.topic() {
            builder.push(" WHERE articles.topic = ");
            builder.push_bind(topic);
        }

        builder.push(" GROUP BY articles.article_id ORDER BY ");
        builder.push(sort_expression(query.sort_by()));
        builder.push(" ");
        builder.push(query.order().as_sql());
        builder
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn list(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        let rows = Self::list_statement(query)
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(rows = rows.len(), topic = ?query.topic(), "listed articles");
        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_WITH_COMMENT_COUNT} WHERE articles.article_id = $1 GROUP BY articles.article_id"
        ))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Article::from))
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2
             RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url,
                 (SELECT COUNT(*) FROM comments WHERE comments.article_id = articles.article_id) AS comment_count",
        )
        .bind(i32::from(delta))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Article::from))
    }
}
