use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::topic::{Topic, TopicRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    slug: String,
    description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Self {
            slug: row.slug,
            description: row.description,
        }
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        let rows = sqlx::query_as::<_, TopicRow>("SELECT slug, description FROM topics")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Topic>> {
        let row = sqlx::query_as::<_, TopicRow>(
            "SELECT slug, description FROM topics WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Topic::from))
    }
}
