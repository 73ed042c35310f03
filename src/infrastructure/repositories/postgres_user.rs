// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::user::{User, UserRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    username: String,
    name: String,
    avatar_url: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            username: row.username,
            name: row.name,
            avatar_url: row.avatar_url,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT username, name, avatar_url FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
