use crate::domain::article::entity::Article;
use crate::domain::article::query::ArticleQuery;
use crate::domain::article::value_objects::{ArticleId, VoteDelta};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Articles matching the query's topic filter, ordered as requested. An
    /// unknown topic simply matches nothing.
    async fn list(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Apply `delta` to the stored vote count in one statement. Returns `None`
    /// when no article has this id.
    async fn increment_votes(&self, id: ArticleId, delta: VoteDelta)
    -> DomainResult<Option<Article>>;
}
