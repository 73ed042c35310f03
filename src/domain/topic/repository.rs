use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::Topic;
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Topic>>;

    /// Exact, case-sensitive lookup by slug.
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Topic>>;
}
