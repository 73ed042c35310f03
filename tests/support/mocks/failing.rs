// tests/support/mocks/failing.rs
use async_trait::async_trait;
use newsdesk::domain::article::{Article, ArticleId, ArticleQuery, ArticleRepository, VoteDelta};
use newsdesk::domain::errors::{DomainError, DomainResult, StorageCode};

pub const LEAKY_DETAIL: &str = "connection to server at 10.0.0.7:5432 refused";

/// 常に失敗する記事リポジトリ（500 系の分類確認用）
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn list(&self, _query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence(LEAKY_DETAIL.into()))
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::storage(
            StorageCode::Other("57P01".into()),
            LEAKY_DETAIL,
        ))
    }

    async fn increment_votes(
        &self,
        _id: ArticleId,
        _delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        Err(DomainError::storage(
            StorageCode::InvalidTextRepresentation,
            LEAKY_DETAIL,
        ))
    }
}
