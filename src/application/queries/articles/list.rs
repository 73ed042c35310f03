use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleQuery, errors::DomainError},
};

pub const UNKNOWN_TOPIC: &str = "Invalid request";

pub struct ListArticlesQuery {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ArticleQueryService {
    /// List articles with their comment counts.
    ///
    /// `sort_by` and `order` are validated before any repository call. A
    /// `topic` filter must name an existing topic, otherwise the request is
    /// rejected as not found; a known topic without articles yields an empty
    /// list.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let spec = ArticleQuery::parse(
            query.topic,
            query.sort_by.as_deref(),
            query.order.as_deref(),
        )
        .map_err(DomainError::from)?;

        if let Some(slug) = spec.topic() {
            if self.topic_repo.find_by_slug(slug).await?.is_none() {
                return Err(ApplicationError::not_found(UNKNOWN_TOPIC));
            }
        }

        let articles = self.article_repo.list(&spec).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
