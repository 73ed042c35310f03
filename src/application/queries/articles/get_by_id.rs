use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub const ARTICLE_NOT_FOUND: &str = "Article not found";

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&query.id)?;
        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        Ok(article.into())
    }
}
