use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        queries::articles::ARTICLE_NOT_FOUND,
    },
    domain::article::ArticleId,
};

pub struct ListArticleCommentsQuery {
    pub article_id: String,
}

impl CommentQueryService {
    /// Comments on one article, newest first. An article without comments
    /// yields an empty list; a missing article is not found.
    pub async fn list_article_comments(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::parse(&query.article_id)?;
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        }

        let comments = self.comment_repo.list_for_article(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
