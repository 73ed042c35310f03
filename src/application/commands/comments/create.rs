use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        queries::articles::ARTICLE_NOT_FOUND,
    },
    domain::{article::ArticleId, comment::NewComment},
};

pub struct CreateCommentCommand {
    pub article_id: String,
    pub username: Option<String>,
    pub body: Option<String>,
}

impl CommentCommandService {
    /// Post a comment on an existing article.
    ///
    /// Presence of `username` and `body`, and the existence of the author,
    /// are enforced by the store's constraints.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::parse(&command.article_id)?;
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id,
                author: command.username,
                body: command.body,
            })
            .await?;
        Ok(comment.into())
    }
}
