use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::comment::CommentId,
};

pub const COMMENT_NOT_FOUND: &str = "Comment not found";

pub struct DeleteCommentCommand {
    pub id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::parse(&command.id)?;
        if !self.comment_repo.delete(id).await? {
            return Err(ApplicationError::not_found(COMMENT_NOT_FOUND));
        }
        Ok(())
    }
}
