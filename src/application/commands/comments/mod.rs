mod create;
mod delete;
mod service;

pub use create::CreateCommentCommand;
pub use delete::{COMMENT_NOT_FOUND, DeleteCommentCommand};
pub use service::CommentCommandService;
