pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

pub use articles::ArticleDto;
pub use comments::CommentDto;
pub use topics::TopicDto;
pub use users::UserDto;
