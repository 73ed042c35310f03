mod get_by_id;
mod list;
mod service;

pub use get_by_id::{ARTICLE_NOT_FOUND, GetArticleByIdQuery};
pub use list::{ListArticlesQuery, UNKNOWN_TOPIC};
pub use service::ArticleQueryService;
