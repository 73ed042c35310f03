// src/application/commands/articles/mod.rs
mod service;
mod vote;

pub use service::ArticleCommandService;
pub use vote::{ARTICLE_ID_NOT_FOUND, VoteOnArticleCommand};
