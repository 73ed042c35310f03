// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::ArticleRepository, comment::CommentRepository, topic::TopicRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&topic_repo),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_repo),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_repo),
        ));
        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&topic_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            topic_queries,
            user_queries,
        }
    }
}
