use std::sync::Arc;

use crate::domain::{article::ArticleRepository, topic::TopicRepository};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        topic_repo: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            article_repo,
            topic_repo,
        }
    }
}
