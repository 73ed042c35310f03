use std::sync::Arc;

use crate::domain::{article::ArticleRepository, comment::CommentRepository};

pub struct CommentQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }
}
