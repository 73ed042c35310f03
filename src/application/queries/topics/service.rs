use std::sync::Arc;

use crate::{
    application::{ApplicationResult, dto::TopicDto},
    domain::topic::TopicRepository,
};

pub struct TopicQueryService {
    topic_repo: Arc<dyn TopicRepository>,
}

impl TopicQueryService {
    pub fn new(topic_repo: Arc<dyn TopicRepository>) -> Self {
        Self { topic_repo }
    }

    pub async fn list_topics(&self) -> ApplicationResult<Vec<TopicDto>> {
        let topics = self.topic_repo.list().await?;
        Ok(topics.into_iter().map(Into::into).collect())
    }
}
