// src/application/commands/articles/vote.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, VoteDelta, value_objects::VOTES_NUMBERS_ONLY},
};
use serde_json::Value;

pub const ARTICLE_ID_NOT_FOUND: &str = "Article ID not found";

pub struct VoteOnArticleCommand {
    pub id: String,
    /// Raw `inc_votes` value from the request body; must be a JSON integer.
    pub inc_votes: Option<Value>,
}

impl ArticleCommandService {
    pub async fn vote_on_article(
        &self,
        command: VoteOnArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let delta = command
            .inc_votes
            .as_ref()
            .and_then(Value::as_i64)
            .ok_or_else(|| ApplicationError::validation(VOTES_NUMBERS_ONLY))?;
        let delta = VoteDelta::new(delta)?;

        let article = self
            .article_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_ID_NOT_FOUND))?;
        Ok(article.into())
    }
}
