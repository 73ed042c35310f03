// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::VoteOnArticleCommand,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, JsonBody, QueryParams};
use crate::presentation::http::openapi::{ArticleListResponse, ArticleResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Only articles with exactly this topic slug.
    pub topic: Option<String>,
    /// One of the sortable article columns; defaults to `created_at`.
    pub sort_by: Option<String>,
    /// `asc` or `desc` in any case; defaults to `desc`.
    pub order: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    #[serde(default)]
    #[schema(value_type = i64)]
    pub inc_votes: Option<serde_json::Value>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles with comment counts.", body = ArticleListResponse),
        (status = 400, description = "Invalid sort column or order.", body = ErrorResponse),
        (status = 404, description = "Unknown topic.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        topic: params.topic,
        sort_by: params.sort_by,
        order: params.order,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "A single article.", body = ArticleResponse),
        (status = 400, description = "Malformed identifier.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article_id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Article identifier")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Article with its adjusted vote count.", body = ArticleResponse),
        (status = 400, description = "Malformed identifier or non-integer `inc_votes`.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn vote_on_article(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
    JsonBody(payload): JsonBody<VoteRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = VoteOnArticleCommand {
        id: article_id,
        inc_votes: payload.inc_votes,
    };

    state
        .services
        .article_commands
        .vote_on_article(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}
