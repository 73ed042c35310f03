// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    queries::comments::ListArticleCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, JsonBody};
use crate::presentation::http::openapi::{CommentListResponse, CommentResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Unrecognised fields in the body are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Comments on the article, newest first.", body = CommentListResponse),
        (status = 400, description = "Malformed identifier.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
) -> HttpResult<Json<CommentListResponse>> {
    state
        .services
        .comment_queries
        .list_article_comments(ListArticleCommentsQuery { article_id })
        .await
        .into_http()
        .map(|comments| Json(CommentListResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Article identifier")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "The stored comment.", body = CommentResponse),
        (status = 400, description = "Malformed identifier or missing fields.", body = ErrorResponse),
        (status = 404, description = "No such article or unknown username.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
    JsonBody(payload): JsonBody<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = CreateCommentCommand {
        article_id,
        username: payload.username,
        body: payload.body,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment removed."),
        (status = 400, description = "Malformed identifier.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    IdPath(comment_id): IdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id: comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
