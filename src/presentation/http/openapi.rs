// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CommentDto, TopicDto, UserDto};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::vote_on_article,
        crate::presentation::http::controllers::comments::list_article_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::users::list_users,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            TopicListResponse,
            UserListResponse,
            ArticleListResponse,
            ArticleResponse,
            CommentListResponse,
            CommentResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::VoteRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::TopicDto,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Topics", description = "Topic listing"),
        (name = "Articles", description = "Article listing, lookup and voting"),
        (name = "Comments", description = "Article comments"),
        (name = "Users", description = "User listing"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsdesk API",
        description = "News and discussion backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
