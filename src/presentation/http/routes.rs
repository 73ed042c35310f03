// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments, topics, users},
    error::HttpError,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_origins(state, &[])
}

/// Build the API router. An empty origin list, or one containing `*`, allows
/// any origin. Unknown paths and unsupported methods on known paths are both
/// answered with 404 `Path not found`.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/topics", get(topics::list_topics))
        .route("/api/articles", get(articles::list_articles))
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article).patch(articles::vote_on_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comments::list_article_comments).post(comments::create_comment),
        )
        .route("/api/comments/{comment_id}", delete(comments::delete_comment))
        .route("/api/users", get(users::list_users))
        // Applies to the routes registered above, so it must follow them.
        .method_not_allowed_fallback(path_not_found)
        .fallback(path_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

async fn path_not_found() -> HttpError {
    HttpError::path_not_found()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
