use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::TopicListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics.", body = TopicListResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TopicListResponse>> {
    state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()
        .map(|topics| Json(TopicListResponse { topics }))
}
