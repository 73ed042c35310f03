use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::UserListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users.", body = UserListResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<UserListResponse>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(|users| Json(UserListResponse { users }))
}
