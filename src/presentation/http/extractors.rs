// src/presentation/http/extractors.rs
//! Request extractors whose rejections are classified like any other
//! failure, so clients always receive a `{"msg": ...}` body.

use crate::application::error::ApplicationError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::{HttpError, INVALID_ID};

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const INVALID_QUERY_STRING: &str = "Invalid query string";

/// JSON request body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                Err(HttpError::from_error(ApplicationError::validation(
                    INVALID_REQUEST_BODY,
                )))
            }
        }
    }
}

/// Deserialized query string.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected query string");
                Err(HttpError::from_error(ApplicationError::validation(
                    INVALID_QUERY_STRING,
                )))
            }
        }
    }
}

/// The single identifier segment of a route such as `/api/comments/{comment_id}`,
/// percent-decoded but not yet parsed.
#[derive(Debug, Clone)]
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(Self(raw)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected path identifier");
                Err(HttpError::from_error(ApplicationError::validation(INVALID_ID)))
            }
        }
    }
}
