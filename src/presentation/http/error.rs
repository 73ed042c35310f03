//! Translation of application failures into HTTP responses.
//!
//! Every failed request is classified exactly once by [`HttpError::from_error`],
//! which tries the classifiers in [`CLASSIFIERS`] in order and stops at the
//! first match. Anything no classifier recognises is logged and answered with
//! a generic 500 whose body carries no internal detail.

use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::article::value_objects::VOTES_NUMBERS_ONLY;
use crate::domain::errors::{DomainError, StorageCode};
pub use crate::domain::validation::INVALID_ID;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const USERNAME_INVALID: &str = "Username invalid";
pub const COMMENT_FIELDS_REQUIRED: &str = "Comments requires a body and author";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const PATH_NOT_FOUND: &str = "Path not found";

type Classifier = fn(&ApplicationError) -> Option<HttpError>;

/// Ordered from the most specific signal to the least.
const CLASSIFIERS: &[Classifier] = &[classify_storage_failure, classify_rejection];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        CLASSIFIERS
            .iter()
            .find_map(|classify| classify(&err))
            .unwrap_or_else(|| {
                tracing::error!(error = %err, "unhandled error while serving request");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            })
    }

    pub fn path_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, PATH_NOT_FOUND)
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure codes reported by the storage engine.
fn classify_storage_failure(err: &ApplicationError) -> Option<HttpError> {
    let ApplicationError::Domain(DomainError::Storage { code, .. }) = err else {
        return None;
    };
    match code {
        StorageCode::InvalidTextRepresentation => {
            Some(HttpError::new(StatusCode::BAD_REQUEST, INVALID_ID))
        }
        StorageCode::ForeignKeyViolation => {
            Some(HttpError::new(StatusCode::NOT_FOUND, USERNAME_INVALID))
        }
        StorageCode::NotNullViolation => {
            Some(HttpError::new(StatusCode::BAD_REQUEST, COMMENT_FIELDS_REQUIRED))
        }
        // Vote arithmetic is the only statement that can leave an integer column's range.
        StorageCode::NumericValueOutOfRange => {
            Some(HttpError::new(StatusCode::BAD_REQUEST, VOTES_NUMBERS_ONLY))
        }
        StorageCode::Other(_) => None,
    }
}

/// Rejections raised on purpose by the application, which already carry the
/// status and message to send.
fn classify_rejection(err: &ApplicationError) -> Option<HttpError> {
    match err {
        ApplicationError::Validation(msg) | ApplicationError::Domain(DomainError::Validation(msg)) => {
            Some(HttpError::new(StatusCode::BAD_REQUEST, msg.as_str()))
        }
        ApplicationError::NotFound(msg) | ApplicationError::Domain(DomainError::NotFound(msg)) => {
            Some(HttpError::new(StatusCode::NOT_FOUND, msg.as_str()))
        }
        _ => None,
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { msg: self.message })).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
