use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use thiserror::Error as ThisError;
use tracing::error;

use super::dto::ErrorMessage;
use crate::database::StoreError;

/// Every failure a handler can return. [`IntoResponse`] is the only place
/// these are turned into HTTP statuses.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("method not allowed! {0}")]
    MethodNotAllowed(Method),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(StoreError),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::MethodNotAllowed(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let code = self.status();
        if let Error::Storage(e) = &self {
            error!("Storage failure: {:?}", e);
        }
        (code, Json(ErrorMessage::new(&self.to_string()))).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => Error::NotFound(error.to_string()),
            other => Error::Storage(other),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}
