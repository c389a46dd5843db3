use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fstore_protocol::MessageResponse;
use fstore_store::StoreError;
use thiserror::Error;

use crate::messages;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The request is malformed (missing multipart parts, bad query).
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) if !e.is_io() => StatusCode::OK,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Store outcomes render as `200 {message}`; faults render as a generic 500
/// and are logged, never echoed to the client.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Store(e) if !e.is_io() => messages::rejection(e),
            other => {
                tracing::error!(error = %other, "request failed");
                messages::INTERNAL_ERROR.to_string()
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fstore_types::FileName;

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    #[test]
    fn store_outcomes_are_ok_status() {
        let err = ServerError::from(StoreError::NameExists(name("a")));
        assert_eq!(err.status(), StatusCode::OK);
        let err = ServerError::from(StoreError::DuplicateContent {
            name: name("b"),
            existing: name("a"),
        });
        assert_eq!(err.status(), StatusCode::OK);
    }

    #[test]
    fn io_faults_are_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            ServerError::from(StoreError::Io(io)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_request_status() {
        let resp = ServerError::BadRequest("no files".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
