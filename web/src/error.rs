#![deny(missing_docs)]

//! # HTTP Errors
//!
//! Renders every failure as a status code plus a `{"message": ...}` body.

use actix_web::error::{BlockingError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use derive_more::{Display, From};
use log::{debug, error};
use serde::Serialize;
use tracker_core::ApiError;

/// Message sent in place of internal failure details.
const INTERNAL_MESSAGE: &str = "the request could not be completed, please retry later";

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable explanation.
    pub message: String,
}

/// Errors a route can return.
#[derive(Debug, Display, From)]
pub enum WebError {
    /// A rejected tracker operation.
    #[display("{_0}")]
    Api(ApiError),

    /// The blocking pool dropped the task.
    #[display("Blocking Error: {_0}")]
    Blocking(BlockingError),

    /// The path did not name a resource (e.g. a non-numeric id).
    #[from(ignore)]
    #[display("{_0}")]
    BadPath(String),

    /// The body could not be read as JSON.
    #[from(ignore)]
    #[display("{_0}")]
    BadBody(String),
}

impl WebError {
    /// What the client gets to see.
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for WebError {}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Api(e) => {
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            WebError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::BadPath(_) => StatusCode::NOT_FOUND,
            WebError::BadBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("rejected with {}: {}", status.as_u16(), self);
        }
        HttpResponse::build(status).json(ErrorBody {
            message: self.public_message(),
        })
    }
}

/// Error handler for `web::JsonConfig`.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    WebError::BadBody(format!("invalid request body: {}", err)).into()
}

/// Error handler for `web::PathConfig`.
pub fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    WebError::BadPath(format!("no resource at {}: {}", req.path(), err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use tracker_core::{Kind, StoreError};

    async fn body_of(err: WebError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_not_found_renders_message() {
        let err = WebError::from(ApiError::NotFound {
            kind: Kind::Project,
            id: 4,
        });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Project with id 4 could not be found");
    }

    #[actix_web::test]
    async fn test_store_failure_hides_details() {
        let err = WebError::from(ApiError::from(StoreError::query("no such table: actions")));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }

    #[actix_web::test]
    async fn test_validation_is_bad_request() {
        let err = WebError::from(ApiError::MissingFields(vec!["notes"]));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "missing required fields: notes");
    }
}
