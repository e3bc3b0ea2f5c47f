//! # Error Handling
//!
//! Provides the `ApiError` enum returned by every tracker operation and the
//! `StoreError` raised at the storage seam.

use crate::model::{Id, Kind};
use derive_more::{Display, From};

/// Failure reported by a store implementation.
///
/// Stores wrap their native errors into one of these two buckets; the detail is
/// kept as text so the core does not depend on any database crate.
#[derive(Debug, Display)]
pub enum StoreError {
    /// No connection could be obtained.
    #[display("Connection Error: {_0}")]
    Connection(String),

    /// A statement failed.
    #[display("Query Error: {_0}")]
    Query(String),

    /// A write broke a foreign key.
    #[display("Constraint Error: {_0}")]
    Constraint(String),
}

impl StoreError {
    /// Wraps a connection failure.
    pub fn connection(err: impl std::fmt::Display) -> Self {
        StoreError::Connection(err.to_string())
    }

    /// Wraps a statement failure.
    pub fn query(err: impl std::fmt::Display) -> Self {
        StoreError::Query(err.to_string())
    }

    /// Wraps a foreign-key violation.
    pub fn constraint(err: impl std::fmt::Display) -> Self {
        StoreError::Constraint(err.to_string())
    }
}

impl std::error::Error for StoreError {}

/// Result type for store calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// The outcome of a rejected request.
///
/// Each variant maps to exactly one HTTP status; see [`ApiError::status`].
#[derive(Debug, Display, From)]
pub enum ApiError {
    /// Required fields absent from the payload.
    #[from(ignore)]
    #[display("missing required fields: {}", _0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Payload present but unusable (wrong type, blank text, dangling reference).
    #[from(ignore)]
    #[display("{_0}")]
    Invalid(String),

    /// No resource with this id.
    #[from(ignore)]
    #[display("{kind} with id {id} could not be found")]
    NotFound {
        /// Resource kind looked up.
        kind: Kind,
        /// Requested id.
        id: Id,
    },

    /// The store failed.
    #[display("{_0}")]
    Store(StoreError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingFields(_) | ApiError::Invalid(_) => 400,
            ApiError::NotFound { .. } => 404,
            ApiError::Store(_) => 500,
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for ApiError {}

/// Helper type alias for Result using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
