#![deny(missing_docs)]

//! # Tracker Core
//!
//! Domain model, validation policy and resource operations for the project
//! tracker. Storage and HTTP live in other crates; this one only decides.

/// Shared error types.
pub mod error;

/// Projects, actions and the `Resource` trait.
pub mod model;

/// Request validation and status decisions.
pub mod policy;

/// Per-operation sequencing of policy and store calls.
pub mod service;

/// Storage traits.
pub mod store;

pub use error::{ApiError, ApiResult, StoreError, StoreResult};
pub use model::{Action, ActionDraft, Id, Kind, Project, ProjectDraft, Resource};
pub use store::{ProjectActions, Store};
