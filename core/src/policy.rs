#![deny(missing_docs)]

//! # Validation & Response Policy
//!
//! Pure decision functions: given a submitted payload or a store result, either
//! pass the value through or produce the [`ApiError`] that decides the response.
//! Nothing here touches a store.

use crate::error::{ApiError, ApiResult, StoreError};
use crate::model::{Id, Kind, Project, Resource};
use serde_json::Value;

/// Returns the names in `required` that the payload does not carry.
///
/// A field is missing when it is absent or JSON `null`. `false`, `0` and `""`
/// all count as present. A payload that is not a JSON object carries nothing.
pub fn missing_fields(payload: &Value, required: &[&'static str]) -> Vec<&'static str> {
    let object = payload.as_object();
    required
        .iter()
        .copied()
        .filter(|name| object.and_then(|o| o.get(*name)).map_or(true, Value::is_null))
        .collect()
}

/// Validates a submitted payload and decodes it into the kind's draft.
///
/// Presence is checked first, so a payload missing fields is always reported
/// as such even if other fields also have the wrong type.
pub fn admit<R: Resource>(payload: &Value) -> ApiResult<R::Draft> {
    let missing = missing_fields(payload, R::REQUIRED);
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let draft: R::Draft = serde_json::from_value(payload.clone())
        .map_err(|e| ApiError::Invalid(format!("invalid {} payload: {}", R::KIND, e)))?;
    R::check(&draft)?;
    Ok(draft)
}

/// A looked-up resource must be present.
pub fn found<R>(kind: Kind, id: Id, value: Option<R>) -> ApiResult<R> {
    value.ok_or(ApiError::NotFound { kind, id })
}

/// A removal must have deleted something.
pub fn removed(kind: Kind, id: Id, count: usize) -> ApiResult<()> {
    if count == 0 {
        return Err(ApiError::NotFound { kind, id });
    }
    Ok(())
}

/// A referenced project must exist.
pub fn parent_exists(project_id: Id, project: Option<Project>) -> ApiResult<()> {
    match project {
        Some(_) => Ok(()),
        None => Err(ApiError::Invalid(format!(
            "project_id {} does not reference an existing project",
            project_id
        ))),
    }
}

/// Classifies a failed write.
///
/// A foreign-key refusal means the referenced project disappeared after
/// [`parent_exists`] passed, which the client sees the same way as a dangling
/// `project_id`. Anything else stays a store failure.
pub fn write_failed(err: StoreError) -> ApiError {
    match err {
        StoreError::Constraint(_) => {
            ApiError::Invalid("project_id does not reference an existing project".into())
        }
        other => ApiError::Store(other),
    }
}
