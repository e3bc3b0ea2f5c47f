#![deny(missing_docs)]

//! Project record and its submitted form.

use super::{optional_boolean_like, Id, Kind, Resource};
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// A stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned id.
    pub id: Id,
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the project is finished.
    pub completed: bool,
}

/// Submitted project fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectDraft {
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Optional completion flag. New projects default to `false`; an update
    /// that omits it keeps the stored value.
    #[serde(default, deserialize_with = "optional_boolean_like")]
    pub completed: Option<bool>,
}

impl Resource for Project {
    const KIND: Kind = Kind::Project;
    const REQUIRED: &'static [&'static str] = &["name", "description"];
    type Draft = ProjectDraft;

    fn id(&self) -> Id {
        self.id
    }

    fn check(draft: &ProjectDraft) -> ApiResult<()> {
        if draft.name.trim().is_empty() {
            return Err(ApiError::Invalid("name must not be blank".into()));
        }
        if draft.description.trim().is_empty() {
            return Err(ApiError::Invalid("description must not be blank".into()));
        }
        Ok(())
    }
}
