#![deny(missing_docs)]

//! Action record and its submitted form.

use super::{boolean_like, Id, Kind, Resource};
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// A stored action, always attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Store-assigned id.
    pub id: Id,
    /// Owning project.
    pub project_id: Id,
    /// What needs doing.
    pub description: String,
    /// Additional notes.
    pub notes: String,
    /// Whether the action is done.
    pub completed: bool,
}

/// Submitted action fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionDraft {
    /// Owning project; must exist.
    pub project_id: Id,
    /// What needs doing.
    pub description: String,
    /// Additional notes.
    pub notes: String,
    /// Completion flag.
    #[serde(deserialize_with = "boolean_like")]
    pub completed: bool,
}

impl Resource for Action {
    const KIND: Kind = Kind::Action;
    const REQUIRED: &'static [&'static str] = &["description", "notes", "completed", "project_id"];
    type Draft = ActionDraft;

    fn id(&self) -> Id {
        self.id
    }

    fn check(draft: &ActionDraft) -> ApiResult<()> {
        if draft.description.trim().is_empty() {
            return Err(ApiError::Invalid("description must not be blank".into()));
        }
        if draft.notes.trim().is_empty() {
            return Err(ApiError::Invalid("notes must not be blank".into()));
        }
        Ok(())
    }

    fn parent(draft: &ActionDraft) -> Option<Id> {
        Some(draft.project_id)
    }
}
