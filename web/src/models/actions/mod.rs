//! Action table models.

/// Generated action models and Diesel mappings.
pub mod generated;
/// Re-export generated models for convenient access.
pub use generated::*;

use tracker_core::{Action, ActionDraft};

impl From<Actions> for Action {
    fn from(row: Actions) -> Self {
        Action {
            id: row.id,
            project_id: row.project_id,
            description: row.description,
            notes: row.notes,
            completed: row.completed,
        }
    }
}

impl From<ActionDraft> for CreateActions {
    fn from(draft: ActionDraft) -> Self {
        CreateActions {
            project_id: draft.project_id,
            description: draft.description,
            notes: draft.notes,
            completed: draft.completed,
        }
    }
}

impl From<ActionDraft> for UpdateActions {
    fn from(draft: ActionDraft) -> Self {
        UpdateActions {
            project_id: Some(draft.project_id),
            description: Some(draft.description),
            notes: Some(draft.notes),
            completed: Some(draft.completed),
        }
    }
}
