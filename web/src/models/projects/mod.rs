//! Project table models.

/// Generated project models and Diesel mappings.
pub mod generated;
/// Re-export generated models for convenient access.
pub use generated::*;

use tracker_core::{Project, ProjectDraft};

impl From<Projects> for Project {
    fn from(row: Projects) -> Self {
        Project {
            id: row.id,
            name: row.name,
            description: row.description,
            completed: row.completed,
        }
    }
}

impl From<ProjectDraft> for CreateProjects {
    fn from(draft: ProjectDraft) -> Self {
        CreateProjects {
            name: draft.name,
            description: draft.description,
            completed: draft.completed.unwrap_or(false),
        }
    }
}

impl From<ProjectDraft> for UpdateProjects {
    fn from(draft: ProjectDraft) -> Self {
        UpdateProjects {
            name: Some(draft.name),
            description: Some(draft.description),
            completed: draft.completed,
        }
    }
}
