/* @generated and managed by dsync */

#[allow(unused)]
use crate::diesel::*;
use crate::schema::*;

/// Struct representing a row in table `actions`
#[derive(
    Debug,
    Clone,
    serde::Serialize,
    serde::Deserialize,
    diesel::Queryable,
    diesel::Selectable,
    diesel::QueryableByName,
    diesel::Identifiable,
)]
#[diesel(table_name=actions, primary_key(id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct Actions {
    /// Field representing column `id`
    pub id: i32,
    /// Field representing column `project_id`
    pub project_id: i32,
    /// Field representing column `description`
    pub description: String,
    /// Field representing column `notes`
    pub notes: String,
    /// Field representing column `completed`
    pub completed: bool,
}

/// Create Struct for a row in table `actions` for [`Actions`]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, diesel::Insertable)]
#[diesel(table_name=actions)]
pub struct CreateActions {
    /// Field representing column `project_id`
    pub project_id: i32,
    /// Field representing column `description`
    pub description: String,
    /// Field representing column `notes`
    pub notes: String,
    /// Field representing column `completed`
    pub completed: bool,
}

/// Update Struct for a row in table `actions` for [`Actions`]
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, diesel::AsChangeset, PartialEq, Default,
)]
#[diesel(table_name=actions)]
pub struct UpdateActions {
    /// Field representing column `project_id`
    pub project_id: Option<i32>,
    /// Field representing column `description`
    pub description: Option<String>,
    /// Field representing column `notes`
    pub notes: Option<String>,
    /// Field representing column `completed`
    pub completed: Option<bool>,
}
