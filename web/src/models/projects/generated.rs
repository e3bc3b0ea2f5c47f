/* @generated and managed by dsync */

#[allow(unused)]
use crate::diesel::*;
use crate::schema::*;

/// Struct representing a row in table `projects`
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
#[diesel(table_name=projects, primary_key(id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct Projects {
    /// Field representing column `id`
    pub id: i32,
    /// Field representing column `name`
    pub name: String,
    /// Field representing column `description`
    pub description: String,
    /// Field representing column `completed`
    pub completed: bool,
}

/// Create Struct for a row in table `projects` for [`Projects`]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, diesel::Insertable)]
#[diesel(table_name=projects)]
pub struct CreateProjects {
    /// Field representing column `name`
    pub name: String,
    /// Field representing column `description`
    pub description: String,
    /// Field representing column `completed`
    pub completed: bool,
}

/// Update Struct for a row in table `projects` for [`Projects`]
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, diesel::AsChangeset, PartialEq, Default,
)]
#[diesel(table_name=projects)]
pub struct UpdateProjects {
    /// Field representing column `name`
    pub name: Option<String>,
    /// Field representing column `description`
    pub description: Option<String>,
    /// Field representing column `completed`
    pub completed: Option<bool>,
}
