#![deny(missing_docs)]

//! # SQLite Store
//!
//! Implements the core store traits over an r2d2 pool of diesel
//! `SqliteConnection`s. Every method is blocking; callers run them on actix's
//! blocking pool.

use crate::models::actions::{Actions, CreateActions, UpdateActions};
use crate::models::projects::{CreateProjects, Projects, UpdateProjects};
use crate::schema::{actions, projects};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use log::info;
use tracker_core::{
    Action, ActionDraft, Id, Project, ProjectActions, ProjectDraft, Store, StoreError, StoreResult,
};

/// Pool of SQLite connections.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of the pool.
pub type SqliteConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Schema creation script, shared with the diesel CLI migration directory.
const MIGRATION: &str = include_str!("../migrations/2024-05-01-000000_create_tracker/up.sql");

/// Database URL that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Per-connection settings applied when the pool opens a connection.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Maps a failed insert/update, keeping foreign-key violations apart so the
/// service can answer them as a bad reference.
fn write_error(err: DieselError) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StoreError::constraint(info.message())
        }
        other => StoreError::query(other),
    }
}

/// Handle to the tracker database. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a pool for `url` (a file path or [`IN_MEMORY`]).
    ///
    /// Every connection to `:memory:` is a separate database, so that URL gets a
    /// single connection that is never recycled.
    pub fn connect(url: &str, pool_size: u32) -> StoreResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(url);
        let builder = Pool::builder().connection_customizer(Box::new(ConnectionOptions));
        let builder = if url == IN_MEMORY {
            builder.max_size(1).idle_timeout(None).max_lifetime(None)
        } else {
            builder.max_size(pool_size)
        };
        let pool = builder.build(manager).map_err(StoreError::connection)?;
        info!("opened database {} (pool size {})", url, pool.max_size());
        Ok(Database { pool })
    }

    /// Creates the tables if they do not exist yet.
    pub fn migrate(&self) -> StoreResult<()> {
        let mut conn = self.connection()?;
        conn.batch_execute(MIGRATION).map_err(StoreError::query)
    }

    /// Checks out a connection.
    pub fn connection(&self) -> StoreResult<SqliteConn> {
        self.pool.get().map_err(StoreError::connection)
    }

    /// Round-trips a trivial statement.
    pub fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connection()?;
        conn.batch_execute("SELECT 1").map_err(StoreError::query)
    }
}

impl Store<Project> for Database {
    fn all(&self) -> StoreResult<Vec<Project>> {
        let mut conn = self.connection()?;
        let rows = projects::table
            .order(projects::id)
            .select(Projects::as_select())
            .load(&mut conn)
            .map_err(StoreError::query)?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    fn get(&self, id: Id) -> StoreResult<Option<Project>> {
        let mut conn = self.connection()?;
        let row = projects::table
            .find(id)
            .select(Projects::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StoreError::query)?;
        Ok(row.map(Project::from))
    }

    fn insert(&self, draft: ProjectDraft) -> StoreResult<Project> {
        let mut conn = self.connection()?;
        let row = diesel::insert_into(projects::table)
            .values(CreateProjects::from(draft))
            .returning(Projects::as_returning())
            .get_result(&mut conn)
            .map_err(write_error)?;
        Ok(row.into())
    }

    fn update(&self, id: Id, changes: ProjectDraft) -> StoreResult<Option<Project>> {
        let mut conn = self.connection()?;
        let row = diesel::update(projects::table.find(id))
            .set(UpdateProjects::from(changes))
            .returning(Projects::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(write_error)?;
        Ok(row.map(Project::from))
    }

    fn remove(&self, id: Id) -> StoreResult<usize> {
        let mut conn = self.connection()?;
        // Actions go with it through `ON DELETE CASCADE`.
        diesel::delete(projects::table.find(id))
            .execute(&mut conn)
            .map_err(StoreError::query)
    }
}

impl Store<Action> for Database {
    fn all(&self) -> StoreResult<Vec<Action>> {
        let mut conn = self.connection()?;
        let rows = actions::table
            .order(actions::id)
            .select(Actions::as_select())
            .load(&mut conn)
            .map_err(StoreError::query)?;
        Ok(rows.into_iter().map(Action::from).collect())
    }

    fn get(&self, id: Id) -> StoreResult<Option<Action>> {
        let mut conn = self.connection()?;
        let row = actions::table
            .find(id)
            .select(Actions::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StoreError::query)?;
        Ok(row.map(Action::from))
    }

    fn insert(&self, draft: ActionDraft) -> StoreResult<Action> {
        let mut conn = self.connection()?;
        let row = diesel::insert_into(actions::table)
            .values(CreateActions::from(draft))
            .returning(Actions::as_returning())
            .get_result(&mut conn)
            .map_err(write_error)?;
        Ok(row.into())
    }

    fn update(&self, id: Id, changes: ActionDraft) -> StoreResult<Option<Action>> {
        let mut conn = self.connection()?;
        let row = diesel::update(actions::table.find(id))
            .set(UpdateActions::from(changes))
            .returning(Actions::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(write_error)?;
        Ok(row.map(Action::from))
    }

    fn remove(&self, id: Id) -> StoreResult<usize> {
        let mut conn = self.connection()?;
        diesel::delete(actions::table.find(id))
            .execute(&mut conn)
            .map_err(StoreError::query)
    }
}

impl ProjectActions for Database {
    fn actions_of(&self, project: Id) -> StoreResult<Vec<Action>> {
        let mut conn = self.connection()?;
        let rows = actions::table
            .filter(actions::project_id.eq(project))
            .order(actions::id)
            .select(Actions::as_select())
            .load(&mut conn)
            .map_err(StoreError::query)?;
        Ok(rows.into_iter().map(Action::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Database {
        let db = Database::connect(IN_MEMORY, 8).unwrap();
        db.migrate().unwrap();
        db
    }

    fn garden() -> ProjectDraft {
        ProjectDraft {
            name: "Garden".into(),
            description: "Spring planting".into(),
            completed: None,
        }
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let db = memory();
        assert!(db.migrate().is_ok());
        assert!(db.ping().is_ok());
    }

    #[test]
    fn test_insert_assigns_ids() {
        let db = memory();
        let first = Store::<Project>::insert(&db, garden()).unwrap();
        let second = Store::<Project>::insert(&db, garden()).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(Store::<Project>::all(&db).unwrap().len(), 2);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let db = memory();
        assert_eq!(Store::<Project>::update(&db, 3, garden()).unwrap(), None);
        assert_eq!(Store::<Project>::remove(&db, 3).unwrap(), 0);
    }

    #[test]
    fn test_removing_project_cascades_to_actions() {
        let db = memory();
        let project = Store::<Project>::insert(&db, garden()).unwrap();
        let action = Store::<Action>::insert(
            &db,
            ActionDraft {
                project_id: project.id,
                description: "dig".into(),
                notes: "north bed".into(),
                completed: false,
            },
        )
        .unwrap();
        assert_eq!(db.actions_of(project.id).unwrap(), vec![action.clone()]);

        assert_eq!(Store::<Project>::remove(&db, project.id).unwrap(), 1);
        assert_eq!(Store::<Action>::get(&db, action.id).unwrap(), None);
    }

    #[test]
    fn test_foreign_key_is_enforced() {
        let db = memory();
        let result = Store::<Action>::insert(
            &db,
            ActionDraft {
                project_id: 99,
                description: "orphan".into(),
                notes: "n".into(),
                completed: true,
            },
        );
        assert!(matches!(result, Err(StoreError::Constraint(_))));
    }

    #[test]
    fn test_update_without_flag_keeps_stored_value() {
        let db = memory();
        let project = Store::<Project>::insert(
            &db,
            ProjectDraft {
                completed: Some(true),
                ..garden()
            },
        )
        .unwrap();

        let updated = Store::<Project>::update(
            &db,
            project.id,
            ProjectDraft {
                name: "Orchard".into(),
                ..garden()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(updated.name, "Orchard");
        assert!(updated.completed);
    }
}
