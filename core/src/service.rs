#![deny(missing_docs)]

//! # Resource Service
//!
//! One function per operation. Each runs its checks in a fixed order and
//! returns a single outcome, so a route never has to decide between two
//! responses:
//!
//! - **read / remove**: existence.
//! - **create**: field presence, decoding, then the project reference.
//! - **update**: existence, field presence, decoding, then the project reference.
//!
//! The functions are generic over the store so they can run against SQLite in
//! production and a fake in tests.

use crate::error::ApiResult;
use crate::model::{Action, Id, Project, Resource};
use crate::policy;
use crate::store::{ProjectActions, Store};
use log::debug;
use serde_json::Value;

/// Lists every resource of kind `R`.
pub fn list<R, S>(store: &S) -> ApiResult<Vec<R>>
where
    R: Resource,
    S: Store<R> + ?Sized,
{
    Ok(store.all()?)
}

/// Fetches one resource.
pub fn read<R, S>(store: &S, id: Id) -> ApiResult<R>
where
    R: Resource,
    S: Store<R> + ?Sized,
{
    policy::found(R::KIND, id, store.get(id)?)
}

/// Validates the payload and stores a new resource.
pub fn create<R, S>(store: &S, payload: &Value) -> ApiResult<R>
where
    R: Resource,
    S: Store<R> + Store<Project> + ?Sized,
{
    let draft = policy::admit::<R>(payload)?;
    ensure_parent::<R, S>(store, &draft)?;
    let created = Store::<R>::insert(store, draft).map_err(policy::write_failed)?;
    debug!("created {} {}", R::KIND, created.id());
    Ok(created)
}

/// Replaces the fields of an existing resource.
pub fn update<R, S>(store: &S, id: Id, payload: &Value) -> ApiResult<R>
where
    R: Resource,
    S: Store<R> + Store<Project> + ?Sized,
{
    policy::found(R::KIND, id, Store::<R>::get(store, id)?)?;
    let draft = policy::admit::<R>(payload)?;
    ensure_parent::<R, S>(store, &draft)?;
    // The row can vanish between the lookup and the write.
    let updated = Store::<R>::update(store, id, draft).map_err(policy::write_failed)?;
    policy::found(R::KIND, id, updated)
}

/// Deletes a resource.
pub fn remove<R, S>(store: &S, id: Id) -> ApiResult<()>
where
    R: Resource,
    S: Store<R> + ?Sized,
{
    policy::removed(R::KIND, id, store.remove(id)?)?;
    debug!("removed {} {}", R::KIND, id);
    Ok(())
}

/// Lists the actions of an existing project.
pub fn project_actions<S>(store: &S, id: Id) -> ApiResult<Vec<Action>>
where
    S: Store<Project> + ProjectActions + ?Sized,
{
    policy::found(Project::KIND, id, Store::<Project>::get(store, id)?)?;
    Ok(store.actions_of(id)?)
}

/// The check and the following write are separate store calls; a project
/// removed in between is caught by the store's foreign key instead.
fn ensure_parent<R, S>(store: &S, draft: &R::Draft) -> ApiResult<()>
where
    R: Resource,
    S: Store<Project> + ?Sized,
{
    match R::parent(draft) {
        Some(project_id) => policy::parent_exists(project_id, store.get(project_id)?),
        None => Ok(()),
    }
}
