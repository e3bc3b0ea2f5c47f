#![deny(missing_docs)]

//! # Store Interface
//!
//! The storage seam. The web crate implements these traits over SQLite; the
//! service layer only ever talks to them.

use crate::error::StoreResult;
use crate::model::{Action, Id, Resource};

/// Data access for one resource collection.
pub trait Store<R: Resource>: Send + Sync {
    /// Every stored resource, in id order.
    fn all(&self) -> StoreResult<Vec<R>>;

    /// The resource with this id, if any.
    fn get(&self, id: Id) -> StoreResult<Option<R>>;

    /// Stores a new resource and returns it with its assigned id.
    fn insert(&self, draft: R::Draft) -> StoreResult<R>;

    /// Replaces the fields of an existing resource.
    ///
    /// Returns `None` when no resource has this id.
    fn update(&self, id: Id, changes: R::Draft) -> StoreResult<Option<R>>;

    /// Deletes a resource and returns the number of rows removed.
    fn remove(&self, id: Id) -> StoreResult<usize>;
}

/// The project -> actions relation.
pub trait ProjectActions: Send + Sync {
    /// Actions whose `project_id` is `project`, in id order.
    fn actions_of(&self, project: Id) -> StoreResult<Vec<Action>>;
}
