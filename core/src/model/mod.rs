#![deny(missing_docs)]

//! # Domain Models
//!
//! The two resource kinds served by the tracker and the [`Resource`] trait that
//! lets the policy and service layers treat them uniformly.

use crate::error::ApiResult;
use derive_more::Display;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Project records.
pub mod project;

/// Action records.
pub mod action;

pub use action::{Action, ActionDraft};
pub use project::{Project, ProjectDraft};

/// Store-assigned identifier shared by every resource kind.
pub type Id = i32;

/// The resource kinds exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Kind {
    /// A project.
    #[display("Project")]
    Project,
    /// An action belonging to a project.
    #[display("Action")]
    Action,
}

/// A resource collection served by the tracker.
///
/// `Draft` is the typed form of a submitted payload. The same draft is used for
/// creation and for update, so both operations share one required-field set.
pub trait Resource: Serialize + Send + Sized + 'static {
    /// Which kind this is, used in messages.
    const KIND: Kind;

    /// Fields that must be present in every submitted payload, in the order
    /// they are reported when missing.
    const REQUIRED: &'static [&'static str];

    /// Decoded payload accepted by `insert` and `update`.
    type Draft: DeserializeOwned + Send + 'static;

    /// The store-assigned id.
    fn id(&self) -> Id;

    /// Content rules that go beyond presence (e.g. no blank text).
    fn check(_draft: &Self::Draft) -> ApiResult<()> {
        Ok(())
    }

    /// The project a draft points at, if the kind references one.
    fn parent(_draft: &Self::Draft) -> Option<Id> {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    fn into_bool<E: serde::de::Error>(self) -> Result<bool, E> {
        match self {
            Flag::Bool(b) => Ok(b),
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(n) => Err(E::custom(format!(
                "expected a boolean or 0/1, found {}",
                n
            ))),
        }
    }
}

/// Accepts `true`/`false` as well as the integers `1`/`0`.
pub(crate) fn boolean_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Flag::deserialize(deserializer)?.into_bool()
}

/// Like [`boolean_like`], with `null` read as `None`.
pub(crate) fn optional_boolean_like<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Flag>::deserialize(deserializer)?
        .map(Flag::into_bool)
        .transpose()
}
