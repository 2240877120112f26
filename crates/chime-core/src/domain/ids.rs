//! Domain identifiers (strongly-typed IDs).
//!
//! Task identifiers are opaque to this crate: the task list is owned by an
//! external store and we only observe it. ULID keeps locally-generated ids
//! (demos, tests) sortable by creation time without coordination.
//!
//! `Id<T>` は PhantomData のマーカー型で型安全性を提供します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for identifier kinds.
///
/// Provides the prefix used by `Display` (e.g. "task-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic identifier over a ULID.
///
/// `T` is a zero-sized marker so distinct id kinds cannot be mixed up at
/// compile time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Marker for task identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskTag {}

impl IdMarker for TaskTag {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Identifier of a Task (the unit the classifier and scheduler observe).
pub type TaskId = Id<TaskTag>;
