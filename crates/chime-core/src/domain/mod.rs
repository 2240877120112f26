//! Domain model (ids, tasks, due-status policy, events, errors).

pub mod due;
pub mod errors;
pub mod events;
pub mod ids;
pub mod task;

pub use self::due::{DueStatus, classify, is_due_soon};
pub use self::errors::ChimeError;
pub use self::events::ReminderEvent;
pub use self::ids::{Id, IdMarker, TaskId};
pub use self::task::{Task, TaskRecord};
