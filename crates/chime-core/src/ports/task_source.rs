//! TaskSource port - the session-owned task list.
//!
//! The scheduler re-reads the full list on every tick and derives everything
//! from the snapshot; it never caches tasks between ticks. The list itself is
//! owned by the consuming session (page, CLI, test) and mutated only there.

use async_trait::async_trait;

use crate::domain::{ChimeError, Task};

#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns the current full task list.
    async fn snapshot(&self) -> Result<Vec<Task>, ChimeError>;
}
