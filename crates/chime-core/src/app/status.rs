//! Per-tick counters for observability.

use serde::{Deserialize, Serialize};

/// What one polling tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tasks seen in the snapshot.
    pub scanned: usize,
    /// Tasks that entered the due-soon window this tick.
    pub due_soon_fired: usize,
    /// Emails handed to the mailer (fire-and-forget; delivery not awaited).
    pub emails_spawned: usize,
    /// Notifications skipped because permission was not granted.
    pub skipped_no_permission: usize,
    /// Overdue tasks covered by the batched summary, 0 when it did not fire.
    pub overdue_summarized: usize,
    /// Whether the daily digest fired this tick.
    pub digest_fired: bool,
}
