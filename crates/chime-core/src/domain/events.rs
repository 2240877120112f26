//! Domain events emitted by the scheduler.
//!
//! Hosts and tests observe reminder firings through these instead of
//! scraping logs. Delivery is through the `EventSink` port.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReminderEvent {
    /// A task entered the due-soon window and its reminder fired.
    DueSoonFired {
        task_id: TaskId,
        title: String,
        due_date: DateTime<Utc>,
    },
    /// The batched overdue notification fired.
    OverdueSummarized { count: usize, titles: Vec<String> },
    /// The once-per-day digest email was dispatched.
    DigestSent {
        date: NaiveDate,
        overdue: usize,
        today: usize,
        tomorrow: usize,
    },
}
