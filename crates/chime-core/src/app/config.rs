//! Scheduler tunables.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Tunables for one scheduler instance.
///
/// `default_v1()` carries the recommended values: a 5-minute poll, a 1-hour
/// due-soon window, a 3-title overdue summary, and a 09:00 digest.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// How often the task list is re-scanned.
    pub poll_interval: Duration,

    /// Lookahead for the single-task reminder, `(now, now + window]`.
    pub due_soon_window: chrono::Duration,

    /// Max task titles named in the batched overdue notification.
    pub overdue_summary_limit: usize,

    /// Local hour (0-23) at or after which the daily digest may fire.
    pub digest_hour: u32,

    /// Offset applied to UTC to derive the local calendar day.
    pub utc_offset_minutes: i32,

    pub enable_overdue_summary: bool,
    pub enable_daily_digest: bool,
}

impl SchedulerConfig {
    pub fn default_v1() -> Self {
        Self {
            poll_interval: Duration::from_secs(5 * 60),
            due_soon_window: chrono::Duration::hours(1),
            overdue_summary_limit: 3,
            digest_hour: 9,
            utc_offset_minutes: 0,
            enable_overdue_summary: true,
            enable_daily_digest: true,
        }
    }

    /// Current local wall time, naive: UTC shifted by the configured offset.
    pub fn local_now(&self, now: DateTime<Utc>) -> NaiveDateTime {
        (now + chrono::Duration::minutes(i64::from(self.utc_offset_minutes))).naive_utc()
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}
