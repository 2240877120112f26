//! Due-status classification policy.
//!
//! One policy, applied uniformly: hour granularity. A task is `Overdue` once
//! its due instant has passed, `Today` within the next 24 hours, `Upcoming`
//! beyond that. The due-soon window used for reminders is `(now, now + w]`:
//! strictly after now, inclusive at the upper bound.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket a task falls into relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// No deadline; no visual or notification treatment.
    None,
    Overdue,
    Today,
    Upcoming,
}

impl DueStatus {
    /// Badge text for UI callers, `None` when nothing should render.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Overdue => Some("Overdue"),
            Self::Today => Some("Today"),
            Self::Upcoming => Some("Upcoming"),
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
        };
        f.write_str(s)
    }
}

/// Classifies one task. Pure and total: every input maps to exactly one
/// bucket, and repeated calls with identical inputs agree.
///
/// `completed` does not change the bucket: completed tasks keep it for
/// display purposes. Exempting them from reminders is the scheduler's job,
/// not the classifier's.
pub fn classify(
    due_date: Option<DateTime<Utc>>,
    completed: bool,
    now: DateTime<Utc>,
) -> DueStatus {
    let _ = completed;
    let Some(due) = due_date else {
        return DueStatus::None;
    };

    let delta = due.signed_duration_since(now);
    if delta < Duration::zero() {
        DueStatus::Overdue
    } else if delta <= Duration::hours(24) {
        DueStatus::Today
    } else {
        DueStatus::Upcoming
    }
}

/// Whether a task sits inside the due-soon window `(now, now + window]`.
///
/// Completed tasks and tasks without a deadline are never eligible.
pub fn is_due_soon(
    due_date: Option<DateTime<Utc>>,
    completed: bool,
    now: DateTime<Utc>,
    window: Duration,
) -> bool {
    if completed {
        return false;
    }
    let Some(due) = due_date else {
        return false;
    };
    due > now && due.signed_duration_since(now) <= window
}
