//! Daily digest bucketing.
//!
//! The digest is a calendar feature, so unlike the hour-granularity
//! classifier it compares local calendar days: overdue = an earlier day,
//! today = the same day, tomorrow = the next day. Completed and undated
//! tasks are excluded.

use chrono::{Duration, NaiveDate};

use crate::domain::Task;

/// Title lists per digest bucket, in task-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestSummary {
    pub overdue: Vec<String>,
    pub today: Vec<String>,
    pub tomorrow: Vec<String>,
}

impl DigestSummary {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.today.is_empty() && self.tomorrow.is_empty()
    }
}

/// Buckets the task list for the digest dated `local_today`.
pub fn build_digest(
    tasks: &[Task],
    utc_offset_minutes: i32,
    local_today: NaiveDate,
) -> DigestSummary {
    let mut summary = DigestSummary::default();
    let tomorrow = local_today + Duration::days(1);

    for task in tasks {
        if task.completed() {
            continue;
        }
        let Some(due) = task.due_date() else {
            continue;
        };

        let local_due = (due + Duration::minutes(i64::from(utc_offset_minutes))).date_naive();
        if local_due < local_today {
            summary.overdue.push(task.title().to_string());
        } else if local_due == local_today {
            summary.today.push(task.title().to_string());
        } else if local_due == tomorrow {
            summary.tomorrow.push(task.title().to_string());
        }
    }

    summary
}
