//! ReminderMailer port - outbound email channel.
//!
//! Two requests exist: the single-task due-soon reminder and the once-a-day
//! digest. Both are best-effort; failures are reported as `MailerError` and
//! the caller logs them without retrying.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire body of the due-soon reminder request:
/// `{"email": ..., "todoTitle": ..., "dueDate": "<RFC 3339>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEmail {
    pub email: String,
    pub todo_title: String,
    pub due_date: DateTime<Utc>,
}

/// Wire body of the daily digest request: title lists per bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestEmail {
    pub email: String,
    pub date: NaiveDate,
    pub overdue: Vec<String>,
    pub today: Vec<String>,
    pub tomorrow: Vec<String>,
}

#[derive(Debug, Error)]
pub enum MailerError {
    /// Could not reach the endpoint at all.
    #[error("mail transport failed: {0}")]
    Transport(String),

    /// Endpoint answered with a non-2xx status. Logged, never retried.
    #[error("mail endpoint returned status {0}")]
    Status(u16),

    /// Endpoint answered 2xx but reported `success: false`.
    #[error("mail endpoint rejected the request")]
    Rejected,
}

#[async_trait]
pub trait ReminderMailer: Send + Sync {
    async fn send_reminder(&self, req: &ReminderEmail) -> Result<(), MailerError>;

    async fn send_digest(&self, req: &DigestEmail) -> Result<(), MailerError>;
}
