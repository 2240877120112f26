//! Notifier port - local notification channel.
//!
//! The actual notification surface (browser/OS) is an external capability;
//! this port models the two things the scheduler needs from it: whether the
//! user granted permission, and a best-effort way to show one notification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission state of the notification channel, granted at most once per
/// session by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Granted,
    Denied,
    /// Not yet asked. Treated like `Denied` by the scheduler: skip silently.
    Default,
}

/// One local notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification dispatch failed: {0}")]
    Dispatch(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    fn permission(&self) -> Permission;

    /// Shows one notification. Callers treat failures as best-effort: they
    /// log and move on, and must not call this without a `Granted` check.
    async fn notify(&self, note: &Notification) -> Result<(), NotifyError>;
}
