//! ConsoleNotifier - log-backed notifier for headless hosts.
//!
//! Stands in for the real notification surface when there is none (CLI,
//! server-side demos). Permission is fixed at construction, mirroring the
//! once-per-session grant of the real channel.

use async_trait::async_trait;
use log::info;

use crate::ports::{Notification, Notifier, NotifyError, Permission};

#[derive(Debug)]
pub struct ConsoleNotifier {
    permission: Permission,
}

impl ConsoleNotifier {
    pub fn granted() -> Self {
        Self {
            permission: Permission::Granted,
        }
    }

    pub fn with_permission(permission: Permission) -> Self {
        Self { permission }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    async fn notify(&self, note: &Notification) -> Result<(), NotifyError> {
        info!("[notification] {}: {}", note.title, note.body);
        Ok(())
    }
}
