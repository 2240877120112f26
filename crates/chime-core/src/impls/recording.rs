//! Recording doubles for the side-effect ports.
//!
//! Used by tests and the CLI demo: they capture everything the scheduler
//! fires so callers can assert on (or print) it. The failure toggles let
//! tests exercise the best-effort paths.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::domain::ReminderEvent;
use crate::ports::{
    DigestEmail, EventSink, MailerError, Notification, Notifier, NotifyError, Permission,
    ReminderEmail, ReminderMailer,
};

/// Notifier double: records notifications, permission is settable.
#[derive(Debug)]
pub struct RecordingNotifier {
    permission: Mutex<Permission>,
    sent: Mutex<Vec<Notification>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn granted() -> Self {
        Self::with_permission(Permission::Granted)
    }

    pub fn with_permission(permission: Permission) -> Self {
        Self {
            permission: Mutex::new(permission),
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_permission(&self, permission: Permission) {
        *self.permission.lock().expect("notifier lock poisoned") = permission;
    }

    /// Makes every subsequent `notify` fail.
    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("notifier lock poisoned").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn permission(&self) -> Permission {
        *self.permission.lock().expect("notifier lock poisoned")
    }

    async fn notify(&self, note: &Notification) -> Result<(), NotifyError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(NotifyError::Dispatch("recording notifier set to fail".into()));
        }
        self.sent
            .lock()
            .expect("notifier lock poisoned")
            .push(note.clone());
        Ok(())
    }
}

/// Mailer double: records reminder and digest requests.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    reminders: Mutex<Vec<ReminderEmail>>,
    digests: Mutex<Vec<DigestEmail>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail with a transport error.
    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    pub fn reminders(&self) -> Vec<ReminderEmail> {
        self.reminders.lock().expect("mailer lock poisoned").clone()
    }

    pub fn digests(&self) -> Vec<DigestEmail> {
        self.digests.lock().expect("mailer lock poisoned").clone()
    }
}

#[async_trait]
impl ReminderMailer for RecordingMailer {
    async fn send_reminder(&self, req: &ReminderEmail) -> Result<(), MailerError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(MailerError::Transport("recording mailer set to fail".into()));
        }
        self.reminders
            .lock()
            .expect("mailer lock poisoned")
            .push(req.clone());
        Ok(())
    }

    async fn send_digest(&self, req: &DigestEmail) -> Result<(), MailerError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(MailerError::Transport("recording mailer set to fail".into()));
        }
        self.digests
            .lock()
            .expect("mailer lock poisoned")
            .push(req.clone());
        Ok(())
    }
}

/// Event sink double.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<ReminderEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReminderEvent> {
        self.events.lock().expect("event sink lock poisoned").clone()
    }

    /// Returns and clears the captured events.
    pub fn drain(&self) -> Vec<ReminderEvent> {
        std::mem::take(&mut *self.events.lock().expect("event sink lock poisoned"))
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: ReminderEvent) {
        self.events
            .lock()
            .expect("event sink lock poisoned")
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failing_mailer_returns_transport_errors() {
        let mailer = RecordingMailer::new();
        mailer.fail_all(true);

        let req = ReminderEmail {
            email: "user@example.com".into(),
            todo_title: "A".into(),
            due_date: chrono::Utc::now(),
        };
        assert!(matches!(
            mailer.send_reminder(&req).await,
            Err(MailerError::Transport(_))
        ));
        assert!(mailer.reminders().is_empty());
    }

    #[tokio::test]
    async fn notifier_records_in_order() {
        let notifier = RecordingNotifier::granted();
        notifier
            .notify(&Notification::new("t1", "b1").with_icon("/favicon.ico"))
            .await
            .unwrap();
        notifier
            .notify(&Notification::new("t2", "b2"))
            .await
            .unwrap();

        let sent = notifier.sent();
        assert_eq!(sent[0].title, "t1");
        assert_eq!(sent[0].icon.as_deref(), Some("/favicon.ico"));
        assert_eq!(sent[1].title, "t2");
        assert_eq!(sent[1].icon, None);
    }
}
