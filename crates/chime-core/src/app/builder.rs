//! SchedulerBuilder - wiring and fail-fast validation.
//!
//! The builder is the only way to construct a `ReminderScheduler`. Missing
//! wiring is a `BuildError` at build time, not a panic at the first tick.

use std::sync::Arc;

use crate::app::config::SchedulerConfig;
use crate::app::scheduler::ReminderScheduler;
use crate::ports::{
    Clock, EventSink, NoopEventSink, Notifier, ReminderMailer, SystemClock, TaskSource,
};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("recipient email is required but was not set")]
    MissingRecipient,

    #[error("recipient email must not be blank")]
    BlankRecipient,

    #[error("missing port: {0}. Wire it before calling build().")]
    MissingPort(&'static str),
}

/// Builder for [`ReminderScheduler`].
///
/// Clock and event sink default to `SystemClock`/`NoopEventSink`; the task
/// source, notifier, and mailer must be supplied, as must the recipient.
#[derive(Default)]
pub struct SchedulerBuilder {
    recipient: Option<String>,
    config: SchedulerConfig,
    clock: Option<Arc<dyn Clock>>,
    tasks: Option<Arc<dyn TaskSource>>,
    notifier: Option<Arc<dyn Notifier>>,
    mailer: Option<Arc<dyn ReminderMailer>>,
    events: Option<Arc<dyn EventSink>>,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Email address reminders are sent to (the session user).
    pub fn recipient(mut self, email: impl Into<String>) -> Self {
        self.recipient = Some(email.into());
        self
    }

    pub fn config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn task_source(mut self, tasks: Arc<dyn TaskSource>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn ReminderMailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> Result<ReminderScheduler, BuildError> {
        let recipient = self.recipient.ok_or(BuildError::MissingRecipient)?;
        if recipient.trim().is_empty() {
            return Err(BuildError::BlankRecipient);
        }

        let tasks = self.tasks.ok_or(BuildError::MissingPort("task_source"))?;
        let notifier = self.notifier.ok_or(BuildError::MissingPort("notifier"))?;
        let mailer = self.mailer.ok_or(BuildError::MissingPort("mailer"))?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let events = self.events.unwrap_or_else(|| Arc::new(NoopEventSink));

        Ok(ReminderScheduler::new(
            recipient, self.config, clock, tasks, notifier, mailer, events,
        ))
    }
}
