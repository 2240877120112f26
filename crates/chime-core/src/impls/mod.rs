//! Port implementations: in-memory/recording ones for development and tests,
//! plus the HTTP mailer and the log-backed notifier for real wiring.

pub mod console_notifier;
pub mod http_mailer;
pub mod inmem_tasks;
pub mod recording;

pub use self::console_notifier::ConsoleNotifier;
pub use self::http_mailer::HttpMailer;
pub use self::inmem_tasks::InMemoryTaskSource;
pub use self::recording::{RecordingEventSink, RecordingMailer, RecordingNotifier};
