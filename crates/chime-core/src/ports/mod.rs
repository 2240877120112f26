//! Ports - 抽象化レイヤー
//!
//! Each trait is a seam to something outside the scheduler's control: the
//! clock, the session-owned task list, the notification surface, the email
//! endpoint, and the event stream. Implementations live in `impls`.

pub mod clock;
pub mod event_sink;
pub mod id_generator;
pub mod mailer;
pub mod notifier;
pub mod task_source;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{EventSink, NoopEventSink};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::mailer::{DigestEmail, MailerError, ReminderEmail, ReminderMailer};
pub use self::notifier::{Notification, Notifier, NotifyError, Permission};
pub use self::task_source::TaskSource;
