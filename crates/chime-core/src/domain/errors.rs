use thiserror::Error;

/// Domain-level errors surfaced to library callers.
///
/// Side-effect failures (mailer, notifier) are deliberately absent: those are
/// best-effort and handled at the scheduler, never propagated out of a tick.
#[derive(Debug, Error)]
pub enum ChimeError {
    #[error("invalid task: {0}")]
    InvalidTask(String),

    #[error("task source unavailable: {0}")]
    TaskSource(String),
}
