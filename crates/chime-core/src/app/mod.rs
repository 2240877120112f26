//! Application layer: the scheduler built on top of the ports.
//!
//! - **SchedulerBuilder**: wiring + fail-fast validation
//! - **ReminderScheduler**: per-tick evaluation and the polling loop
//! - **DispatchState**: duplicate-suppression memory
//! - **SchedulerConfig / TickReport**: tunables and per-tick counters

pub mod builder;
pub mod config;
pub mod digest;
pub mod scheduler;
pub mod state;
pub mod status;

pub use self::builder::{BuildError, SchedulerBuilder};
pub use self::config::SchedulerConfig;
pub use self::digest::{DigestSummary, build_digest};
pub use self::scheduler::{
    DUE_SOON_TITLE, OVERDUE_TITLE, ReminderScheduler, SchedulerHandle,
};
pub use self::state::DispatchState;
pub use self::status::TickReport;
