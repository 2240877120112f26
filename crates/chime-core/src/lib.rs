//! chime-core
//!
//! Due-status classification and reminder scheduling for a personal task
//! list. The task store itself is external; this crate owns the policy:
//! which bucket a task falls into, when the one-hour reminder fires, and
//! how firings are de-duplicated across polling ticks.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, due, events, errors）
//! - **ports**: 抽象化レイヤー（Clock, TaskSource, Notifier, ReminderMailer, など）
//! - **app**: アプリケーションロジック（builder, scheduler, dispatch state, config）
//! - **impls**: 実装（InMemoryTaskSource, HttpMailer, recording doubles）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{
    BuildError, DUE_SOON_TITLE, OVERDUE_TITLE, ReminderScheduler, SchedulerBuilder,
    SchedulerConfig, SchedulerHandle, TickReport,
};
pub use domain::{ChimeError, DueStatus, ReminderEvent, Task, TaskId, TaskRecord, classify};
