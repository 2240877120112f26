//! Reminder scheduler: per-tick evaluation plus the polling loop.
//!
//! One tick re-reads the full task list, reconciles the dispatch state, and
//! fires three kinds of best-effort side effects:
//! - the single-task due-soon reminder (notification + email), exactly once
//!   per entry into the window,
//! - the batched overdue summary notification,
//! - the once-per-day digest email.
//!
//! All side effects are independent: a failing one is logged and the rest
//! proceed, and no failure ever stops the loop.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use log::{debug, error, warn};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::app::config::SchedulerConfig;
use crate::app::digest::{DigestSummary, build_digest};
use crate::app::state::DispatchState;
use crate::app::status::TickReport;
use crate::domain::{ChimeError, ReminderEvent, Task, TaskId, is_due_soon};
use crate::ports::{
    Clock, DigestEmail, EventSink, Notification, Notifier, Permission, ReminderEmail,
    ReminderMailer, TaskSource,
};

/// Fixed title of the single-task reminder notification.
pub const DUE_SOON_TITLE: &str = "Task Due in 1 Hour";

/// Fixed title of the batched overdue notification.
pub const OVERDUE_TITLE: &str = "Overdue Tasks";

/// The scheduler. Construct through `SchedulerBuilder`.
pub struct ReminderScheduler {
    recipient: String,
    config: SchedulerConfig,
    clock: Arc<dyn Clock>,
    tasks: Arc<dyn TaskSource>,
    notifier: Arc<dyn Notifier>,
    mailer: Arc<dyn ReminderMailer>,
    events: Arc<dyn EventSink>,
    state: Mutex<DispatchState>,
}

/// Handle to a running polling loop.
/// - `request_shutdown()` stops taking new ticks; in-flight spawned email
///   sends are left to finish on their own
/// - dropping the handle also stops the loop (the watch sender goes away)
pub struct SchedulerHandle {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn request_shutdown(&self) {
        // ignore send error: the loop may already be gone
        let _ = self.shutdown_tx.send(true);
    }

    pub async fn shutdown_and_join(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.join.await;
    }
}

impl ReminderScheduler {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        recipient: String,
        config: SchedulerConfig,
        clock: Arc<dyn Clock>,
        tasks: Arc<dyn TaskSource>,
        notifier: Arc<dyn Notifier>,
        mailer: Arc<dyn ReminderMailer>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            recipient,
            config,
            clock,
            tasks,
            notifier,
            mailer,
            events,
            state: Mutex::new(DispatchState::new()),
        }
    }

    /// Runs one polling tick. Host pages may call this directly instead of
    /// `start()` when they already own a timer.
    pub async fn tick(&self) -> Result<TickReport, ChimeError> {
        let now = self.clock.now();
        let tasks = self.tasks.snapshot().await?;
        let mut report = TickReport {
            scanned: tasks.len(),
            ..TickReport::default()
        };

        // 判定はロック内、副作用はロック解放後に行う
        let decisions = {
            let mut state = self.state.lock().await;
            state.reconcile(&tasks, now);
            self.decide(&mut state, &tasks, now)
        };

        self.fire(decisions, &mut report).await;
        Ok(report)
    }

    /// Evaluates one tick against the dispatch state. Markers are updated
    /// here, before any side effect runs: a failed best-effort send must not
    /// re-arm the reminder.
    fn decide(
        &self,
        state: &mut DispatchState,
        tasks: &[Task],
        now: DateTime<Utc>,
    ) -> TickDecisions {
        let mut due_soon = Vec::new();
        for task in tasks {
            let Some(due) = task.due_date() else {
                continue;
            };
            if !is_due_soon(Some(due), task.completed(), now, self.config.due_soon_window) {
                continue;
            }
            if state.already_notified(task.id()) {
                continue;
            }
            state.mark_notified(task.id(), due);
            due_soon.push(DueSoonFiring {
                task_id: task.id(),
                title: task.title().to_string(),
                due_date: due,
            });
        }

        let mut overdue = None;
        if self.config.enable_overdue_summary {
            let overdue_tasks: Vec<&Task> = tasks
                .iter()
                .filter(|t| !t.completed() && t.due_date().is_some_and(|d| d < now))
                .collect();
            let ids: BTreeSet<TaskId> = overdue_tasks.iter().map(|t| t.id()).collect();
            if state.overdue_set_changed(&ids) && !overdue_tasks.is_empty() {
                let titles = overdue_tasks
                    .iter()
                    .take(self.config.overdue_summary_limit)
                    .map(|t| t.title().to_string())
                    .collect();
                overdue = Some(OverdueFiring {
                    count: overdue_tasks.len(),
                    titles,
                });
            }
        }

        let mut digest = None;
        if self.config.enable_daily_digest {
            let local = self.config.local_now(now);
            if local.hour() >= self.config.digest_hour && !state.digest_already_sent(local.date())
            {
                state.mark_digest_sent(local.date());
                digest = Some(DigestFiring {
                    date: local.date(),
                    summary: build_digest(tasks, self.config.utc_offset_minutes, local.date()),
                });
            }
        }

        TickDecisions {
            due_soon,
            overdue,
            digest,
        }
    }

    async fn fire(&self, decisions: TickDecisions, report: &mut TickReport) {
        let permission = self.notifier.permission();

        for firing in decisions.due_soon {
            if permission == Permission::Granted {
                let note = Notification::new(DUE_SOON_TITLE, firing.title.clone());
                if let Err(err) = self.notifier.notify(&note).await {
                    warn!("due-soon notification for {} failed: {err}", firing.task_id);
                }
            } else {
                report.skipped_no_permission += 1;
            }

            // メール送信は fire-and-forget。ループは完了を待たない。
            let mailer = Arc::clone(&self.mailer);
            let req = ReminderEmail {
                email: self.recipient.clone(),
                todo_title: firing.title.clone(),
                due_date: firing.due_date,
            };
            tokio::spawn(async move {
                if let Err(err) = mailer.send_reminder(&req).await {
                    warn!("reminder email for {:?} failed: {err}", req.todo_title);
                }
            });
            report.emails_spawned += 1;
            report.due_soon_fired += 1;

            self.events.emit(ReminderEvent::DueSoonFired {
                task_id: firing.task_id,
                title: firing.title,
                due_date: firing.due_date,
            });
        }

        if let Some(firing) = decisions.overdue {
            if permission == Permission::Granted {
                let body = format!(
                    "You have {} overdue task(s): {}",
                    firing.count,
                    firing.titles.join(", ")
                );
                let note = Notification::new(OVERDUE_TITLE, body);
                if let Err(err) = self.notifier.notify(&note).await {
                    warn!("overdue summary notification failed: {err}");
                }
            } else {
                report.skipped_no_permission += 1;
            }
            report.overdue_summarized = firing.count;

            self.events.emit(ReminderEvent::OverdueSummarized {
                count: firing.count,
                titles: firing.titles,
            });
        }

        if let Some(firing) = decisions.digest {
            self.events.emit(ReminderEvent::DigestSent {
                date: firing.date,
                overdue: firing.summary.overdue.len(),
                today: firing.summary.today.len(),
                tomorrow: firing.summary.tomorrow.len(),
            });

            let mailer = Arc::clone(&self.mailer);
            let req = DigestEmail {
                email: self.recipient.clone(),
                date: firing.date,
                overdue: firing.summary.overdue,
                today: firing.summary.today,
                tomorrow: firing.summary.tomorrow,
            };
            tokio::spawn(async move {
                if let Err(err) = mailer.send_digest(&req).await {
                    warn!("daily digest email failed: {err}");
                }
            });
            report.emails_spawned += 1;
            report.digest_fired = true;
        }
    }

    /// Spawns the repeating loop. The first tick runs immediately, then every
    /// `poll_interval`; missed ticks are skipped rather than bursted.
    pub fn start(self: &Arc<Self>) -> SchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let scheduler = Arc::clone(self);
        let poll_interval = scheduler.config.poll_interval;

        let join = tokio::spawn(async move {
            let mut interval = tokio::time::interval(poll_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                // tick 待ちは shutdown と select で競合させる
                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        match scheduler.tick().await {
                            Ok(report) => debug!("tick: {report:?}"),
                            Err(err) => error!("tick failed, will retry next interval: {err}"),
                        }
                    }
                }
            }
        });

        SchedulerHandle { shutdown_tx, join }
    }
}

struct TickDecisions {
    due_soon: Vec<DueSoonFiring>,
    overdue: Option<OverdueFiring>,
    digest: Option<DigestFiring>,
}

struct DueSoonFiring {
    task_id: TaskId,
    title: String,
    due_date: DateTime<Utc>,
}

struct OverdueFiring {
    count: usize,
    titles: Vec<String>,
}

struct DigestFiring {
    date: NaiveDate,
    summary: DigestSummary,
}
