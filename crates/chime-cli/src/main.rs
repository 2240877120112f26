//! Demo wiring for the reminder scheduler.
//!
//! Seeds an in-memory task list, runs the scheduler on a short interval,
//! mutates the list while it runs, and prints every event it fired. Set
//! `CHIME_MAILER_URL` to POST real reminder emails instead of recording
//! them, and `RUST_LOG=debug` to watch per-tick reports.

use std::sync::Arc;

use chime_core::domain::Task;
use chime_core::impls::{ConsoleNotifier, HttpMailer, InMemoryTaskSource, RecordingEventSink, RecordingMailer};
use chime_core::ports::{Clock, IdGenerator, ReminderMailer, SystemClock, UlidGenerator};
use chime_core::{SchedulerBuilder, SchedulerConfig};
use log::info;
use tokio::time::{Duration, sleep};

#[tokio::main]
async fn main() {
    env_logger::init();

    let now = SystemClock.now();
    let ids = UlidGenerator::new(SystemClock);
    let tasks = Arc::new(InMemoryTaskSource::new());

    // (A) a session's worth of tasks: one inside the reminder window, one
    // later today, one overdue, one done, one with no deadline
    let expense = Task::new(ids.generate_task_id(), "Submit expense report")
        .unwrap()
        .with_due_date(now + chrono::Duration::minutes(30))
        .with_tags(&["work"]);
    let expense_id = expense.id();
    tasks.insert(expense);

    tasks.insert(
        Task::new(ids.generate_task_id(), "Water the plants")
            .unwrap()
            .with_due_date(now + chrono::Duration::hours(6))
            .with_tags(&["home"]),
    );
    tasks.insert(
        Task::new(ids.generate_task_id(), "Reply to landlord")
            .unwrap()
            .with_due_date(now - chrono::Duration::days(1)),
    );
    let mut done = Task::new(ids.generate_task_id(), "Book dentist").unwrap();
    done.set_completed(true);
    tasks.insert(done);
    tasks.insert(Task::new(ids.generate_task_id(), "Read that article").unwrap());

    // (B) ports: console notifications; recorded emails unless a real
    // endpoint is configured
    let recording_mailer = Arc::new(RecordingMailer::new());
    let mailer: Arc<dyn ReminderMailer> = match std::env::var("CHIME_MAILER_URL") {
        Ok(base) => {
            info!("sending reminder emails to {base}");
            Arc::new(HttpMailer::for_base_url(&base))
        }
        Err(_) => recording_mailer.clone(),
    };
    let events = Arc::new(RecordingEventSink::new());

    let config = SchedulerConfig {
        poll_interval: Duration::from_secs(2),
        ..SchedulerConfig::default_v1()
    };

    let scheduler = Arc::new(
        SchedulerBuilder::new()
            .recipient("demo@example.com")
            .config(config)
            .task_source(tasks.clone())
            .notifier(Arc::new(ConsoleNotifier::granted()))
            .mailer(mailer)
            .event_sink(events.clone())
            .build()
            .expect("scheduler wiring is complete"),
    );

    // (C) run for a few polls, mutating the list in between
    let handle = scheduler.start();
    sleep(Duration::from_secs(3)).await;

    println!("completing \"Submit expense report\"...");
    tasks.complete(&expense_id);
    tasks.insert(
        Task::new(ids.generate_task_id(), "Call the bank")
            .unwrap()
            .with_due_date(SystemClock.now() + chrono::Duration::minutes(45)),
    );
    sleep(Duration::from_secs(3)).await;

    // (D) graceful shutdown, then show what fired
    handle.shutdown_and_join().await;
    // spawned email sends are fire-and-forget; give stragglers a moment
    sleep(Duration::from_millis(100)).await;

    println!("events:");
    for event in events.drain() {
        println!("  {}", serde_json::to_string(&event).expect("event serializes"));
    }
    println!(
        "recorded reminder emails: {}",
        recording_mailer.reminders().len()
    );
}
