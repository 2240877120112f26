//! InMemoryTaskSource - the session-owned task list, in memory.
//!
//! Snapshot order is insertion order, so summaries that name "the first N"
//! titles stay deterministic. One writer (the owning session) mutates it;
//! the scheduler only reads snapshots.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{ChimeError, Task, TaskId};
use crate::ports::TaskSource;

#[derive(Debug, Default)]
pub struct InMemoryTaskSource {
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, task: Task) {
        self.tasks.lock().expect("task list lock poisoned").push(task);
    }

    /// Marks a task completed; false when the id is unknown.
    pub fn complete(&self, id: &TaskId) -> bool {
        self.update(id, |task| task.set_completed(true))
    }

    /// Moves (or clears) a task's due date; false when the id is unknown.
    pub fn reschedule(&self, id: &TaskId, due: Option<DateTime<Utc>>) -> bool {
        self.update(id, |task| task.set_due_date(due))
    }

    pub fn remove(&self, id: &TaskId) -> bool {
        let mut tasks = self.tasks.lock().expect("task list lock poisoned");
        let before = tasks.len();
        tasks.retain(|task| task.id() != *id);
        tasks.len() != before
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().expect("task list lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tasks carrying the given tag (normalized like the task boundary).
    pub fn tagged(&self, tag: &str) -> Vec<Task> {
        self.tasks
            .lock()
            .expect("task list lock poisoned")
            .iter()
            .filter(|task| task.has_tag(tag))
            .cloned()
            .collect()
    }

    fn update(&self, id: &TaskId, apply: impl FnOnce(&mut Task)) -> bool {
        let mut tasks = self.tasks.lock().expect("task list lock poisoned");
        match tasks.iter_mut().find(|task| task.id() == *id) {
            Some(task) => {
                apply(task);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn snapshot(&self) -> Result<Vec<Task>, ChimeError> {
        Ok(self.tasks.lock().expect("task list lock poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ulid::Ulid;

    fn task(title: &str) -> Task {
        Task::new(TaskId::from_ulid(Ulid::new()), title).unwrap()
    }

    #[tokio::test]
    async fn snapshot_preserves_insertion_order() {
        let source = InMemoryTaskSource::new();
        source.insert(task("first"));
        source.insert(task("second"));

        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot[0].title(), "first");
        assert_eq!(snapshot[1].title(), "second");
    }

    #[tokio::test]
    async fn mutators_report_unknown_ids() {
        let source = InMemoryTaskSource::new();
        let t = task("a");
        let id = t.id();
        let stranger = TaskId::from_ulid(Ulid::new());
        source.insert(t);

        assert!(source.complete(&id));
        assert!(!source.complete(&stranger));
        assert!(!source.remove(&stranger));
        assert!(source.remove(&id));
        assert!(source.is_empty());
    }

    #[tokio::test]
    async fn reschedule_updates_the_snapshot() {
        let source = InMemoryTaskSource::new();
        let t = task("a");
        let id = t.id();
        source.insert(t);

        let due = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert!(source.reschedule(&id, Some(due)));

        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot[0].due_date(), Some(due));
    }

    #[test]
    fn tagged_matches_normalized_tags() {
        let source = InMemoryTaskSource::new();
        source.insert(task("a").with_tags(&["Work", "urgent"]));
        source.insert(task("b").with_tags(&["home"]));

        let work = source.tagged("WORK");
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title(), "a");
    }
}
