//! Task model and boundary normalization.
//!
//! The external store owns tasks; this crate only observes them. `TaskRecord`
//! is the loosely-typed wire shape as fetched, `Task` is the validated form
//! everything downstream (classifier, scheduler) consumes. Normalization
//! happens exactly once, in [`Task::from_record`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ChimeError;
use super::ids::TaskId;

/// Wire shape of a task as the external store returns it.
///
/// `due_date` is whatever string the store happened to hold; parse failures
/// degrade to "no deadline" rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A validated task.
///
/// Invariants:
/// - `title` is non-empty after trimming.
/// - `tags` are trimmed, lowercased, deduplicated (insertion order is
///   irrelevant for classification, so a sorted set is fine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
    due_date: Option<DateTime<Utc>>,
    tags: BTreeSet<String>,
}

impl Task {
    /// Creates a task with no deadline and no tags.
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, ChimeError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ChimeError::InvalidTask("title must not be blank".into()));
        }
        Ok(Self {
            id,
            title: trimmed.to_string(),
            completed: false,
            due_date: None,
            tags: BTreeSet::new(),
        })
    }

    /// Normalizes one record fetched from the store.
    ///
    /// - blank title → `ChimeError::InvalidTask`
    /// - unparseable `due_date` → `None` (treated as "no deadline")
    /// - tags trimmed, lowercased, deduplicated
    pub fn from_record(record: TaskRecord) -> Result<Self, ChimeError> {
        let mut task = Self::new(record.id, record.title)?;
        task.completed = record.completed;
        task.due_date = record.due_date.as_deref().and_then(parse_due_date);
        task.tags = normalize_tags(&record.tags);
        Ok(task)
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        match normalize_tag(tag) {
            Some(t) => self.tags.contains(&t),
            None => false,
        }
    }

    /// Builder-style due date, mostly for demos and tests.
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Builder-style tags; normalized like [`Task::from_record`].
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        let owned: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        self.tags = normalize_tags(&owned);
        self
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn set_due_date(&mut self, due: Option<DateTime<Utc>>) {
        self.due_date = due;
    }
}

fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            log::warn!("unparseable due_date {raw:?} ({err}); treating as no deadline");
            None
        }
    }
}

fn normalize_tag(tag: &str) -> Option<String> {
    let t = tag.trim().to_lowercase();
    if t.is_empty() { None } else { Some(t) }
}

fn normalize_tags(tags: &[String]) -> BTreeSet<String> {
    tags.iter().filter_map(|t| normalize_tag(t)).collect()
}
