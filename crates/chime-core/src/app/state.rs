//! Dispatch state: what already fired, so polling does not re-fire it.
//!
//! Explicitly owned by one scheduler instance and handed in at construction,
//! never a module-level singleton. Tests build a fresh scheduler with fresh
//! state and get full isolation.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Task, TaskId};

/// Per-scheduler memory of fired side effects.
///
/// - `notified` maps a task to the due date its reminder fired for; the entry
///   suppresses re-firing while the task stays inside the same due window.
/// - `last_overdue` is the id set the previous overdue summary covered.
/// - `digest_sent_on` keys the daily digest by local calendar date.
#[derive(Debug, Default)]
pub struct DispatchState {
    notified: HashMap<TaskId, DateTime<Utc>>,
    last_overdue: BTreeSet<TaskId>,
    digest_sent_on: Option<NaiveDate>,
}

impl DispatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops markers that no longer apply: the task vanished, was completed,
    /// was rescheduled, or its recorded due date has already passed (the
    /// window fully elapsed, so a later reschedule may fire again).
    pub fn reconcile(&mut self, tasks: &[Task], now: DateTime<Utc>) {
        let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|t| (t.id(), t)).collect();

        self.notified.retain(|id, fired_due| match by_id.get(id) {
            None => false,
            Some(task) if task.completed() => false,
            Some(task) if task.due_date() != Some(*fired_due) => false,
            Some(_) if *fired_due <= now => false,
            Some(_) => true,
        });
    }

    pub fn already_notified(&self, id: TaskId) -> bool {
        self.notified.contains_key(&id)
    }

    pub fn mark_notified(&mut self, id: TaskId, due: DateTime<Utc>) {
        self.notified.insert(id, due);
    }

    /// Replaces the remembered overdue set; true when it differs from the
    /// previous one (i.e. the summary should be re-evaluated).
    pub fn overdue_set_changed(&mut self, current: &BTreeSet<TaskId>) -> bool {
        if *current == self.last_overdue {
            return false;
        }
        self.last_overdue = current.clone();
        true
    }

    pub fn digest_already_sent(&self, date: NaiveDate) -> bool {
        self.digest_sent_on == Some(date)
    }

    pub fn mark_digest_sent(&mut self, date: NaiveDate) {
        self.digest_sent_on = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use ulid::Ulid;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn task(due: Option<DateTime<Utc>>) -> Task {
        let mut t = Task::new(TaskId::from_ulid(Ulid::new()), "t").unwrap();
        t.set_due_date(due);
        t
    }

    #[test]
    fn marker_survives_while_the_task_is_unchanged() {
        let t = task(Some(noon() + Duration::minutes(30)));
        let mut state = DispatchState::new();
        state.mark_notified(t.id(), noon() + Duration::minutes(30));

        state.reconcile(std::slice::from_ref(&t), noon());
        assert!(state.already_notified(t.id()));
    }

    #[test]
    fn marker_is_dropped_when_the_task_vanishes() {
        let t = task(Some(noon() + Duration::minutes(30)));
        let mut state = DispatchState::new();
        state.mark_notified(t.id(), noon() + Duration::minutes(30));

        state.reconcile(&[], noon());
        assert!(!state.already_notified(t.id()));
    }

    #[test]
    fn marker_is_dropped_on_completion() {
        let mut t = task(Some(noon() + Duration::minutes(30)));
        let mut state = DispatchState::new();
        state.mark_notified(t.id(), noon() + Duration::minutes(30));

        t.set_completed(true);
        state.reconcile(std::slice::from_ref(&t), noon());
        assert!(!state.already_notified(t.id()));
    }

    #[test]
    fn marker_is_dropped_when_the_due_date_moves() {
        let mut t = task(Some(noon() + Duration::minutes(30)));
        let mut state = DispatchState::new();
        state.mark_notified(t.id(), noon() + Duration::minutes(30));

        t.set_due_date(Some(noon() + Duration::minutes(45)));
        state.reconcile(std::slice::from_ref(&t), noon());
        assert!(!state.already_notified(t.id()));
    }

    #[test]
    fn marker_is_pruned_once_the_window_elapses() {
        let t = task(Some(noon() - Duration::minutes(1)));
        let mut state = DispatchState::new();
        state.mark_notified(t.id(), noon() - Duration::minutes(1));

        state.reconcile(std::slice::from_ref(&t), noon());
        assert!(!state.already_notified(t.id()));
    }

    #[test]
    fn overdue_set_changes_are_detected_once() {
        let mut state = DispatchState::new();
        let a = TaskId::from_ulid(Ulid::new());
        let b = TaskId::from_ulid(Ulid::new());

        let set: BTreeSet<TaskId> = [a].into_iter().collect();
        assert!(state.overdue_set_changed(&set));
        assert!(!state.overdue_set_changed(&set));

        let grown: BTreeSet<TaskId> = [a, b].into_iter().collect();
        assert!(state.overdue_set_changed(&grown));
    }

    #[test]
    fn digest_flag_is_keyed_by_date() {
        let mut state = DispatchState::new();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert!(!state.digest_already_sent(monday));
        state.mark_digest_sent(monday);
        assert!(state.digest_already_sent(monday));
        assert!(!state.digest_already_sent(tuesday));
    }
}
