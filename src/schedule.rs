//! Cancellable scheduled tasks.
//!
//! Browser timers (`setInterval`, `setTimeout`) are modelled as tasks that a
//! [`Scheduler`] hands out as opaque [`TaskId`]s. Whoever owns a task keeps
//! its id and cancels it by id; a fired task is reported back to the owner as
//! the id alone, so stale ids from cancelled tasks can be recognised and
//! dropped.
//!
//! [`VirtualClock`] is a deterministic scheduler whose time only moves when
//! the driver calls [`VirtualClock::pop_due`] or [`VirtualClock::advance`].
//! It is what the simulator and tests run on.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Source of repeating and one-shot timers.
pub trait Scheduler {
    /// Fire every `period` until cancelled. The first firing is one period
    /// from now.
    fn schedule_repeating(&mut self, period: Duration) -> TaskId;

    /// Fire once after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TaskId;

    /// Cancel a task. Unknown or already-finished ids are ignored.
    fn cancel(&mut self, id: TaskId);
}

#[derive(Debug, Clone)]
struct Task {
    due: Duration,
    period: Option<Duration>,
}

/// Deterministic scheduler driven by explicit time advancement.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TaskId, Task>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still outstanding.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Fire the earliest task due at or before `deadline`, moving the clock
    /// to its due time. Returns `None` once nothing else is due.
    ///
    /// Ties are broken by creation order. Repeating tasks are re-armed one
    /// period after the time they fired. Callers dispatch each id before
    /// popping the next, so handlers that cancel or reschedule are honoured
    /// for the remainder of the window.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TaskId> {
        let (id, due) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= deadline)
            .min_by_key(|(id, task)| (task.due, **id))
            .map(|(id, task)| (*id, task.due))?;

        self.now = self.now.max(due);
        let rearm = self.tasks.get(&id).and_then(|task| task.period);
        match rearm {
            Some(period) => {
                if let Some(task) = self.tasks.get_mut(&id) {
                    task.due = due + period;
                }
            }
            None => {
                self.tasks.remove(&id);
            }
        }
        Some(id)
    }

    /// Advance the clock by `by`, returning every firing in order.
    ///
    /// Convenience for drivers that do not react to firings; use
    /// [`pop_due`](Self::pop_due) when handlers touch the scheduler.
    pub fn advance(&mut self, by: Duration) -> Vec<TaskId> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.pop_due(deadline) {
            fired.push(id);
        }
        self.now = deadline;
        fired
    }

    /// Move the clock to `deadline` without firing anything. Used after a
    /// [`pop_due`](Self::pop_due) loop has drained the window.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(id, Task { due, period });
        id
    }
}

impl Scheduler for VirtualClock {
    fn schedule_repeating(&mut self, period: Duration) -> TaskId {
        // A zero period would fire forever inside one window.
        let period = period.max(Duration::from_millis(1));
        self.insert(self.now + period, Some(period))
    }

    fn schedule_once(&mut self, delay: Duration) -> TaskId {
        self.insert(self.now + delay, None)
    }

    fn cancel(&mut self, id: TaskId) {
        self.tasks.remove(&id);
    }
}
