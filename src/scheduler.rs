//! Virtual-clock task scheduler.
//!
//! Every delayed step of the animation (a typing tick, one scramble flip,
//! a held phrase, a spinner frame) is an entry in this queue. Entries are
//! identified by a [`TaskId`] that can be cancelled at any time; a cancelled
//! entry is dropped lazily when it reaches the front of the queue.
//!
//! The scheduler never sleeps. Callers move its clock forward with
//! [`Scheduler::pop_due`] (real-time drivers) or [`Scheduler::pop_next`]
//! (exports and tests that jump from deadline to deadline).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Entry<W> {
    due: Duration,
    id: TaskId,
    wake: W,
}

// Ordered by deadline, then by scheduling order (ids are monotonic).
impl<W> PartialEq for Entry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<W> Eq for Entry<W> {}

impl<W> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.id.cmp(&other.id))
    }
}

/// Single-threaded timer queue over a virtual clock.
#[derive(Debug)]
pub struct Scheduler<W> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry<W>>>,
    live: HashSet<TaskId>,
}

impl<W> Default for Scheduler<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Scheduler<W> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
            live: HashSet::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `wake` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, wake: W) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse(Entry {
            due: self.now + delay,
            id,
            wake,
        }));
        self.live.insert(id);
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.live.remove(&id)
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.live.clear();
        self.queue.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.live.contains(&id)
    }

    /// Number of live (not cancelled, not fired) tasks.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }

    /// Deadline of the earliest live task.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.discard_cancelled();
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pop the earliest live task due at or before `until`.
    ///
    /// The clock moves to the task's deadline. When nothing is due, the clock
    /// moves to `until` and `None` is returned.
    pub fn pop_due(&mut self, until: Duration) -> Option<W> {
        self.discard_cancelled();
        match self.queue.peek() {
            Some(Reverse(entry)) if entry.due <= until => self.pop_front(),
            _ => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    /// Pop the earliest live task regardless of its deadline, jumping the clock.
    pub fn pop_next(&mut self) -> Option<W> {
        self.discard_cancelled();
        self.pop_front()
    }

    fn pop_front(&mut self) -> Option<W> {
        let Reverse(entry) = self.queue.pop()?;
        self.live.remove(&entry.id);
        self.now = self.now.max(entry.due);
        Some(entry.wake)
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse(entry)) = self.queue.peek() {
            if self.live.contains(&entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}
