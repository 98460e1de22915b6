//! Deadline-ordered timers with an explicit clock.
//!
//! The engine never blocks: deferred work is queued here and drained by
//! [`TimerQueue::advance`] with a caller-supplied `Instant`. Timers are
//! fire-and-forget: there is no cancellation path, so owners must treat
//! stale firings as no-ops.

use std::time::{Duration, Instant};

/// Deferred work fired when its deadline passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerTask {
    /// Finish a form submission and run the success effect.
    CompleteSubmission { form_id: String },
    /// Remove an expired notification.
    ExpireNotification { toast_id: String },
}

#[derive(Debug)]
struct TimerEntry {
    due: Instant,
    seq: u64,
    task: TimerTask,
}

/// Pending timers plus the queue's monotonic clock cursor.
///
/// Deadlines are computed against the cursor, which only moves forward.
#[derive(Debug)]
pub struct TimerQueue {
    now: Instant,
    next_seq: u64,
    pending: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// The queue's current clock cursor.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Queue a task to fire `delay` after the current cursor.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) {
        let entry = TimerEntry {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        log::debug!("scheduled {:?} at +{delay:?}", entry.task);
        self.pending.push(entry);
    }

    /// Advance the cursor and drain every task whose deadline has passed,
    /// in deadline order (insertion order breaks ties). A `now` in the past
    /// leaves the cursor where it is.
    pub fn advance(&mut self, now: Instant) -> Vec<TimerTask> {
        self.now = self.now.max(now);

        let mut due: Vec<TimerEntry> = Vec::new();
        let mut remaining: Vec<TimerEntry> = Vec::new();
        for entry in self.pending.drain(..) {
            if entry.due <= self.now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.pending = remaining;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// Number of timers not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str) -> TimerTask {
        TimerTask::CompleteSubmission {
            form_id: name.to_string(),
        }
    }

    #[test]
    fn test_advance_fires_in_deadline_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::starting_at(start);

        queue.schedule(Duration::from_millis(200), task("b"));
        queue.schedule(Duration::from_millis(100), task("a"));

        assert_eq!(queue.advance(start + Duration::from_millis(50)), vec![]);
        assert_eq!(
            queue.advance(start + Duration::from_millis(250)),
            vec![task("a"), task("b")]
        );
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_cursor_never_moves_backwards() {
        let start = Instant::now();
        let mut queue = TimerQueue::starting_at(start);

        queue.advance(start + Duration::from_millis(500));
        queue.schedule(Duration::from_millis(100), task("late"));

        // An earlier `now` does not rewind the cursor or fire anything early.
        assert_eq!(queue.advance(start), vec![]);
        assert_eq!(
            queue.advance(start + Duration::from_millis(600)),
            vec![task("late")]
        );
    }
}
