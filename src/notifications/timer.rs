// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered queue of cancellable timers.
//!
//! Each scheduled timer is identified by a [`TimerToken`]. Holding the token
//! is the only way to cancel it, and a token is never handed out twice, so a
//! stale token cannot cancel or match a newer timer.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled timer.
///
/// Ordered by deadline, then by scheduling order for equal deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken {
    deadline: Duration,
    seq: u64,
}

impl TimerToken {
    /// Clock time at which the timer fires.
    #[must_use]
    pub fn deadline(self) -> Duration {
        self.deadline
    }
}

/// Timers keyed by deadline, carrying an arbitrary payload.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    timers: BTreeMap<TimerToken, T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            timers: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerToken {
        let token = TimerToken {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.timers.insert(token, payload);
        token
    }

    /// Cancels a timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, token: TimerToken) -> Option<T> {
        self.timers.remove(&token)
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerToken, T)> {
        let entry = self.timers.first_entry()?;
        if entry.key().deadline > now {
            return None;
        }
        let token = *entry.key();
        Some((token, entry.remove()))
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.keys().next().map(|token| token.deadline)
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(300), "late");
        queue.schedule(ms(100), "early");

        assert_eq!(queue.pop_due(ms(1000)).map(|(_, p)| p), Some("early"));
        assert_eq!(queue.pop_due(ms(1000)).map(|(_, p)| p), Some("late"));
        assert!(queue.pop_due(ms(1000)).is_none());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(50), 'a');
        queue.schedule(ms(50), 'b');
        queue.schedule(ms(50), 'c');

        let order: Vec<char> = std::iter::from_fn(|| queue.pop_due(ms(50)).map(|(_, p)| p))
            .collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(2000), ());
        assert!(queue.pop_due(ms(1999)).is_none());
        assert!(queue.pop_due(ms(2000)).is_some());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let token = queue.schedule(ms(10), 1);
        assert_eq!(queue.cancel(token), Some(1));
        assert!(queue.pop_due(ms(100)).is_none());
        assert_eq!(queue.cancel(token), None);
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let mut queue = TimerQueue::new();
        assert_eq!(queue.next_deadline(), None);
        let late = queue.schedule(ms(500), ());
        let early = queue.schedule(ms(200), ());
        assert_eq!(queue.next_deadline(), Some(ms(200)));
        queue.cancel(early);
        assert_eq!(queue.next_deadline(), Some(late.deadline()));
    }
}
