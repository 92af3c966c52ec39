// SPDX-License-Identifier: MPL-2.0
//! Deterministic timer scheduler.
//!
//! Pending callbacks are ordered by deadline, then by insertion order, so
//! two timers with the same deadline fire in the order they were scheduled.
//! Nothing fires on its own: the site runtime pops due timers from
//! [`Timers::pop_due`] when the host calls `Site::tick`.

use crate::domain::page::ElementId;
use crate::ui::notifications::ToastId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Callback identity carried by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Advance one counter animation frame.
    CounterFrame(ElementId),
    /// Make a freshly inserted toast visible.
    ToastShow(ToastId),
    /// Auto-dismiss a toast.
    ToastExpire(ToastId),
    /// Detach a hidden toast from the container.
    ToastDetach(ToastId),
    /// Scroll throttle window elapsed.
    ScrollThrottle,
    /// Debounced search run; stale generations are ignored.
    SearchDebounce(u64),
}

#[derive(Debug)]
struct Entry {
    deadline: Instant,
    seq: u64,
    event: TimerEvent,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Pending timers of the site runtime.
#[derive(Debug, Default)]
pub struct Timers {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` at an absolute deadline.
    pub fn schedule(&mut self, deadline: Instant, event: TimerEvent) {
        let seq = self.seq;
        self.seq += 1;
        tracing::trace!(?event, seq, "timer scheduled");
        self.heap.push(Reverse(Entry {
            deadline,
            seq,
            event,
        }));
    }

    /// Schedules `event` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, event: TimerEvent) {
        self.schedule(now + delay, event);
    }

    /// Removes and returns the earliest timer due at `now`, with its deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerEvent)> {
        if self.heap.peek()?.0.deadline > now {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.deadline, entry.event))
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(entry)| entry.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_is_due_before_its_deadline() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule_after(start, ms(10), TimerEvent::ScrollThrottle);

        assert!(timers.pop_due(start + ms(9)).is_none());
        assert_eq!(
            timers.pop_due(start + ms(10)),
            Some((start + ms(10), TimerEvent::ScrollThrottle))
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule_after(start, ms(30), TimerEvent::SearchDebounce(3));
        timers.schedule_after(start, ms(10), TimerEvent::SearchDebounce(1));
        timers.schedule_after(start, ms(20), TimerEvent::SearchDebounce(2));

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(start + ms(100)))
            .map(|(_, event)| event)
            .collect();
        assert_eq!(
            fired,
            vec![
                TimerEvent::SearchDebounce(1),
                TimerEvent::SearchDebounce(2),
                TimerEvent::SearchDebounce(3),
            ]
        );
    }

    #[test]
    fn equal_deadlines_fire_in_insertion_order() {
        let start = Instant::now();
        let mut timers = Timers::new();
        for generation in 0..5 {
            timers.schedule(start, TimerEvent::SearchDebounce(generation));
        }

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(start))
            .map(|(_, event)| event)
            .collect();
        assert_eq!(fired, (0..5).map(TimerEvent::SearchDebounce).collect::<Vec<_>>());
    }

    #[test]
    fn next_deadline_reports_earliest() {
        let start = Instant::now();
        let mut timers = Timers::new();
        assert_eq!(timers.next_deadline(), None);
        timers.schedule_after(start, ms(50), TimerEvent::ScrollThrottle);
        timers.schedule_after(start, ms(5), TimerEvent::ScrollThrottle);
        assert_eq!(timers.next_deadline(), Some(start + ms(5)));
        assert_eq!(timers.len(), 2);
    }
}
