// SPDX-License-Identifier: MPL-2.0
//! Single-threaded timer queue.
//!
//! Plays the part of an event loop's `setTimeout`/`clearTimeout` pair for the
//! manager: callbacks are plain [`TimerAction`] values that the owner pops
//! once their deadline has passed, earliest first.

use super::notification::NotificationId;
use std::collections::BTreeMap;
use std::time::Instant;

/// Deferred work scheduled by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// The notification's display time has elapsed.
    AutoDismiss(NotificationId),
    /// The closing grace period has elapsed.
    Remove(NotificationId),
}

/// Handle returned by [`TimerQueue::schedule`], used to cancel the timer.
///
/// Ordering is by deadline, then by scheduling order, which gives FIFO
/// firing among timers sharing a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerKey {
    deadline: Instant,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BTreeMap<TimerKey, TimerAction>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire once `deadline` is reached.
    pub fn schedule(&mut self, deadline: Instant, action: TimerAction) -> TimerKey {
        let key = TimerKey {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(key, action);
        key
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.pending.remove(&key).is_some()
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerAction)> {
        let entry = self.pending.first_entry()?;
        if entry.key().deadline > now {
            return None;
        }
        let deadline = entry.key().deadline;
        Some((deadline, entry.remove()))
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|key| key.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[test]
    fn pops_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start + Duration::from_millis(300), TimerAction::Remove(id(1)));
        timers.schedule(start + Duration::from_millis(100), TimerAction::AutoDismiss(id(2)));
        timers.schedule(start + Duration::from_millis(200), TimerAction::AutoDismiss(id(3)));

        let later = start + Duration::from_secs(1);
        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(later))
            .map(|(_, action)| action)
            .collect();

        assert_eq!(
            fired,
            vec![
                TimerAction::AutoDismiss(id(2)),
                TimerAction::AutoDismiss(id(3)),
                TimerAction::Remove(id(1)),
            ]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let at = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(at, TimerAction::AutoDismiss(id(5)));
        timers.schedule(at, TimerAction::AutoDismiss(id(4)));

        assert_eq!(timers.pop_due(at), Some((at, TimerAction::AutoDismiss(id(5)))));
        assert_eq!(timers.pop_due(at), Some((at, TimerAction::AutoDismiss(id(4)))));
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start + Duration::from_millis(50), TimerAction::AutoDismiss(id(1)));

        assert_eq!(timers.pop_due(start), None);
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(50)));
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        let key = timers.schedule(start, TimerAction::AutoDismiss(id(1)));

        assert!(timers.cancel(key));
        assert!(!timers.cancel(key));
        assert_eq!(timers.pop_due(start + Duration::from_secs(10)), None);
    }
}
