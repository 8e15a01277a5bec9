// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active notifications, their timers and the surface
//! they are rendered on. Every notification goes `Active -> Closing -> removed`
//! exactly once, whether it times out or is closed early; `clear_all` is the
//! only path that skips the closing step.

use super::clock::{Clock, SystemClock};
use super::notification::{Kind, Notification, NotificationId, NotificationState, ShowOptions};
use super::surface::Surface;
use super::timers::{TimerAction, TimerKey, TimerQueue};
use std::time::{Duration, Instant};

/// Display time of a notification whose caller gives none (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Shortest configurable default display time (in milliseconds).
pub const MIN_DURATION_MS: u64 = 500;

/// Longest configurable default display time (in milliseconds).
pub const MAX_DURATION_MS: u64 = 60_000;

/// Delay between the closing treatment and removal (in milliseconds).
/// Matches the 0.3s slide-out of the toast exit animation.
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 300;

/// Longest configurable grace period (in milliseconds). Zero is allowed.
pub const MAX_GRACE_PERIOD_MS: u64 = 2000;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Close a specific notification (its close button was pressed).
    Close(NotificationId),
    /// Remove every notification immediately.
    ClearAll,
    /// Fire timers that are due.
    Tick,
}

/// Timing applied to every notification of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerSettings {
    /// Display time used when a caller gives none.
    pub default_duration: Duration,
    /// Delay between the closing treatment and removal.
    pub grace_period: Duration,
}

impl ManagerSettings {
    /// Builds settings from millisecond values, clamping both to the
    /// supported ranges.
    #[must_use]
    pub fn from_millis(default_duration_ms: u64, grace_period_ms: u64) -> Self {
        Self {
            default_duration: Duration::from_millis(
                default_duration_ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS),
            ),
            grace_period: Duration::from_millis(grace_period_ms.min(MAX_GRACE_PERIOD_MS)),
        }
    }
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DURATION_MS, DEFAULT_GRACE_PERIOD_MS)
    }
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    /// Auto-dismiss timer while active, removal timer while closing.
    timer: Option<TimerKey>,
}

/// Manages the active notifications and their timers.
#[derive(Debug)]
pub struct Manager<S, C = SystemClock> {
    /// Active and closing notifications, in display order.
    entries: Vec<Entry>,
    timers: TimerQueue,
    surface: S,
    clock: C,
    settings: ManagerSettings,
    next_id: u64,
    mounted: bool,
}

impl<S: Surface> Manager<S> {
    /// Creates a manager on the wall clock with default settings.
    pub fn new(surface: S) -> Self {
        Self::with_clock(surface, SystemClock, ManagerSettings::default())
    }
}

impl<S: Surface, C: Clock> Manager<S, C> {
    /// Creates a manager with an explicit clock and settings.
    pub fn with_clock(surface: S, clock: C, settings: ManagerSettings) -> Self {
        Self {
            entries: Vec::new(),
            timers: TimerQueue::new(),
            surface,
            clock,
            settings,
            next_id: 0,
            mounted: false,
        }
    }

    /// Shows a notification and starts its auto-dismiss timer.
    ///
    /// Missing or degenerate options are replaced by defaults, so this never
    /// fails. The returned id can be passed to [`close`](Self::close).
    pub fn show(&mut self, options: ShowOptions) -> NotificationId {
        let mut resolved = options.resolve(self.settings.default_duration);
        let now = self.clock.now();
        let deadline = match now.checked_add(resolved.duration) {
            Some(deadline) => deadline,
            None => {
                tracing::warn!(
                    duration = ?resolved.duration,
                    "notification duration out of range, using default"
                );
                resolved.duration = self.settings.default_duration;
                now + resolved.duration
            }
        };
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, resolved, now);
        log_shown(&notification);

        if !self.mounted {
            self.surface.mount();
            self.mounted = true;
        }
        self.surface.append(&notification);

        let timer = self
            .timers
            .schedule(deadline, TimerAction::AutoDismiss(id));
        self.entries.push(Entry {
            notification,
            timer: Some(timer),
        });
        id
    }

    /// Closes a notification early.
    ///
    /// Cancels its auto-dismiss timer, switches it to the closing state and
    /// schedules removal after the grace period. Returns `true` if the call
    /// started the closing; unknown, closing or already removed ids are a
    /// silent no-op.
    pub fn close(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.begin_closing(id, now)
    }

    /// Removes every notification immediately and cancels all their timers.
    pub fn clear_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        tracing::debug!(count = self.entries.len(), "clearing all notifications");

        for entry in self.entries.drain(..) {
            if let Some(key) = entry.timer {
                self.timers.cancel(key);
            }
            self.surface.remove(entry.notification.id());
        }
        debug_assert!(self.timers.is_empty());
    }

    /// Fires every timer that is due, in expiration order.
    ///
    /// Each timer runs at its own deadline, so removal after a timeout is
    /// scheduled from the moment the timeout expired, not from when the tick
    /// arrived. Returns the number of timers fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some((deadline, action)) = self.timers.pop_due(now) {
            fired += 1;
            match action {
                TimerAction::AutoDismiss(id) => {
                    tracing::debug!(%id, "notification timed out");
                    self.begin_closing(id, deadline);
                }
                TimerAction::Remove(id) => self.finish_removal(id),
            }
        }
        fired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.close(*id);
            }
            Message::ClearAll => self.clear_all(),
            Message::Tick => {
                self.tick();
            }
        }
    }

    fn begin_closing(&mut self, id: NotificationId, at: Instant) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.notification.id() == id)
        else {
            return false;
        };
        if entry.notification.is_closing() {
            return false;
        }

        // A fired auto-dismiss has already left the queue; cancelling it is a no-op.
        if let Some(key) = entry.timer.take() {
            self.timers.cancel(key);
        }
        let removal_deadline = at.checked_add(self.settings.grace_period).unwrap_or(at);
        entry.notification.begin_closing();
        self.surface.mark_closing(id);
        entry.timer = Some(self.timers.schedule(removal_deadline, TimerAction::Remove(id)));
        tracing::debug!(%id, "notification closing");
        true
    }

    fn finish_removal(&mut self, id: NotificationId) {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|entry| entry.notification.id() == id)
        {
            self.entries.remove(pos);
            self.surface.remove(id);
            tracing::debug!(%id, "notification removed");
        }
    }

    /// Returns the notification with this id, if it is still active or closing.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|notification| notification.id() == id)
    }

    /// Returns the state of a notification; `None` once it has been removed.
    #[must_use]
    pub fn state(&self, id: NotificationId) -> Option<NotificationState> {
        self.get(id).map(Notification::state)
    }

    /// Active and closing notifications in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    /// Ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.iter().map(Notification::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any auto-dismiss or removal timer is still pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn settings(&self) -> ManagerSettings {
        self.settings
    }
}

/// Mirrors warnings and errors into the log.
fn log_shown(notification: &Notification) {
    let id = notification.id();
    match notification.kind() {
        Kind::Warning => tracing::warn!(
            %id,
            title = notification.title(),
            message = notification.message(),
            "warning notification"
        ),
        Kind::Error => tracing::error!(
            %id,
            title = notification.title(),
            message = notification.message(),
            "error notification"
        ),
        Kind::Success | Kind::Info => tracing::debug!(
            %id,
            kind = %notification.kind(),
            duration = ?notification.duration(),
            "notification shown"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::clock::ManualClock;
    use crate::notifications::surface::{RecordingSurface, SurfaceOp};

    fn manager() -> (Manager<RecordingSurface, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let manager =
            Manager::with_clock(RecordingSurface::new(), clock.clone(), ManagerSettings::default());
        (manager, clock)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn new_manager_is_empty() {
        let (manager, _) = manager();
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
        assert!(manager.surface().ops().is_empty());
    }

    #[test]
    fn show_mounts_surface_once() {
        let (mut manager, _) = manager();
        let a = manager.show(ShowOptions::new());
        let b = manager.show(ShowOptions::new());

        assert_eq!(
            manager.surface().ops(),
            &[SurfaceOp::Mount, SurfaceOp::Append(a), SurfaceOp::Append(b)]
        );
    }

    #[test]
    fn unrepresentable_duration_falls_back_to_default() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new().duration(Duration::MAX));

        assert_eq!(manager.get(id).unwrap().duration(), ms(DEFAULT_DURATION_MS));
        assert_eq!(
            manager.next_deadline(),
            Some(clock.now() + ms(DEFAULT_DURATION_MS))
        );

        clock.advance(ms(DEFAULT_DURATION_MS));
        manager.tick();
        assert_eq!(manager.state(id), Some(NotificationState::Closing));
    }

    #[test]
    fn show_applies_defaults() {
        let (mut manager, _) = manager();
        let id = manager.show(ShowOptions::new().duration_ms(-1));
        let notification = manager.get(id).unwrap();

        assert_eq!(notification.kind(), Kind::Info);
        assert_eq!(notification.title(), "Notification");
        assert_eq!(notification.duration(), ms(DEFAULT_DURATION_MS));
        assert_eq!(notification.state(), NotificationState::Active);
    }

    #[test]
    fn each_active_notification_owns_one_timer() {
        let (mut manager, _) = manager();
        manager.show(ShowOptions::new());
        manager.show(ShowOptions::new());
        assert_eq!(manager.timers.len(), 2);

        let id = manager.show(ShowOptions::new());
        manager.close(id);
        assert_eq!(manager.timers.len(), 3);
    }

    #[test]
    fn close_marks_closing_then_removes_after_grace() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new());

        assert!(manager.close(id));
        assert_eq!(manager.state(id), Some(NotificationState::Closing));
        assert!(manager.surface().is_closing(id));

        clock.advance(ms(299));
        manager.tick();
        assert_eq!(manager.state(id), Some(NotificationState::Closing));

        clock.advance(ms(1));
        manager.tick();
        assert_eq!(manager.state(id), None);
        assert!(manager.surface().visible().is_empty());
    }

    #[test]
    fn close_is_idempotent() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new());

        assert!(manager.close(id));
        assert!(!manager.close(id));
        clock.advance(ms(400));
        manager.tick();
        assert!(!manager.close(id));

        // append + mark_closing + remove, nothing doubled
        assert_eq!(manager.surface().count_for(id), 3);
    }

    #[test]
    fn close_unknown_id_is_noop() {
        let (mut manager, _) = manager();
        let id = manager.show(ShowOptions::new());
        let unknown = NotificationId::from_raw(999);

        assert!(!manager.close(unknown));
        assert_eq!(manager.state(id), Some(NotificationState::Active));
        assert_eq!(manager.surface().ops().len(), 2);
    }

    #[test]
    fn timeout_closes_like_explicit_close() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new().duration_ms(1000));

        clock.advance(ms(1000));
        assert_eq!(manager.tick(), 1);
        assert_eq!(manager.state(id), Some(NotificationState::Closing));

        clock.advance(ms(300));
        assert_eq!(manager.tick(), 1);
        assert_eq!(manager.state(id), None);
        assert_eq!(
            &manager.surface().ops()[1..],
            &[
                SurfaceOp::Append(id),
                SurfaceOp::MarkClosing(id),
                SurfaceOp::Remove(id)
            ]
        );
    }

    #[test]
    fn late_tick_runs_whole_lifecycle_from_deadlines() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new().duration_ms(1000));

        clock.advance(ms(5000));
        assert_eq!(manager.tick(), 2);
        assert_eq!(manager.state(id), None);
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn early_close_cancels_auto_dismiss() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new().duration_ms(1000));
        manager.close(id);

        clock.advance(ms(2000));
        assert_eq!(manager.tick(), 1);
        assert_eq!(manager.surface().count_for(id), 3);
    }

    #[test]
    fn clear_all_skips_grace_and_cancels_timers() {
        let (mut manager, clock) = manager();
        let a = manager.show(ShowOptions::new());
        let b = manager.show(ShowOptions::new());
        manager.close(b);

        manager.clear_all();
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
        assert!(manager.surface().visible().is_empty());

        clock.advance(ms(10_000));
        assert_eq!(manager.tick(), 0);
        assert_eq!(manager.surface().count_for(a), 2);
        assert_eq!(manager.surface().count_for(b), 3);
    }

    #[test]
    fn clear_all_on_empty_manager_is_noop() {
        let (mut manager, _) = manager();
        manager.clear_all();
        assert!(manager.surface().ops().is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let (mut manager, clock) = manager();
        let first = manager.show(ShowOptions::new().duration_ms(10));
        clock.advance(ms(1000));
        manager.tick();
        manager.clear_all();

        let second = manager.show(ShowOptions::new());
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn handle_message_routes_to_operations() {
        let (mut manager, clock) = manager();
        let id = manager.show(ShowOptions::new());

        manager.handle_message(&Message::Close(id));
        assert_eq!(manager.state(id), Some(NotificationState::Closing));

        clock.advance(ms(300));
        manager.handle_message(&Message::Tick);
        assert_eq!(manager.state(id), None);

        manager.show(ShowOptions::new());
        manager.handle_message(&Message::ClearAll);
        assert!(manager.is_empty());
    }

    #[test]
    fn settings_are_clamped() {
        let settings = ManagerSettings::from_millis(0, 1_000_000);
        assert_eq!(settings.default_duration, ms(MIN_DURATION_MS));
        assert_eq!(settings.grace_period, ms(MAX_GRACE_PERIOD_MS));
    }

    #[test]
    fn zero_grace_period_removes_on_next_tick() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(
            RecordingSurface::new(),
            clock.clone(),
            ManagerSettings::from_millis(DEFAULT_DURATION_MS, 0),
        );
        let id = manager.show(ShowOptions::new());
        manager.close(id);
        assert_eq!(manager.state(id), Some(NotificationState::Closing));

        manager.tick();
        assert_eq!(manager.state(id), None);
    }
}
