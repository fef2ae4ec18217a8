// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every tracked notification. It assigns ids, holds
//! delayed notifications until their delay elapses, runs the auto-dismiss
//! countdown of active ones, and evicts them on expiry or explicit removal.
//!
//! Time only moves when [`Manager::poll`] is called: the manager reads its
//! [`Clock`] and fires every timer that has come due. A UI loop can call
//! `poll` on each frame, or a [`SharedManager`](super::SharedManager) driver
//! can call it at [`Manager::next_deadline`].

use super::clock::{Clock, SystemClock};
use super::events::{DismissReason, Event, SubscriptionId, Subscribers};
use super::notification::{Notification, Phase, Position, ToastId};
use super::options::{Defaults, RawOptions, ToastOptions};
use super::timer::{TimerQueue, TimerToken};
use crate::error::ValidationError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Remove a specific notification by ID.
    Dismiss(ToastId),
    Pause(ToastId),
    Resume(ToastId),
    /// Fire any timers that have come due.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Activate,
    Expire,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: ToastId,
    kind: TimerKind,
}

#[derive(Debug)]
struct Entry<T> {
    notification: Notification<T>,
    /// The one outstanding timer owned by this notification.
    timer: Option<TimerToken>,
}

/// Manages the set of delayed and visible notifications.
#[derive(Debug)]
pub struct Manager<T> {
    /// Tracked notifications, in creation order.
    entries: BTreeMap<ToastId, Entry<T>>,
    dedupe: HashMap<String, ToastId>,
    timers: TimerQueue<Timer>,
    clock: Arc<dyn Clock>,
    defaults: Defaults,
    subscribers: Subscribers,
    /// Events raised by the current call, delivered once it is done mutating.
    pending_events: Vec<Event>,
    next_id: u64,
}

impl<T> Default for Manager<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules the expiry timer for a notification whose countdown starts at `from`.
fn start_countdown<T>(
    timers: &mut TimerQueue<Timer>,
    notification: &Notification<T>,
    from: Duration,
) -> Option<TimerToken> {
    if notification.paused || !notification.auto_dismisses() {
        return None;
    }
    Some(timers.schedule(
        from.saturating_add(notification.remaining),
        Timer {
            id: notification.id,
            kind: TimerKind::Expire,
        },
    ))
}

impl<T> Manager<T> {
    /// Creates an empty manager driven by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }

    /// Creates an empty manager driven by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_shared_clock(Arc::new(clock))
    }

    pub fn with_shared_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: BTreeMap::new(),
            dedupe: HashMap::new(),
            timers: TimerQueue::new(),
            clock,
            defaults: Defaults::default(),
            subscribers: Subscribers::default(),
            pending_events: Vec::new(),
            next_id: 0,
        }
    }

    /// Replaces the fallback values used for unset options.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn set_defaults(&mut self, defaults: Defaults) {
        self.defaults = defaults;
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Current time on the manager's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Shows a new notification and returns its ID.
    ///
    /// If `options` carries a dedupe key that an already tracked notification
    /// holds, nothing is created and the existing notification's ID is
    /// returned instead. Toasts whose timeout already elapsed are evicted
    /// first, so they never suppress a new one.
    pub fn show(&mut self, content: T, options: ToastOptions) -> ToastId {
        self.poll();
        let options = options.resolve(&self.defaults);

        if let Some(existing) = options
            .dedupe_key
            .as_ref()
            .and_then(|key| self.dedupe.get(key))
            .copied()
        {
            debug!(%existing, key = ?options.dedupe_key, "toast suppressed by dedupe key");
            self.pending_events.push(Event::Suppressed { existing });
            self.flush_events();
            return existing;
        }

        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;
        let now = self.clock.now();
        let phase = if options.delay.is_zero() {
            Phase::Active
        } else {
            Phase::Delayed
        };

        let notification = Notification {
            id,
            content,
            variant: options.variant,
            position: options.position,
            timeout: options.timeout,
            delay: options.delay,
            paused: options.paused,
            dedupe_key: options.dedupe_key,
            class_name: options.class_name,
            phase,
            remaining: options.timeout,
        };

        let timer = match phase {
            Phase::Delayed => Some(self.timers.schedule(
                now.saturating_add(notification.delay),
                Timer {
                    id,
                    kind: TimerKind::Activate,
                },
            )),
            Phase::Active => start_countdown(&mut self.timers, &notification, now),
        };

        debug!(
            %id,
            ?phase,
            variant = %notification.variant,
            position = %notification.position,
            timeout_ms = notification.timeout.as_millis() as u64,
            delay_ms = notification.delay.as_millis() as u64,
            paused = notification.paused,
            "toast shown"
        );

        if let Some(key) = &notification.dedupe_key {
            self.dedupe.insert(key.clone(), id);
        }
        self.entries.insert(
            id,
            Entry {
                notification,
                timer,
            },
        );
        self.pending_events.push(Event::Shown { id, phase });
        self.flush_events();
        id
    }

    /// Validates untyped options, then shows the notification.
    pub fn try_show(&mut self, content: T, raw: RawOptions) -> Result<ToastId, ValidationError> {
        let options = ToastOptions::try_from(raw)?;
        Ok(self.show(content, options))
    }

    /// Removes a notification regardless of its phase.
    ///
    /// Returns `true` if the notification was tracked. Unknown IDs are ignored.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.poll();
        let removed = self.evict(id, DismissReason::Removed).is_some();
        self.flush_events();
        removed
    }

    /// Removes a notification and hands back its payload.
    pub fn take(&mut self, id: ToastId) -> Option<Notification<T>> {
        self.poll();
        let notification = self.evict(id, DismissReason::Removed);
        self.flush_events();
        notification
    }

    /// Freezes a notification's countdown, keeping the time already elapsed.
    ///
    /// A delayed notification paused before it appears will not start its
    /// countdown until resumed. Returns `false` for unknown or already paused
    /// notifications.
    pub fn pause(&mut self, id: ToastId) -> bool {
        self.poll();
        let now = self.clock.now();
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if entry.notification.paused {
            return false;
        }
        entry.notification.paused = true;
        if entry.notification.phase == Phase::Active {
            if let Some(token) = entry.timer.take() {
                self.timers.cancel(token);
                entry.notification.remaining = token.deadline().saturating_sub(now);
            }
        }
        debug!(%id, remaining_ms = entry.notification.remaining.as_millis() as u64, "toast paused");
        self.pending_events.push(Event::Paused { id });
        self.flush_events();
        true
    }

    /// Continues a paused countdown from where it stopped.
    ///
    /// Returns `false` for unknown or not paused notifications.
    pub fn resume(&mut self, id: ToastId) -> bool {
        self.poll();
        let now = self.clock.now();
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if !entry.notification.paused {
            return false;
        }
        entry.notification.paused = false;
        if entry.notification.phase == Phase::Active && entry.timer.is_none() {
            entry.timer = start_countdown(&mut self.timers, &entry.notification, now);
        }
        debug!(%id, "toast resumed");
        self.pending_events.push(Event::Resumed { id });
        self.flush_events();
        true
    }

    /// Fires every timer due at the current clock time.
    ///
    /// Delayed notifications whose delay has elapsed become active, and
    /// active ones whose countdown ran out are evicted. A countdown starts at
    /// the instant its delay ended, so a single late poll still processes both
    /// steps. Returns the number of timers fired.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some((token, timer)) = self.timers.pop_due(now) {
            let Some(entry) = self.entries.get_mut(&timer.id) else {
                trace!(id = %timer.id, "dropping timer for evicted toast");
                continue;
            };
            if entry.timer != Some(token) {
                trace!(id = %timer.id, "dropping stale timer");
                continue;
            }
            entry.timer = None;
            fired += 1;

            match timer.kind {
                TimerKind::Activate => {
                    entry.notification.phase = Phase::Active;
                    entry.timer =
                        start_countdown(&mut self.timers, &entry.notification, token.deadline());
                    debug!(id = %timer.id, "toast activated");
                    self.pending_events.push(Event::Activated { id: timer.id });
                }
                TimerKind::Expire => {
                    debug!(id = %timer.id, "toast expired");
                    self.evict(timer.id, DismissReason::Expired);
                }
            }
        }

        self.flush_events();
        fired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::Pause(id) => {
                self.pause(*id);
            }
            Message::Resume(id) => {
                self.resume(*id);
            }
            Message::Tick => {
                self.poll();
            }
        }
    }

    /// Registers a callback invoked with every subsequent event.
    ///
    /// Callbacks run after the triggering call has finished mutating state.
    /// They must not lock a [`SharedManager`](super::SharedManager) that owns
    /// this manager.
    pub fn subscribe(&mut self, callback: impl FnMut(&Event) + Send + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn get(&self, id: ToastId) -> Option<&Notification<T>> {
        self.entries.get(&id).map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.get(id).map(Notification::phase)
    }

    /// Live countdown time left for a notification.
    ///
    /// Returns `Duration::ZERO` for notifications that never auto-dismiss.
    #[must_use]
    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        let entry = self.entries.get(&id)?;
        let notification = &entry.notification;
        if !notification.auto_dismisses() {
            return Some(Duration::ZERO);
        }
        match (notification.phase, entry.timer) {
            (Phase::Active, Some(token)) => {
                Some(token.deadline().saturating_sub(self.clock.now()))
            }
            _ => Some(notification.remaining),
        }
    }

    /// All tracked notifications, delayed or visible, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification<T>> {
        self.entries.values().map(|entry| &entry.notification)
    }

    /// Visible notifications in creation order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification<T>> {
        self.iter().filter(|n| n.phase == Phase::Active)
    }

    /// Visible notifications grouped by anchor, in creation order within a group.
    pub fn visible_by_position(&self) -> BTreeMap<Position, Vec<&Notification<T>>> {
        let mut groups: BTreeMap<Position, Vec<&Notification<T>>> = BTreeMap::new();
        for notification in self.visible() {
            groups
                .entry(notification.position)
                .or_default()
                .push(notification);
        }
        groups
    }

    /// Number of tracked notifications (delayed and visible).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    #[must_use]
    pub fn delayed_count(&self) -> usize {
        self.iter().filter(|n| n.phase == Phase::Delayed).count()
    }

    /// Clock time of the next pending transition, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Removes every tracked notification.
    pub fn clear(&mut self) {
        let ids: Vec<ToastId> = self.entries.keys().copied().collect();
        for id in ids {
            self.evict(id, DismissReason::Removed);
        }
        self.timers.clear();
        self.flush_events();
    }

    /// Drops a notification, its timer, and its dedupe key.
    fn evict(&mut self, id: ToastId, reason: DismissReason) -> Option<Notification<T>> {
        let entry = self.entries.remove(&id)?;
        if let Some(token) = entry.timer {
            self.timers.cancel(token);
        }
        if let Some(key) = &entry.notification.dedupe_key {
            if self.dedupe.get(key) == Some(&id) {
                self.dedupe.remove(key);
            }
        }
        if reason == DismissReason::Removed {
            debug!(%id, "toast removed");
        }
        self.pending_events.push(Event::Dismissed { id, reason });
        Some(entry.notification)
    }

    fn flush_events(&mut self) {
        if self.pending_events.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.pending_events);
        self.subscribers.dispatch(&events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::clock::ManualClock;
    use crate::notifications::notification::Variant;
    use std::sync::Mutex;

    fn manager() -> (Manager<&'static str>, ManualClock) {
        let clock = ManualClock::new();
        (Manager::with_clock(clock.clone()), clock)
    }

    fn timeout_ms(ms: u64) -> ToastOptions {
        ToastOptions::new().timeout(Duration::from_millis(ms))
    }

    fn advance(manager: &mut Manager<&'static str>, clock: &ManualClock, ms: u64) {
        clock.advance_ms(ms);
        manager.poll();
    }

    #[test]
    fn new_manager_is_empty() {
        let (manager, _) = manager();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.delayed_count(), 0);
        assert!(manager.is_empty());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn ids_are_unique_per_manager() {
        let (mut manager, _) = manager();
        let first = manager.show("a", ToastOptions::new());
        let second = manager.show("b", ToastOptions::new());
        assert_ne!(first, second);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn show_without_delay_is_immediately_visible() {
        let (mut manager, _) = manager();
        let id = manager.show("test", ToastOptions::new());
        assert_eq!(manager.phase(id), Some(Phase::Active));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn show_applies_defaults() {
        let (mut manager, _) = manager();
        let id = manager.show("test", ToastOptions::new());
        let notification = manager.get(id).unwrap();
        assert_eq!(notification.variant(), Variant::Default);
        assert_eq!(notification.position(), Position::TopCenter);
        assert_eq!(notification.timeout(), manager.defaults().timeout);
        assert!(!notification.is_paused());
    }

    #[test]
    fn expires_after_timeout() {
        let (mut manager, clock) = manager();
        let id = manager.show("A", timeout_ms(2000).delay(Duration::ZERO));

        advance(&mut manager, &clock, 1999);
        assert_eq!(manager.phase(id), Some(Phase::Active));

        advance(&mut manager, &clock, 2);
        assert!(!manager.contains(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn delayed_toast_activates_then_expires() {
        let (mut manager, clock) = manager();
        let id = manager.show(
            "B",
            timeout_ms(1000).delay(Duration::from_millis(500)),
        );

        advance(&mut manager, &clock, 400);
        assert_eq!(manager.phase(id), Some(Phase::Delayed));
        assert_eq!(manager.visible_count(), 0);

        advance(&mut manager, &clock, 200);
        assert_eq!(manager.phase(id), Some(Phase::Active));

        advance(&mut manager, &clock, 1000);
        assert!(!manager.contains(id));
    }

    #[test]
    fn late_poll_processes_delay_and_timeout_together() {
        let (mut manager, clock) = manager();
        let id = manager.show("late", timeout_ms(100).delay(Duration::from_millis(100)));
        clock.advance_ms(250);
        assert_eq!(manager.poll(), 2);
        assert!(!manager.contains(id));
    }

    #[test]
    fn zero_timeout_never_expires() {
        let (mut manager, clock) = manager();
        let id = manager.show("sticky", timeout_ms(0));
        advance(&mut manager, &clock, 10_000_000);
        assert_eq!(manager.phase(id), Some(Phase::Active));
        assert_eq!(manager.next_deadline(), None);
        assert_eq!(manager.remaining(id), Some(Duration::ZERO));
    }

    #[test]
    fn remove_evicts_immediately() {
        let (mut manager, _) = manager();
        let id = manager.show("C", ToastOptions::new());
        assert!(manager.remove(id));
        assert!(manager.is_empty());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let (mut manager, _) = manager();
        let id = manager.show("C", ToastOptions::new());
        manager.remove(id);
        let other = manager.show("D", ToastOptions::new());

        assert!(!manager.remove(id));
        assert_eq!(manager.len(), 1);
        assert!(manager.contains(other));
    }

    #[test]
    fn remove_delayed_cancels_activation() {
        let (mut manager, clock) = manager();
        let id = manager.show("later", ToastOptions::new().delay(Duration::from_millis(50)));
        manager.remove(id);
        clock.advance_ms(100);
        assert_eq!(manager.poll(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let (mut manager, clock) = manager();
        let id = manager.show("p", timeout_ms(1000));

        advance(&mut manager, &clock, 600);
        assert!(manager.pause(id));
        assert_eq!(manager.remaining(id), Some(Duration::from_millis(400)));

        advance(&mut manager, &clock, 60_000);
        assert_eq!(manager.phase(id), Some(Phase::Active));
        assert_eq!(manager.remaining(id), Some(Duration::from_millis(400)));

        assert!(manager.resume(id));
        advance(&mut manager, &clock, 399);
        assert!(manager.contains(id));
        advance(&mut manager, &clock, 1);
        assert!(!manager.contains(id));
    }

    #[test]
    fn pause_twice_and_resume_unpaused_are_noops() {
        let (mut manager, _) = manager();
        let id = manager.show("p", ToastOptions::new());
        assert!(!manager.resume(id));
        assert!(manager.pause(id));
        assert!(!manager.pause(id));
    }

    #[test]
    fn pause_unknown_id_is_noop() {
        let (mut manager, _) = manager();
        let id = manager.show("x", ToastOptions::new());
        manager.remove(id);
        assert!(!manager.pause(id));
        assert!(!manager.resume(id));
    }

    #[test]
    fn started_paused_waits_for_resume() {
        let (mut manager, clock) = manager();
        let id = manager.show("sticky", timeout_ms(500).pause(true));
        advance(&mut manager, &clock, 5_000);
        assert!(manager.contains(id));

        manager.resume(id);
        advance(&mut manager, &clock, 500);
        assert!(!manager.contains(id));
    }

    #[test]
    fn pausing_delayed_toast_holds_countdown_after_activation() {
        let (mut manager, clock) = manager();
        let id = manager.show("d", timeout_ms(300).delay(Duration::from_millis(100)));
        manager.pause(id);

        advance(&mut manager, &clock, 1_000);
        assert_eq!(manager.phase(id), Some(Phase::Active));
        assert_eq!(manager.remaining(id), Some(Duration::from_millis(300)));

        manager.resume(id);
        advance(&mut manager, &clock, 300);
        assert!(!manager.contains(id));
    }

    #[test]
    fn dedupe_key_returns_existing_id() {
        let (mut manager, _) = manager();
        let first = manager.show("saved", ToastOptions::new().dedupe_key("save"));
        let second = manager.show("saved again", ToastOptions::new().dedupe_key("save"));
        assert_eq!(first, second);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(first).map(|n| *n.content()), Some("saved"));
    }

    #[test]
    fn dedupe_key_is_released_on_eviction() {
        let (mut manager, clock) = manager();
        let first = manager.show("a", timeout_ms(100).dedupe_key("k"));
        advance(&mut manager, &clock, 100);
        let second = manager.show("b", timeout_ms(100).dedupe_key("k"));
        assert_ne!(first, second);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn overdue_toast_does_not_suppress_new_one() {
        let (mut manager, clock) = manager();
        let first = manager.show("a", timeout_ms(100).dedupe_key("k"));
        clock.advance_ms(500);

        let second = manager.show("b", timeout_ms(100).dedupe_key("k"));
        assert_ne!(first, second);
        assert!(!manager.contains(first));

        manager.poll();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(second).map(|n| *n.content()), Some("b"));
    }

    #[test]
    fn remove_after_unpolled_expiry_reports_expired() {
        let (mut manager, clock) = manager();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        manager.subscribe(move |event| sink.lock().unwrap().push(*event));

        let id = manager.show("gone", timeout_ms(100));
        clock.advance_ms(500);

        assert!(!manager.remove(id));
        assert_eq!(
            seen.lock().unwrap().last(),
            Some(&Event::Dismissed {
                id,
                reason: DismissReason::Expired
            })
        );
    }

    #[test]
    fn take_after_unpolled_expiry_returns_none() {
        let (mut manager, clock) = manager();
        let id = manager.show("gone", timeout_ms(100));
        clock.advance_ms(100);
        assert!(manager.take(id).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn dedupe_applies_to_delayed_toasts() {
        let (mut manager, _) = manager();
        let first = manager.show("a", ToastOptions::new().delay(Duration::from_secs(1)).dedupe_key("k"));
        let second = manager.show("b", ToastOptions::new().dedupe_key("k"));
        assert_eq!(first, second);
    }

    #[test]
    fn try_show_rejects_negative_durations() {
        let (mut manager, _) = manager();
        let raw = RawOptions {
            timeout_ms: Some(-10),
            ..RawOptions::default()
        };
        assert!(manager.try_show("bad", raw).is_err());
        assert!(manager.is_empty());
    }

    #[test]
    fn visible_by_position_groups_in_creation_order() {
        let (mut manager, _) = manager();
        let a = manager.show("a", ToastOptions::new().position(Position::BottomRight));
        let b = manager.show("b", ToastOptions::new().position(Position::TopLeft));
        let c = manager.show("c", ToastOptions::new().position(Position::BottomRight));
        manager.show("hidden", ToastOptions::new().delay(Duration::from_secs(1)));

        let groups = manager.visible_by_position();
        let bottom: Vec<ToastId> = groups[&Position::BottomRight].iter().map(|n| n.id()).collect();
        assert_eq!(bottom, vec![a, c]);
        assert_eq!(groups[&Position::TopLeft][0].id(), b);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn events_are_delivered_in_order() {
        let (mut manager, clock) = manager();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        manager.subscribe(move |event| sink.lock().unwrap().push(*event));

        let id = manager.show("e", timeout_ms(100).delay(Duration::from_millis(10)));
        advance(&mut manager, &clock, 10);
        manager.pause(id);
        manager.resume(id);
        advance(&mut manager, &clock, 100);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Event::Shown {
                    id,
                    phase: Phase::Delayed
                },
                Event::Activated { id },
                Event::Paused { id },
                Event::Resumed { id },
                Event::Dismissed {
                    id,
                    reason: DismissReason::Expired
                },
            ]
        );
    }

    #[test]
    fn suppressed_show_emits_event() {
        let (mut manager, _) = manager();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = manager.show("x", ToastOptions::new().dedupe_key("k"));
        manager.subscribe(move |event| sink.lock().unwrap().push(*event));
        manager.show("y", ToastOptions::new().dedupe_key("k"));
        assert_eq!(*seen.lock().unwrap(), vec![Event::Suppressed { existing: id }]);
    }

    #[test]
    fn handle_message_dismiss() {
        let (mut manager, _) = manager();
        let id = manager.show("test", ToastOptions::new());
        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_tick_polls() {
        let (mut manager, clock) = manager();
        manager.show("test", timeout_ms(10));
        clock.advance_ms(10);
        manager.handle_message(&Message::Tick);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let (mut manager, _) = manager();
        for _ in 0..5 {
            manager.show("test", ToastOptions::new());
        }
        manager.show("later", ToastOptions::new().delay(Duration::from_secs(1)));

        manager.clear();
        assert!(manager.is_empty());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn take_returns_payload() {
        let (mut manager, _) = manager();
        let id = manager.show("payload", ToastOptions::new().class_name("custom"));
        let taken = manager.take(id).expect("tracked");
        assert_eq!(*taken.content(), "payload");
        assert_eq!(taken.class_name(), Some("custom"));
        assert!(manager.take(id).is_none());
    }
}
