// SPDX-License-Identifier: MPL-2.0
//! State-change events and the subscriber registry.
//!
//! A rendering layer subscribes to learn when the set of visible toasts
//! changes. Subscribers only ever see a shared reference to the event, so
//! they cannot mutate the manager while it is dispatching.

use super::notification::{Phase, ToastId};
use std::fmt;

/// Why a notification left the tracked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Its timeout elapsed.
    Expired,
    /// The caller removed it.
    Removed,
}

/// A change to the tracked notification set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A notification was created, either delayed or already active.
    Shown { id: ToastId, phase: Phase },
    /// A delayed notification became visible.
    Activated { id: ToastId },
    Paused { id: ToastId },
    Resumed { id: ToastId },
    /// A `show` call was dropped because `existing` carries the same dedupe key.
    Suppressed { existing: ToastId },
    /// A notification was evicted.
    Dismissed { id: ToastId, reason: DismissReason },
}

impl Event {
    /// The notification this event concerns.
    #[must_use]
    pub fn id(&self) -> ToastId {
        match *self {
            Event::Shown { id, .. }
            | Event::Activated { id }
            | Event::Paused { id }
            | Event::Resumed { id }
            | Event::Dismissed { id, .. } => id,
            Event::Suppressed { existing } => existing,
        }
    }

    /// Returns true when the set of visible toasts changed.
    #[must_use]
    pub fn changes_visibility(&self) -> bool {
        matches!(
            self,
            Event::Shown {
                phase: Phase::Active,
                ..
            } | Event::Activated { .. }
                | Event::Dismissed { .. }
        )
    }
}

/// Identifier returned by [`Manager::subscribe`](super::Manager::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Event) + Send>;

/// Ordered list of subscriber callbacks.
#[derive(Default)]
pub(super) struct Subscribers {
    entries: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Subscribers {
    pub fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Delivers `events` to every subscriber, in subscription order.
    pub fn dispatch(&mut self, events: &[Event]) {
        for event in events {
            for (_, callback) in &mut self.entries {
                callback(event);
            }
        }
    }
}
