// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! This module provides a non-intrusive notification manager following
//! toast/snackbar UX patterns. Notifications are shown at a screen anchor,
//! optionally after a delay, and dismiss themselves once their timeout has
//! elapsed unless paused or configured to stay.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct, `Variant` and `Position`
//! - [`options`] - typed `ToastOptions` and untyped `RawOptions`
//! - [`manager`] - `Manager` for lifecycle and timer management
//! - [`clock`] - injectable time sources
//! - [`timer`] - cancellable deadline queue
//! - [`events`] - change events for a rendering layer
//! - [`shared`] - mutex-guarded handle and tokio driver
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use tiny_toast::notifications::{ManualClock, Manager, ToastOptions, Variant};
//!
//! let clock = ManualClock::new();
//! let mut manager = Manager::with_clock(clock.clone());
//!
//! let id = manager.show(
//!     "Image saved successfully",
//!     ToastOptions::new()
//!         .timeout(Duration::from_millis(2000))
//!         .variant(Variant::Success),
//! );
//!
//! clock.advance_ms(2000);
//! manager.poll();
//! assert!(!manager.contains(id));
//! ```

pub mod clock;
pub mod events;
pub mod manager;
pub mod notification;
pub mod options;
pub mod shared;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use events::{DismissReason, Event, SubscriptionId};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Phase, Position, ToastId, Variant};
pub use options::{Defaults, RawOptions, ToastOptions};
pub use shared::{DriverHandle, SharedManager};
