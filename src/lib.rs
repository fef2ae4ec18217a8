// SPDX-License-Identifier: MPL-2.0
//! `tiny_toast` manages transient toast notifications.
//!
//! It tracks which toasts are waiting for their delay and which are visible,
//! dismisses them once their timeout elapses, supports pausing, explicit
//! removal and duplicate suppression, and reports every change to subscribers
//! so a rendering layer can redraw. Drawing itself is left to the caller.

#![doc(html_root_url = "https://docs.rs/tiny_toast/0.3.0")]

pub mod config;
pub mod error;
pub mod notifications;
pub mod snippet;
