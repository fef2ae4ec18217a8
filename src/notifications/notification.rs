// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with the closed
//! `Variant` and `Position` enumerations consumed by a rendering layer.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Identifiers are allocated by a [`Manager`](super::Manager) instance and are
/// never reused by that instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual variant of a toast. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl Variant {
    /// All variants, in display order.
    pub const ALL: [Variant; 5] = [
        Variant::Default,
        Variant::Success,
        Variant::Warning,
        Variant::Danger,
        Variant::Info,
    ];

    /// Returns the lowercase name used in configuration and forms.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Danger => "danger",
            Variant::Info => "info",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == needle)
            .ok_or_else(|| ValidationError::UnknownVariant(s.to_string()))
    }
}

/// Screen anchor a toast is stacked at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All anchors, top row first.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the kebab-case name used in configuration and forms.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the snake_case spelling too, forms tend to produce both.
        let needle = s.trim().to_lowercase().replace('_', "-");
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| ValidationError::UnknownPosition(s.to_string()))
    }
}

/// Pre-terminal lifecycle phase of a tracked notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for its delay to elapse; not visible yet.
    Delayed,
    /// Visible; the countdown runs unless paused.
    Active,
}

/// A notification tracked by the manager.
#[derive(Debug, Clone)]
pub struct Notification<T> {
    pub(super) id: ToastId,
    pub(super) content: T,
    pub(super) variant: Variant,
    pub(super) position: Position,
    pub(super) timeout: Duration,
    pub(super) delay: Duration,
    pub(super) paused: bool,
    pub(super) dedupe_key: Option<String>,
    pub(super) class_name: Option<String>,
    pub(super) phase: Phase,
    /// Countdown left before expiry, frozen while paused or delayed.
    pub(super) remaining: Duration,
}

impl<T> Notification<T> {
    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the opaque payload.
    pub fn content(&self) -> &T {
        &self.content
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Configured auto-dismiss timeout. Zero means manual dismiss only.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn dedupe_key(&self) -> Option<&str> {
        self.dedupe_key.as_deref()
    }

    /// Style hint passed through untouched to the renderer.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether this notification can ever expire on its own.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.timeout.is_zero()
    }

    /// Countdown time left as of the last pause or phase change.
    ///
    /// While the countdown is running this is not updated; use
    /// [`Manager::remaining`](super::Manager::remaining) for a live value.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}
