// SPDX-License-Identifier: MPL-2.0
//! Options accepted by [`Manager::show`](super::Manager::show).
//!
//! [`ToastOptions`] is the typed builder; every field left unset falls back to
//! the manager's [`Defaults`]. [`RawOptions`] mirrors what a form or the
//! command line hands over (signed millisecond counts, free-form strings) and
//! is validated into `ToastOptions` at the boundary.

use super::notification::{Position, Variant};
use crate::config::defaults::{DEFAULT_DELAY_MS, DEFAULT_TIMEOUT_MS};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fallback values applied to options the caller leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub timeout: Duration,
    pub variant: Variant,
    pub position: Position,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            variant: Variant::default(),
            position: Position::default(),
        }
    }
}

/// Typed toast options.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tiny_toast::notifications::{Position, ToastOptions, Variant};
///
/// let options = ToastOptions::new()
///     .timeout(Duration::from_millis(2000))
///     .variant(Variant::Success)
///     .position(Position::BottomRight)
///     .dedupe_key("saved");
/// assert_eq!(options.timeout_value(), Some(Duration::from_millis(2000)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    timeout: Option<Duration>,
    delay: Option<Duration>,
    variant: Option<Variant>,
    position: Option<Position>,
    paused: Option<bool>,
    dedupe_key: Option<String>,
    class_name: Option<String>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-dismiss timeout. `Duration::ZERO` disables auto-dismiss.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the delay before the toast becomes visible.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Starts the toast paused: it stays until resumed or removed.
    #[must_use]
    pub fn pause(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    /// Suppresses the toast while another one with the same key is tracked.
    ///
    /// An empty key is treated as no key.
    #[must_use]
    pub fn dedupe_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.dedupe_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn timeout_value(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn delay_value(&self) -> Option<Duration> {
        self.delay
    }

    #[must_use]
    pub fn variant_value(&self) -> Option<Variant> {
        self.variant
    }

    #[must_use]
    pub fn position_value(&self) -> Option<Position> {
        self.position
    }

    #[must_use]
    pub fn paused_value(&self) -> Option<bool> {
        self.paused
    }

    pub fn dedupe_key_value(&self) -> Option<&str> {
        self.dedupe_key.as_deref()
    }

    pub fn class_name_value(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Fills unset fields from `defaults`.
    pub(super) fn resolve(self, defaults: &Defaults) -> ResolvedOptions {
        ResolvedOptions {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            delay: self
                .delay
                .unwrap_or(Duration::from_millis(DEFAULT_DELAY_MS)),
            variant: self.variant.unwrap_or(defaults.variant),
            position: self.position.unwrap_or(defaults.position),
            paused: self.paused.unwrap_or(false),
            dedupe_key: self.dedupe_key,
            class_name: self.class_name,
        }
    }
}

/// Options with every field decided.
#[derive(Debug, Clone)]
pub(super) struct ResolvedOptions {
    pub timeout: Duration,
    pub delay: Duration,
    pub variant: Variant,
    pub position: Position,
    pub paused: bool,
    pub dedupe_key: Option<String>,
    pub class_name: Option<String>,
}

/// Untyped options as received from a form, the CLI, or a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

fn non_negative(field: &'static str, value: i64) -> Result<Duration, ValidationError> {
    u64::try_from(value)
        .map(Duration::from_millis)
        .map_err(|_| ValidationError::NegativeDuration { field, value })
}

impl TryFrom<RawOptions> for ToastOptions {
    type Error = ValidationError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        let mut options = ToastOptions::new();
        if let Some(ms) = raw.timeout_ms {
            options = options.timeout(non_negative("timeout", ms)?);
        }
        if let Some(ms) = raw.delay_ms {
            options = options.delay(non_negative("delay", ms)?);
        }
        if let Some(variant) = raw.variant.as_deref() {
            options = options.variant(variant.parse()?);
        }
        if let Some(position) = raw.position.as_deref() {
            options = options.position(position.parse()?);
        }
        if let Some(paused) = raw.pause {
            options = options.pause(paused);
        }
        if let Some(key) = raw.unique_code {
            options = options.dedupe_key(key);
        }
        if let Some(class_name) = raw.class_name {
            options = options.class_name(class_name);
        }
        Ok(options)
    }
}
