// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: timeout and delay applied when options leave them unset
//! - **Logging**: default tracing filter

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss timeout (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Default delay before a toast becomes visible (in milliseconds).
pub const DEFAULT_DELAY_MS: u64 = 0;

/// Largest timeout accepted from the settings file (one day, in milliseconds).
pub const MAX_TIMEOUT_MS: u64 = 86_400_000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive when neither `RUST_LOG` nor the
/// settings file provide one.
pub const DEFAULT_LOG_FILTER: &str = "info";
