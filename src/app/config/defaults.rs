// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Timing Defaults
// ==========================================================================

// Owned by the notification core.
pub use crate::notifications::manager::{
    DEFAULT_DURATION_MS, DEFAULT_GRACE_PERIOD_MS, MAX_DURATION_MS, MAX_GRACE_PERIOD_MS,
    MIN_DURATION_MS,
};

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the UI tick that fires due timers (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Fastest allowed tick (roughly one frame at 60 Hz).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Slowest allowed tick.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Caller Defaults
// ==========================================================================

/// Display time of the demo notifications (in milliseconds).
pub const DEMO_DURATION_MS: i64 = 5000;

/// Display time of the "theme changed" notification (in milliseconds).
pub const THEME_NOTICE_DURATION_MS: i64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_MS <= DEFAULT_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(DEFAULT_GRACE_PERIOD_MS <= MAX_GRACE_PERIOD_MS);
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
