// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notifications::{Kind, NotificationMessage};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Toast interactions are
/// forwarded to the notification manager unchanged.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    /// One of the demo buttons was pressed.
    ShowDemo(Kind),
    /// The header's notification button was pressed.
    ShowSystemNotice,
    ToggleTheme,
    Tick(Instant), // Periodic tick firing due toast timers
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOASTBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
