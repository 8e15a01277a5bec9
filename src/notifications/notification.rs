// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` value created for every
//! [`Manager::show`](super::Manager::show) call, the `Kind` enum selecting
//! its accent, and the `ShowOptions` bag callers fill in.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::time::{Duration, Instant};

/// Title used when the caller leaves it empty.
pub const DEFAULT_TITLE: &str = "Notification";

/// Message used when the caller leaves it empty.
pub const DEFAULT_MESSAGE: &str = "This is a notification message";

/// Unique identifier for a notification.
///
/// Allocated by the owning manager from a monotonically increasing counter,
/// so an id is never handed out twice while that manager is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Presentational kind; selects the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Something went wrong.
    Error,
    /// Needs attention but did not fail.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

impl Kind {
    /// All kinds in the order the demo buttons show them.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Info, Kind::Warning];

    /// Parses a kind name, falling back to [`Kind::Info`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    /// Lowercase name, as accepted by [`Kind::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// Glyph drawn in the toast's icon slot.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✔",
            Kind::Error => "✖",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
        }
    }
}

impl From<String> for Kind {
    fn from(name: String) -> Self {
        Kind::from_name(&name)
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Kind::from_name(name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of a stored notification.
///
/// Removed notifications are dropped from the manager, so there is no
/// `Removed` variant: absence is the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    /// Visible, with a pending auto-dismiss timer.
    Active,
    /// Playing its exit animation, removal pending.
    Closing,
}

/// Display request passed to [`Manager::show`](super::Manager::show).
///
/// Every field is optional; missing or degenerate values are replaced by
/// defaults instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowOptions {
    kind: Option<Kind>,
    title: Option<String>,
    message: Option<String>,
    #[serde(rename = "duration_ms", deserialize_with = "deserialize_duration_ms")]
    duration: Option<Duration>,
}

impl ShowOptions {
    /// Creates an empty option bag (an info toast with default texts).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the given kind, title and message.
    pub fn with_text(kind: Kind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new().kind(kind).title(title).message(message)
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the auto-dismiss delay. A zero duration means "use the default",
    /// as does one too large to schedule.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = (!duration.is_zero()).then_some(duration);
        self
    }

    /// Sets the auto-dismiss delay in milliseconds; values `<= 0` mean
    /// "use the default".
    #[must_use]
    pub fn duration_ms(mut self, millis: i64) -> Self {
        self.duration = positive_millis(millis);
        self
    }

    /// Fills every missing field from the defaults.
    pub(crate) fn resolve(self, default_duration: Duration) -> Resolved {
        Resolved {
            kind: self.kind.unwrap_or_default(),
            title: non_blank(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: non_blank(self.message).unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            duration: self.duration.unwrap_or(default_duration),
        }
    }
}

/// `ShowOptions` after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolved {
    pub kind: Kind,
    pub title: String,
    pub message: String,
    pub duration: Duration,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn positive_millis(millis: i64) -> Option<Duration> {
    u64::try_from(millis)
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

fn deserialize_duration_ms<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(positive_millis))
}

/// A notification owned by the manager.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    message: String,
    duration: Duration,
    shown_at: Instant,
    state: NotificationState,
}

impl Notification {
    pub(crate) fn new(id: NotificationId, resolved: Resolved, shown_at: Instant) -> Self {
        Self {
            id,
            kind: resolved.kind,
            title: resolved.title,
            message: resolved.message,
            duration: resolved.duration,
            shown_at,
            state: NotificationState::Active,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Auto-dismiss delay after defaults were applied.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn state(&self) -> NotificationState {
        self.state
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.state == NotificationState::Closing
    }

    pub(crate) fn begin_closing(&mut self) {
        self.state = NotificationState::Closing;
    }

    /// Fraction of the auto-dismiss delay still left at `now`, in `[0, 1]`.
    ///
    /// Drives the shrinking progress bar under each toast. Closing
    /// notifications report `0.0`.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        if self.is_closing() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        let fraction = 1.0 - elapsed.as_secs_f32() / self.duration.as_secs_f32();
        fraction.clamp(0.0, 1.0)
    }
}
