// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (profile saved, payment failed, theme changed...) without blocking
//! interaction. Each one auto-dismisses after its duration or can be closed
//! early; either way it plays a short closing treatment before it is removed.
//!
//! # Components
//!
//! - [`notification`] - `Notification` value, `Kind` and `ShowOptions`
//! - [`manager`] - `Manager` owning the lifecycle and the timers
//! - [`timers`] - single-threaded timer queue
//! - [`surface`] - render surface contract and headless implementations
//! - [`clock`] - time sources (wall clock, manual, tokio)
//! - [`driver`] - async loop driving a manager on tokio
//!
//! # Usage
//!
//! ```
//! use toastboard::notifications::{Kind, Manager, RecordingSurface, ShowOptions};
//!
//! let mut manager = Manager::new(RecordingSurface::new());
//! let id = manager.show(ShowOptions::with_text(Kind::Success, "Saved", "Profile updated"));
//!
//! // Close early; the toast is removed once the grace period has elapsed.
//! manager.close(id);
//! ```
//!
//! The owner is expected to call [`Manager::tick`] periodically (or use
//! [`driver::run_until_idle`]) so timers can fire.

pub mod clock;
pub mod driver;
pub mod manager;
pub mod notification;
pub mod surface;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use manager::{Manager, ManagerSettings, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, NotificationState, ShowOptions};
pub use surface::{LogSurface, RecordingSurface, Surface, SurfaceOp};
