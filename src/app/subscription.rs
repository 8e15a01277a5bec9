// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the tick subscription that drives toast timers.
///
/// Only active while a timer is pending, so an idle dashboard does not wake
/// up.
pub fn create_tick_subscription(has_pending_timers: bool, interval: Duration) -> Subscription<Message> {
    if has_pending_timers {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
