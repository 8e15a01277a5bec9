// SPDX-License-Identifier: MPL-2.0
//! Async driver for running a manager on a tokio event loop.
//!
//! Meant for a current-thread runtime: the manager is borrowed mutably for
//! the whole run, so nothing else touches it concurrently.

use super::clock::Clock;
use super::manager::Manager;
use super::surface::Surface;

/// Sleeps until each pending timer is due and fires it, returning once no
/// timers remain.
///
/// Returns the total number of timers fired. The manager's clock must agree
/// with tokio's timer, e.g. [`TokioClock`](super::clock::TokioClock).
pub async fn run_until_idle<S, C>(manager: &mut Manager<S, C>) -> usize
where
    S: Surface,
    C: Clock,
{
    let mut fired = 0;
    while let Some(deadline) = manager.next_deadline() {
        tokio::time::sleep_until(deadline.into()).await;
        fired += manager.tick();
    }
    fired
}
