// SPDX-License-Identifier: MPL-2.0
//! Scripted run without a window.
//!
//! Shows the four demo notifications, closes one early and drives the rest
//! to completion on a current-thread tokio runtime. Every surface operation
//! is reported through `tracing`.

use crate::app::{config, demo, paths, Flags};
use crate::error::Result;
use crate::notifications::{driver, Kind, LogSurface, Manager, Surface, TokioClock};
use std::time::Duration;

/// Delay before the scripted early close.
const EARLY_CLOSE_AFTER: Duration = Duration::from_millis(1000);

/// Runs the scripted session and returns the number of timers fired.
pub fn run(flags: Flags) -> Result<usize> {
    paths::init_cli_override(flags.config_dir);
    let (config, config_warning) = config::load();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let settings = config.notifications.manager_settings();
    let fired = runtime.block_on(async move {
        let mut manager = Manager::with_clock(LogSurface::new(), TokioClock, settings);
        if let Some(warning) = config_warning {
            manager.show(demo::config_warning(warning));
        }
        script(&mut manager).await
    });

    tracing::info!(fired, "headless session finished");
    Ok(fired)
}

/// Shows every demo, closes the error toast early, then waits for all
/// timers to fire.
pub async fn script<S: Surface>(manager: &mut Manager<S, TokioClock>) -> usize {
    let ids: Vec<_> = Kind::ALL
        .iter()
        .map(|kind| (*kind, manager.show(demo::demo_options(*kind))))
        .collect();

    tokio::time::sleep(EARLY_CLOSE_AFTER).await;
    let mut fired = manager.tick();

    if let Some((_, id)) = ids.iter().find(|(kind, _)| *kind == Kind::Error) {
        manager.close(*id);
    }

    fired += driver::run_until_idle(manager).await;
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{ManagerSettings, RecordingSurface};

    #[tokio::test(start_paused = true)]
    async fn script_drains_every_timer() {
        let mut manager =
            Manager::with_clock(RecordingSurface::new(), TokioClock, ManagerSettings::default());
        let start = tokio::time::Instant::now();

        let fired = script(&mut manager).await;

        // Three auto-dismiss timers and four removals; the early close
        // skipped one auto-dismiss.
        assert_eq!(fired, 7);
        assert!(manager.is_empty());
        assert!(manager.surface().visible().is_empty());
        // 5000ms display + 300ms grace for the longest-lived toasts
        assert_eq!(start.elapsed(), Duration::from_millis(5300));
    }
}
