// SPDX-License-Identifier: MPL-2.0
//! Canned notifications raised by the dashboard controls.

use crate::app::config::{DEMO_DURATION_MS, THEME_NOTICE_DURATION_MS};
use crate::notifications::{Kind, ShowOptions};
use crate::ui::theming::ThemeMode;

/// Options for the demo button of `kind`.
#[must_use]
pub fn demo_options(kind: Kind) -> ShowOptions {
    let (title, message) = match kind {
        Kind::Success => ("Success!", "Operation completed successfully."),
        Kind::Error => ("Error!", "Something went wrong. Please try again."),
        Kind::Info => ("Information", "This is an informational message."),
        Kind::Warning => ("Warning!", "Please be careful with this action."),
    };
    ShowOptions::with_text(kind, title, message).duration_ms(DEMO_DURATION_MS)
}

/// Options for the header's notification button.
#[must_use]
pub fn system_notice() -> ShowOptions {
    ShowOptions::with_text(
        Kind::Info,
        "Notification System",
        "This is a demo notification from the system.",
    )
    .duration_ms(DEMO_DURATION_MS)
}

/// Announces a theme switch. `mode` is the newly selected mode.
#[must_use]
pub fn theme_notice(mode: ThemeMode) -> ShowOptions {
    let label = if mode.is_dark() { "Dark" } else { "Light" };
    ShowOptions::with_text(
        Kind::Info,
        "Theme Changed",
        format!("Switched to {label} Mode"),
    )
    .duration_ms(THEME_NOTICE_DURATION_MS)
}

/// Surfaces a settings problem found at startup. Uses the default duration.
#[must_use]
pub fn config_warning(warning: impl Into<String>) -> ShowOptions {
    ShowOptions::with_text(Kind::Warning, "Settings", warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Manager, ManualClock, ManagerSettings, RecordingSurface};
    use std::time::Duration;

    #[test]
    fn every_kind_has_a_distinct_demo() {
        let clock = ManualClock::new();
        let mut manager =
            Manager::with_clock(RecordingSurface::new(), clock, ManagerSettings::default());

        let titles: Vec<String> = Kind::ALL
            .iter()
            .map(|kind| {
                let id = manager.show(demo_options(*kind));
                let shown = manager.get(id).expect("just shown");
                assert_eq!(shown.kind(), *kind);
                assert_eq!(shown.duration(), Duration::from_millis(5000));
                shown.title().to_string()
            })
            .collect();

        for (i, a) in titles.iter().enumerate() {
            for b in &titles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn theme_notice_names_the_new_mode() {
        let clock = ManualClock::new();
        let mut manager =
            Manager::with_clock(RecordingSurface::new(), clock, ManagerSettings::default());

        let dark = manager.show(theme_notice(ThemeMode::Dark));
        let light = manager.show(theme_notice(ThemeMode::Light));

        let dark = manager.get(dark).expect("dark notice");
        assert_eq!(dark.title(), "Theme Changed");
        assert_eq!(dark.message(), "Switched to Dark Mode");
        assert_eq!(dark.duration(), Duration::from_millis(2000));
        assert_eq!(
            manager.get(light).expect("light notice").message(),
            "Switched to Light Mode"
        );
    }

    #[test]
    fn config_warning_falls_back_to_default_duration() {
        let clock = ManualClock::new();
        let settings = ManagerSettings::from_millis(8000, 300);
        let mut manager = Manager::with_clock(RecordingSurface::new(), clock, settings);

        let id = manager.show(config_warning("bad theme"));
        let shown = manager.get(id).expect("warning shown");
        assert_eq!(shown.kind(), Kind::Warning);
        assert_eq!(shown.duration(), Duration::from_millis(8000));
    }
}
