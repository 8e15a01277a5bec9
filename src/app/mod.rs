// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard and the
//! toast notifications.
//!
//! The `App` struct wires together the notification manager, the theme and
//! persisted preferences. This file intentionally keeps policy decisions
//! (timer cadence, persistence, notice wording) close to the main update
//! loop so it is easy to audit user-facing behavior.

pub mod config;
pub mod demo;
pub mod headless;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::notifications::{Manager, NotificationMessage, SystemClock};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::ToastLayer;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = (sizing::PANEL_WIDTH + sizing::TOAST_WIDTH) as u32;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state.
pub struct App {
    notifications: Manager<ToastLayer>,
    theme_mode: ThemeMode,
    config: config::Config,
    tick_interval: Duration,
    /// Last observed tick; drives the progress bars.
    now: Instant,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the persisted settings.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = App {
            notifications: Manager::with_clock(
                ToastLayer::new(),
                SystemClock,
                config.notifications.manager_settings(),
            ),
            theme_mode: config.general.theme_mode,
            tick_interval: config.notifications.tick_interval(),
            config,
            now: Instant::now(),
        };

        // Show warnings for config loading issues
        if let Some(warning) = config_warning {
            app.notifications.show(demo::config_warning(warning));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Toastboard".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_pending_timers(),
            self.tick_interval,
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::ShowDemo(kind) => {
                self.notifications.show(demo::demo_options(kind));
            }
            Message::ShowSystemNotice => {
                self.notifications.show(demo::system_notice());
            }
            Message::ToggleTheme => self.toggle_theme(),
            Message::Tick(now) => {
                self.now = now;
                self.notifications.handle_message(&NotificationMessage::Tick);
            }
        }
        Task::none()
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.config.general.theme_mode = self.theme_mode;

        if let Err(err) = config::save(&self.config) {
            tracing::warn!(%err, "failed to persist theme mode");
            self.notifications.show(demo::config_warning(err.to_string()));
        }

        self.notifications.show(demo::theme_notice(self.theme_mode));
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: self.notifications.surface(),
            theme_mode: self.theme_mode,
            active_count: self.notifications.len(),
            now: self.now,
        })
    }
}
