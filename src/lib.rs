// SPDX-License-Identifier: MPL-2.0
//! `toastboard` is a toast notification manager for a dashboard, with an Iced
//! front end.
//!
//! The [`notifications`] module holds the UI-agnostic core: a manager that
//! shows, auto-dismisses and removes transient notifications through a
//! pluggable render surface and clock. [`ui`] and [`app`] provide the Iced
//! dashboard that drives it.

#![doc(html_root_url = "https://docs.rs/toastboard/0.1.0")]

pub mod app;
pub mod error;
pub mod logging;
pub mod notifications;
pub mod ui;
