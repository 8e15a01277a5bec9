// SPDX-License-Identifier: MPL-2.0
//! Tracing setup.
//!
//! `RUST_LOG` takes precedence; otherwise `--debug` selects `debug` for this
//! crate and `info` is used by default.

use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(debug: bool) {
    let fallback = if debug { "warn,toastboard=debug" } else { "warn,toastboard=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
    {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
