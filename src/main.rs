// SPDX-License-Identifier: MPL-2.0
use toastboard::app::{self, Flags};
use toastboard::logging;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let debug = args.contains("--debug");
    let headless = args.contains("--headless");
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("toastboard: {err}");
            std::process::exit(2);
        }
    };

    logging::init(debug);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    let flags = Flags { config_dir };

    if headless {
        if let Err(err) = app::headless::run(flags) {
            tracing::error!(%err, "headless session failed");
            std::process::exit(1);
        }
        return Ok(());
    }

    app::run(flags)
}
