// SPDX-License-Identifier: MPL-2.0
//! Toast playground.
//!
//! Takes the same options as the documentation form, prints the matching
//! usage snippet, then plays the toast's lifecycle back on a manual clock.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tiny_toast::config::{self, Config};
use tiny_toast::error::Result;
use tiny_toast::notifications::{Event, ManualClock, Manager, RawOptions, ToastOptions};
use tiny_toast::snippet;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: tiny_toast [OPTIONS] [MESSAGE]

Options:
  --timeout MS        Auto-dismiss timeout (0 keeps the toast)
  --delay MS          Delay before the toast appears
  --variant NAME      default | success | warning | danger | info
  --position NAME     top-left | top-center | top-right |
                      bottom-left | bottom-center | bottom-right
  --pause             Start paused
  --unique-code KEY   Suppress duplicates carrying the same key
  --class-name NAME   Style hint passed to the renderer
  --sticky            Show a paused toast closed by the user
  --run-for MS        Playback length (default: until dismissed, max 60000)
  --step MS           Playback tick (default: 100)
  --config-dir DIR    Read settings.toml from DIR
  -h, --help          Print this help";

const DEFAULT_STEP_MS: u64 = 100;
const MAX_RUN_MS: u64 = 60_000;

struct Flags {
    raw: RawOptions,
    message: Option<String>,
    sticky: bool,
    run_for: Option<u64>,
    step: u64,
    config_dir: Option<String>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let raw = RawOptions {
        timeout_ms: args.opt_value_from_str("--timeout")?,
        delay_ms: args.opt_value_from_str("--delay")?,
        variant: args.opt_value_from_str("--variant")?,
        position: args.opt_value_from_str("--position")?,
        pause: args.contains("--pause").then_some(true),
        unique_code: args.opt_value_from_str("--unique-code")?,
        class_name: args.opt_value_from_str("--class-name")?,
    };
    let sticky = args.contains("--sticky");
    let run_for = args.opt_value_from_str("--run-for")?;
    let step = args
        .opt_value_from_str("--step")?
        .unwrap_or(DEFAULT_STEP_MS)
        .max(1);
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let message = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        raw,
        message,
        sticky,
        run_for,
        step,
        config_dir,
    }))
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter_or_default()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(flags: Flags, config: &Config) -> Result<()> {
    let mut options = ToastOptions::try_from(flags.raw)?;
    if flags.sticky {
        options = options.pause(true);
    }

    let defaults = config.toast.to_defaults();
    let timeout = options.timeout_value().unwrap_or(defaults.timeout);
    let message = flags
        .message
        .unwrap_or_else(|| format!("Toast which dismisses in {} ms", timeout.as_millis()));

    let code = if flags.sticky {
        snippet::render_sticky(&message, options.class_name_value())
    } else {
        snippet::render(&message, &options)
    };
    println!("{code}\n");

    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone()).with_defaults(defaults);
    let observer_clock = clock.clone();
    manager.subscribe(move |event: &Event| {
        if event.changes_visibility() {
            info!(at_ms = observer_clock.now_ms(), ?event, "toast visibility changed");
        }
    });

    let id = manager.show(message, options);
    let run_for = flags.run_for.unwrap_or(MAX_RUN_MS).min(MAX_RUN_MS);
    let step = Duration::from_millis(flags.step);

    while !manager.is_empty() && clock.now_ms() < run_for {
        clock.advance(step);
        manager.poll();
    }

    if manager.contains(id) {
        if flags.sticky {
            info!("closing sticky toast");
        } else {
            warn!(at_ms = clock.now_ms(), "toast still visible when playback ended");
        }
        manager.remove(id);
    }
    Ok(())
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
    init_tracing(&config);
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    match run(flags, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "playback failed");
            ExitCode::FAILURE
        }
    }
}
