//! Logger setup for the binary
//!
//! The library only logs through the `log` facade; this wires up
//! `env_logger` once at startup.

use log::LevelFilter;

/// Map repeated `-v` flags to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .parse_default_env();

    // A logger may already be installed (e.g. by tests); keep it
    builder.try_init().ok();
}
