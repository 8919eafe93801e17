//! Logger setup for the `isola` binary.
//!
//! Library code only talks to the `log` facade; nothing is printed unless a
//! logger is installed here.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map the number of `-v` flags to a level filter.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install `env_logger` on stderr. `RUST_LOG` applies when no `-v` flag was
/// given; otherwise the flags win. Calling this twice is harmless.
pub fn initialize(verbosity: u8) {
	let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
	if verbosity > 0 {
		builder.filter_level(level_for(verbosity));
	}
	builder.format_timestamp(None);
	let _ = builder.try_init();
}
