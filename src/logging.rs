// src/logging.rs
use env_logger::{Builder as EnvLoggerBuilder, Target};
use log::LevelFilter;

/// Maps `-v` repetitions to a level; `RUST_LOG` takes precedence when set.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise the global logger on stderr. Safe to call more than once.
pub fn init(verbosity: u8) {
    let mut builder = EnvLoggerBuilder::from_default_env();
    builder.target(Target::Stderr);
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level_for(verbosity));
    }
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
