// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

pub use args::Args;
use clap::Parser;
use multab_domain::{Limits, RawRangeInput};
use multab_shared_kernel::{PresentationError, Result};
pub use value_enum::CliOutputFormat;

use crate::config::{Config, ConfigBuilder};

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the limit flags are inconsistent or the config cannot be built.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(args)
}

/// Convert parsed CLI arguments into a configuration.
///
/// # Errors
///
/// Returns [`PresentationError::InvalidValue`] when `--min` exceeds `--max`.
pub fn build_config(args: Args) -> Result<Config> {
    let limits = Limits::new(args.min, args.max, args.max_span).map_err(|err| {
        PresentationError::InvalidValue {
            flag: "--min/--max".to_string(),
            value: format!("{}/{}", args.min, args.max),
            reason: err.to_string(),
        }
    })?;

    let input = RawRangeInput {
        row_start: args.row_start,
        row_end: args.row_end,
        column_start: args.column_start,
        column_end: args.column_end,
    };

    ConfigBuilder::default()
        .format(args.format)
        .output(args.output)
        .limits(limits)
        .interactive(args.interactive)
        .input(input)
        .verbosity(args.verbose)
        .build()
        .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
}
