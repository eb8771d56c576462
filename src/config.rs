// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use multab_domain::{Limits, OutputFormat, RawRangeInput};

/// Resolved settings for one invocation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub limits: Limits,
    #[builder(default)]
    pub interactive: bool,
    /// Ignored in interactive mode.
    #[builder(default)]
    pub input: RawRangeInput,
    #[builder(default)]
    pub verbosity: u8,
}
