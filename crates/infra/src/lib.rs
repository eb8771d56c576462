// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod persistence;
pub mod renderer;

pub use output::emit;
pub use renderer::FormatRenderer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
