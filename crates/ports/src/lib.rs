//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`render`]: presentation of a computed table
//!
//! The use case layer talks to output only through these traits.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod render;

pub use render::TableRenderer;
