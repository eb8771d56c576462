//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`session`]: the submission state machine holding the current output
//! - [`orchestrator`]: validate, build, then hand the table to a renderer
//! - [`dto`]: outcome values crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod session;

pub use dto::Outcome;
pub use orchestrator::GenerateTable;
pub use session::TableSession;
