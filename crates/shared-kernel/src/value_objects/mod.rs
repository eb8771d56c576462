// crates/shared-kernel/src/value_objects/mod.rs
pub mod field;

pub use field::{Axis, Field};
