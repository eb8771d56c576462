//! # Domain
//!
//! Range validation and multiplication-table construction.
//!
//! - [`limits`]: bounds and maximum span the validator enforces
//! - [`range`]: raw user input and the validated [`RangeInput`]
//! - [`validation`]: the ordered rule chain producing a [`RangeInput`]
//! - [`table`]: the product grid built from a validated range
//! - [`options`]: presentation choices carried alongside a table
//!
//! Everything here is pure; no I/O and no logging.

#![allow(clippy::multiple_crate_versions)]

pub mod limits;
pub mod options;
pub mod range;
pub mod table;
pub mod validation;

pub use limits::Limits;
pub use options::OutputFormat;
pub use multab_shared_kernel::{Axis, Field, ValidationError};
pub use range::{RangeInput, RawRangeInput, UncheckedRange};
pub use table::{Table, TableRow, build};
pub use validation::{validate, validate_raw};
