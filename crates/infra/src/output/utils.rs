// crates/infra/src/output/utils.rs
use std::fmt::Display;

/// Joins displayable values with `sep`.
pub(crate) fn join<T: Display>(values: impl IntoIterator<Item = T>, sep: &str) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
