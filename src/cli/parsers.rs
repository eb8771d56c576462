// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

/// Largest magnitude accepted for `--min` / `--max`.
pub const LIMIT_MAGNITUDE: i32 = 100_000;
/// Largest accepted `--max-span`; keeps tables printable.
pub const SPAN_CEILING: u32 = 1_000;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a bound for `--min` / `--max`.
///
/// # Errors
/// Returns an error if the input is not an integer or its magnitude exceeds [`LIMIT_MAGNITUDE`].
pub fn parse_limit(s: &str) -> Result<i32, String> {
    parse_bounded_number(s, -LIMIT_MAGNITUDE, Some(LIMIT_MAGNITUDE))
}

/// Parse `--max-span` into the range [0, [`SPAN_CEILING`]].
///
/// # Errors
/// Returns an error if the input is not a non-negative integer within the range.
pub fn parse_span(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 0, Some(SPAN_CEILING))
}
