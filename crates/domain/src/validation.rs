// crates/domain/src/validation.rs
//! Ordered rule chain for range input.
//!
//! Each rule is applied to every field (row start, row end, column start,
//! column end) before the next rule runs, so the first violated rule decides
//! the message. The combined-span rule only runs once every field-level rule
//! has passed.

use crate::{Field, Limits, RangeInput, RawRangeInput, UncheckedRange, ValidationError};

const INVALID_NUMBER: &str = "Please enter a valid number";

/// Validates the textual form of the four fields.
///
/// # Errors
/// Returns the [`ValidationError`] for the first violated rule.
pub fn validate_raw(raw: &RawRangeInput, limits: &Limits) -> Result<RangeInput, ValidationError> {
    if let Some(field) = Field::ALL.into_iter().find(|&f| raw.get(f).is_none()) {
        return Err(ValidationError::new(field, field.missing_message()));
    }

    let mut values = [0_i64; 4];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        *slot = parse_integer(field, raw.get(field).unwrap_or_default())?;
    }
    let [row_start, row_end, column_start, column_end] = values;
    validate(&UncheckedRange::new(row_start, row_end, column_start, column_end), limits)
}

/// Validates already-parsed integers.
///
/// # Errors
/// Returns the [`ValidationError`] for the first violated rule.
pub fn validate(candidate: &UncheckedRange, limits: &Limits) -> Result<RangeInput, ValidationError> {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|&f| candidate.get(f) < i64::from(limits.min()))
    {
        return Err(ValidationError::new(field, format!("Value must be at least {}", limits.min())));
    }
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|&f| candidate.get(f) > i64::from(limits.max()))
    {
        return Err(ValidationError::new(field, format!("Value must be at most {}", limits.max())));
    }

    if candidate.row_start > candidate.row_end {
        return Err(ValidationError::new(
            Field::RowStart,
            "Row start must be less than or equal to row end",
        ));
    }
    if candidate.column_start > candidate.column_end {
        return Err(ValidationError::new(
            Field::ColumnStart,
            "Column start must be less than or equal to column end",
        ));
    }

    let max_span = i64::from(limits.max_span());
    let row_span = candidate.row_end - candidate.row_start;
    let column_span = candidate.column_end - candidate.column_start;
    if row_span > max_span || column_span > max_span {
        return Err(ValidationError::combined(format!(
            "Range between start and end values cannot exceed {max_span}."
        )));
    }

    Ok(RangeInput::new_unchecked(
        narrow(candidate.row_start, Field::RowStart, limits)?,
        narrow(candidate.row_end, Field::RowEnd, limits)?,
        narrow(candidate.column_start, Field::ColumnStart, limits)?,
        narrow(candidate.column_end, Field::ColumnEnd, limits)?,
    ))
}

fn parse_integer(field: Field, text: &str) -> Result<i64, ValidationError> {
    text.parse::<i64>()
        .map_err(|_| ValidationError::new(field, INVALID_NUMBER))
}

// Bounds are i32, so anything that passed them fits.
fn narrow(value: i64, field: Field, limits: &Limits) -> Result<i32, ValidationError> {
    i32::try_from(value)
        .map_err(|_| ValidationError::new(field, format!("Value must be at most {}", limits.max())))
}
