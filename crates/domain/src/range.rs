// crates/domain/src/range.rs
use serde::{Deserialize, Serialize};

use crate::Field;

/// The four fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRangeInput {
    pub row_start: Option<String>,
    pub row_end: Option<String>,
    pub column_start: Option<String>,
    pub column_end: Option<String>,
}

impl RawRangeInput {
    pub fn new(
        row_start: impl Into<String>,
        row_end: impl Into<String>,
        column_start: impl Into<String>,
        column_end: impl Into<String>,
    ) -> Self {
        Self {
            row_start: Some(row_start.into()),
            row_end: Some(row_end.into()),
            column_start: Some(column_start.into()),
            column_end: Some(column_end.into()),
        }
    }

    /// Builds an input from up to four whitespace-separated tokens; missing tokens stay `None`.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tokens = tokens.into_iter().map(str::to_string);
        Self {
            row_start: tokens.next(),
            row_end: tokens.next(),
            column_start: tokens.next(),
            column_end: tokens.next(),
        }
    }

    /// Trimmed value of `field`; blank counts as absent.
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::RowStart => &self.row_start,
            Field::RowEnd => &self.row_end,
            Field::ColumnStart => &self.column_start,
            Field::ColumnEnd => &self.column_end,
        };
        slot.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Parsed integers that have not been through the rule chain yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UncheckedRange {
    pub row_start: i64,
    pub row_end: i64,
    pub column_start: i64,
    pub column_end: i64,
}

impl UncheckedRange {
    pub const fn new(row_start: i64, row_end: i64, column_start: i64, column_end: i64) -> Self {
        Self { row_start, row_end, column_start, column_end }
    }

    pub const fn get(&self, field: Field) -> i64 {
        match field {
            Field::RowStart => self.row_start,
            Field::RowEnd => self.row_end,
            Field::ColumnStart => self.column_start,
            Field::ColumnEnd => self.column_end,
        }
    }
}

/// A range that passed validation. Only [`crate::validate`] and
/// [`crate::validate_raw`] construct it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeInput {
    row_start: i32,
    row_end: i32,
    column_start: i32,
    column_end: i32,
}

impl RangeInput {
    pub(crate) const fn new_unchecked(row_start: i32, row_end: i32, column_start: i32, column_end: i32) -> Self {
        Self { row_start, row_end, column_start, column_end }
    }

    #[inline]
    pub const fn row_start(&self) -> i32 {
        self.row_start
    }

    #[inline]
    pub const fn row_end(&self) -> i32 {
        self.row_end
    }

    #[inline]
    pub const fn column_start(&self) -> i32 {
        self.column_start
    }

    #[inline]
    pub const fn column_end(&self) -> i32 {
        self.column_end
    }

    pub fn rows(&self) -> std::ops::RangeInclusive<i32> {
        self.row_start..=self.row_end
    }

    pub fn columns(&self) -> std::ops::RangeInclusive<i32> {
        self.column_start..=self.column_end
    }

    /// Number of rows; at least 1.
    pub fn row_count(&self) -> usize {
        span_len(self.row_start, self.row_end)
    }

    /// Number of columns; at least 1.
    pub fn column_count(&self) -> usize {
        span_len(self.column_start, self.column_end)
    }
}

fn span_len(start: i32, end: i32) -> usize {
    usize::try_from(i64::from(end) - i64::from(start) + 1).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_read_as_absent() {
        let raw = RawRangeInput {
            row_start: Some("  ".into()),
            row_end: Some(" 7 ".into()),
            column_start: None,
            column_end: Some(String::new()),
        };
        assert_eq!(raw.get(Field::RowStart), None);
        assert_eq!(raw.get(Field::RowEnd), Some("7"));
        assert_eq!(raw.get(Field::ColumnStart), None);
        assert_eq!(raw.get(Field::ColumnEnd), None);
    }

    #[test]
    fn from_tokens_fills_in_order() {
        let raw = RawRangeInput::from_tokens("1 2 3".split_whitespace());
        assert_eq!(raw.get(Field::RowStart), Some("1"));
        assert_eq!(raw.get(Field::ColumnStart), Some("3"));
        assert_eq!(raw.get(Field::ColumnEnd), None);
    }

    #[test]
    fn counts_are_inclusive() {
        let range = RangeInput::new_unchecked(-2, 2, 5, 5);
        assert_eq!(range.row_count(), 5);
        assert_eq!(range.column_count(), 1);
        assert_eq!(range.rows().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
    }
}
