// crates/domain/src/table.rs
use serde::Serialize;

use crate::RangeInput;

/// One body row: its label followed by one product per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: i32,
    pub cells: Vec<i64>,
}

/// Product grid for a validated range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    #[serde(skip)]
    range: RangeInput,
    columns: Vec<i32>,
    rows: Vec<TableRow>,
}

/// Builds the table for `input`: one row per row value, one cell per column value, cell = row × column.
pub fn build(input: &RangeInput) -> Table {
    let columns: Vec<i32> = input.columns().collect();
    let rows = input
        .rows()
        .map(|label| TableRow {
            label,
            cells: columns
                .iter()
                .map(|&column| i64::from(label) * i64::from(column))
                .collect(),
        })
        .collect();

    Table { range: *input, columns, rows }
}

impl Table {
    pub const fn range(&self) -> &RangeInput {
        &self.range
    }

    /// Header labels, in column order.
    pub fn column_labels(&self) -> &[i32] {
        &self.columns
    }

    pub fn row_labels(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|r| r.label)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Product at the given row and column *values* (not indices).
    pub fn cell(&self, row: i32, column: i32) -> Option<i64> {
        let r = offset(self.range.row_start(), row)?;
        let c = offset(self.range.column_start(), column)?;
        self.rows.get(r)?.cells.get(c).copied()
    }
}

fn offset(start: i32, value: i32) -> Option<usize> {
    usize::try_from(i64::from(value) - i64::from(start)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Limits, UncheckedRange, validate};

    fn table(rs: i64, re: i64, cs: i64, ce: i64) -> Table {
        let range = validate(&UncheckedRange::new(rs, re, cs, ce), &Limits::default()).expect("valid range");
        build(&range)
    }

    #[test]
    fn labels_and_products() {
        let t = table(2, 4, 3, 5);
        assert_eq!(t.row_labels().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(t.column_labels(), &[3, 4, 5]);
        assert_eq!(t.cell(3, 4), Some(12));
        assert_eq!(t.rows()[0].cells, vec![6, 8, 10]);
        assert_eq!(t.rows()[2].cells, vec![12, 16, 20]);
    }

    #[test]
    fn single_zero_cell() {
        let t = table(0, 0, 0, 0);
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.column_count(), 1);
        assert_eq!(t.cell(0, 0), Some(0));
    }

    #[test]
    fn negative_ranges() {
        let t = table(-50, -48, 49, 50);
        assert_eq!(t.cell(-50, 50), Some(-2500));
        assert_eq!(t.cell(-48, 49), Some(-2352));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let t = table(1, 3, 1, 3);
        assert_eq!(t.cell(0, 1), None);
        assert_eq!(t.cell(1, 4), None);
    }

    #[test]
    fn serializes_columns_and_rows() {
        let value = serde_json::to_value(table(1, 2, 5, 5)).expect("serializes");
        assert_eq!(value["columns"], serde_json::json!([5]));
        assert_eq!(value["rows"][1]["label"], 2);
        assert_eq!(value["rows"][1]["cells"], serde_json::json!([10]));
        assert!(value.get("range").is_none());
    }
}
