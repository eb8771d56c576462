// crates/infra/src/output/formatters/grid.rs
use std::io::Write;

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as Grid, presets::UTF8_FULL};
use multab_domain::Table;
use multab_shared_kernel::Result;

/// Bordered text grid; the top-left header cell is empty.
pub fn output_grid(table: &Table, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", build_grid(table))?;
    Ok(())
}

fn build_grid(table: &Table) -> Grid {
    let mut grid = Grid::new();
    grid.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);

    let header = std::iter::once(Cell::new(""))
        .chain(table.column_labels().iter().map(right))
        .collect::<Vec<_>>();
    grid.set_header(header);

    for row in table.rows() {
        let cells = std::iter::once(right(&row.label))
            .chain(row.cells.iter().map(right))
            .collect::<Vec<_>>();
        grid.add_row(cells);
    }
    grid
}

fn right<T: std::fmt::Display>(value: &T) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
