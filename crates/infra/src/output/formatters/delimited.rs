// crates/infra/src/output/formatters/delimited.rs
use std::io::Write;

use multab_domain::Table;
use multab_shared_kernel::Result;

use crate::output::utils::join;

/// CSV/TSV: an empty corner field, then column labels; each row is its label followed by products.
pub fn output_delimited(table: &Table, sep: char, out: &mut impl Write) -> Result<()> {
    let sep = sep.to_string();
    writeln!(out, "{sep}{}", join(table.column_labels(), &sep))?;
    for row in table.rows() {
        writeln!(out, "{}{sep}{}", row.label, join(&row.cells, &sep))?;
    }
    Ok(())
}
