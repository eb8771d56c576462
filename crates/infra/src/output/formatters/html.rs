// crates/infra/src/output/formatters/html.rs
use std::io::Write;

use multab_domain::Table;
use multab_shared_kernel::Result;

/// `<table>` fragment: a header row led by an empty `<th>`, then one `<tr>` per row
/// with a `<th>` label and `<td>` products.
pub fn output_html(table: &Table, out: &mut impl Write) -> Result<()> {
    writeln!(out, r#"<table aria-label="Multiplication Table">"#)?;

    write!(out, "  <tr><th></th>")?;
    for column in table.column_labels() {
        write!(out, "<th>{column}</th>")?;
    }
    writeln!(out, "</tr>")?;

    for row in table.rows() {
        write!(out, "  <tr><th>{}</th>", row.label)?;
        for cell in &row.cells {
            write!(out, "<td>{cell}</td>")?;
        }
        writeln!(out, "</tr>")?;
    }

    writeln!(out, "</table>")?;
    Ok(())
}
