// crates/infra/src/output/formatters/markdown.rs
use std::io::Write;

use multab_domain::Table;
use multab_shared_kernel::Result;

use crate::output::utils::join;

pub fn output_markdown(table: &Table, out: &mut impl Write) -> Result<()> {
    write_markdown_header(table, out)?;
    for row in table.rows() {
        writeln!(out, "| {} | {} |", row.label, join(&row.cells, " | "))?;
    }
    Ok(())
}

fn write_markdown_header(table: &Table, out: &mut impl Write) -> Result<()> {
    writeln!(out, "| × | {} |", join(table.column_labels(), " | "))?;
    let align = vec!["---:"; table.column_count() + 1];
    writeln!(out, "|{}|", align.join("|"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use multab_domain::{Limits, UncheckedRange, build, validate};

    use super::*;

    #[test]
    fn markdown_layout() {
        let range = validate(&UncheckedRange::new(2, 4, 3, 5), &Limits::default()).expect("valid");
        let mut buffer = Vec::new();
        output_markdown(&build(&range), &mut buffer).expect("markdown output succeeds");
        let md = String::from_utf8(buffer).expect("utf8");

        let lines: Vec<_> = md.lines().collect();
        assert_eq!(lines[0], "| × | 3 | 4 | 5 |");
        assert_eq!(lines[1], "|---:|---:|---:|---:|");
        assert_eq!(lines[3], "| 3 | 9 | 12 | 15 |");
        assert_eq!(lines.len(), 5);
    }
}
