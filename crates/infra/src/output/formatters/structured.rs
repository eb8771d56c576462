// crates/infra/src/output/formatters/structured.rs
use std::io::Write;

use multab_domain::{RangeInput, Table, TableRow};
use multab_shared_kernel::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    range: &'a RangeInput,
    columns: &'a [i32],
    rows: &'a [TableRow],
}

impl<'a> JsonOutput<'a> {
    fn new(table: &'a Table) -> Self {
        Self {
            version: crate::VERSION,
            range: table.range(),
            columns: table.column_labels(),
            rows: table.rows(),
        }
    }
}

pub fn output_json(table: &Table, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonOutput::new(table))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub fn output_yaml(table: &Table, out: &mut impl Write) -> Result<()> {
    let yaml_str = serde_yaml::to_string(&JsonOutput::new(table))?;
    write!(out, "{yaml_str}")?;
    Ok(())
}
