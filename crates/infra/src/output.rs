// crates/infra/src/output.rs
pub mod formatters;
mod utils;
mod writer;

use std::{io::Write, path::Path};

use formatters::{output_delimited, output_grid, output_html, output_json, output_markdown};
#[cfg(feature = "yaml")]
use formatters::output_yaml;
use multab_domain::{OutputFormat, Table};
use multab_shared_kernel::Result;

pub use writer::OutputWriter;

/// Write `table` to `out` in the requested format.
pub fn emit(table: &Table, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Table => output_grid(table, out),
        OutputFormat::Csv => output_delimited(table, ',', out),
        OutputFormat::Tsv => output_delimited(table, '\t', out),
        OutputFormat::Json => output_json(table, out),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => output_yaml(table, out),
        #[cfg(not(feature = "yaml"))]
        OutputFormat::Yaml => output_json(table, out),
        OutputFormat::Md => output_markdown(table, out),
        OutputFormat::Html => output_html(table, out),
    }
}

/// Emit to `path`, or to stdout when `None`.
pub fn emit_to(table: &Table, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    let mut writer = OutputWriter::create(path)?;
    emit(table, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}
