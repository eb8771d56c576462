// crates/infra/src/renderer.rs
use std::path::PathBuf;

use multab_domain::{OutputFormat, Table};
use multab_ports::TableRenderer;
use multab_shared_kernel::{ErrorContext, Result};

use crate::output::emit_to;

/// Renders tables in a fixed format to stdout or to a file.
///
/// The file is recreated on every call, so it always holds the latest table.
#[derive(Debug, Clone)]
pub struct FormatRenderer {
    format: OutputFormat,
    output: Option<PathBuf>,
}

impl FormatRenderer {
    pub fn new(format: OutputFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }
}

impl TableRenderer for FormatRenderer {
    fn render(&self, table: &Table) -> Result<()> {
        emit_to(table, self.format, self.output.as_deref())
            .with_context(|| format!("rendering {:?} output", self.format))
    }
}
