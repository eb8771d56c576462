// crates/infra/src/output/writer.rs
use std::{io::Write, path::Path};

use multab_shared_kernel::InfraResult;

use crate::persistence::FileWriter;

/// Destination for rendered output: a file when a path is configured, stdout otherwise.
pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub fn create(path: Option<&Path>) -> InfraResult<Self> {
        let writer: Box<dyn Write> = if let Some(path) = path {
            log::debug!("writing output to {}", path.display());
            Box::new(FileWriter::create(path)?)
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}
