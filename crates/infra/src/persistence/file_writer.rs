// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use multab_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, creating missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> InfraResult<BufWriter<File>> {
        let path = path.as_ref();
        let wrap = |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
        File::create(path).map(BufWriter::new).map_err(wrap)
    }
}
