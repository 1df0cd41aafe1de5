use std::{
    fs,
    path::{Path, PathBuf},
};

use catalog_error::{CatalogError, Result};

use crate::format_size;

/// A file that has been picked but not yet committed to the catalog.
///
/// Holds the display name, the raw byte size, and the path acting as
/// the byte-access handle for the eventual download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    name: String,
    len: u64,
    path: PathBuf,
}

impl PendingFile {
    /// Stage a file from the host file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(CatalogError::NotAFile(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CatalogError::NotAFile(path.display().to_string())
            })?;

        log::debug!("Staged {:?} ({} bytes)", path, metadata.len());

        Ok(PendingFile {
            name,
            len: metadata.len(),
            path: path.to_path_buf(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw byte size of the underlying file.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte-access handle used for download after upload.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The size string the record will carry once uploaded.
    pub fn display_size(&self) -> String {
        format_size(self.len)
    }
}
