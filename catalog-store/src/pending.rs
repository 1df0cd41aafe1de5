use catalog_record::PendingFile;

/// Staging list of files picked but not yet uploaded.
///
/// The selection is replaced wholesale on every pick or drop, and
/// drained wholesale on upload commit or explicit cancel. It is never
/// merged with the catalog.
#[derive(Debug, Default)]
pub struct PendingSelection {
    files: Vec<PendingFile>,
}

impl PendingSelection {
    pub fn new() -> Self {
        PendingSelection::default()
    }

    /// Replace the whole selection with a new pick.
    pub fn replace(&mut self, files: Vec<PendingFile>) {
        log::debug!("Pending selection replaced: {} files", files.len());
        self.files = files;
    }

    /// Drain the selection for an upload commit.
    pub fn take(&mut self) -> Vec<PendingFile> {
        std::mem::take(&mut self.files)
    }

    /// Discard the selection without uploading.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
