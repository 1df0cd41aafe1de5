use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{current_datetime, FileKind, PendingFile, RecordId};

/// Metadata of one cataloged file.
///
/// Records are immutable after creation; there is no update-in-place.
/// A record carries either an inline placeholder `content` (seeded demo
/// data), a `source` path to real bytes (user uploads), or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    id: RecordId,
    name: String,
    size: String,
    kind: FileKind,
    uploaded: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
}

impl FileRecord {
    /// Create a record for a staged user file.
    ///
    /// Assigns a fresh id, formats the size from the raw byte count,
    /// classifies the kind from the name, and keeps the staged path as
    /// the byte-access handle.
    pub fn from_pending(file: &PendingFile) -> Self {
        FileRecord {
            id: RecordId::generate(),
            name: file.name().to_owned(),
            size: file.display_size(),
            kind: FileKind::classify(file.name()),
            uploaded: current_datetime(),
            content: None,
            source: Some(file.path().to_path_buf()),
        }
    }

    /// Create a synthetic record with a pre-formatted size, an explicit
    /// kind tag and an inline placeholder body. Used for demo seeding.
    pub fn demo(
        name: &str,
        size: &str,
        kind: FileKind,
        content: &str,
    ) -> Self {
        FileRecord {
            id: RecordId::generate(),
            name: name.to_owned(),
            size: size.to_owned(),
            kind,
            uploaded: current_datetime(),
            content: Some(content.to_owned()),
            source: None,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pre-formatted display size, e.g. "1.2 MB".
    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Display-formatted upload date/time.
    pub fn uploaded(&self) -> &str {
        &self.uploaded
    }

    /// Inline placeholder body, present on demo records only.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Path to the real bytes, present on uploaded records only.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_size;

    #[test]
    fn demo_record_has_inline_content_and_no_source() {
        let record = FileRecord::demo(
            "Welcome Document.pdf",
            "1.2 MB",
            FileKind::Pdf,
            "Welcome!",
        );
        assert_eq!(record.name(), "Welcome Document.pdf");
        assert_eq!(record.size(), "1.2 MB");
        assert_eq!(record.kind(), FileKind::Pdf);
        assert_eq!(record.content(), Some("Welcome!"));
        assert!(record.source().is_none());
    }

    #[test]
    fn demo_records_get_distinct_ids() {
        let a = FileRecord::demo("a.txt", "1 KB", FileKind::Text, "");
        let b = FileRecord::demo("a.txt", "1 KB", FileKind::Text, "");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn size_formatting_matches_upload_path() {
        assert_eq!(format_size(1_258_291), "1.2 MB");
        assert_eq!(format_size(15_360), "15.0 KB");
    }
}
