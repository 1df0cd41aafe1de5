use catalog_record::{FileKind, FileRecord};

/// Sample records seeded at startup so the catalog is not empty on
/// first run. Sizes are pre-formatted strings; the bodies are short
/// placeholders with no underlying bytes.
pub fn demo_records() -> Vec<FileRecord> {
    vec![
        FileRecord::demo(
            "Welcome Document.pdf",
            "1.2 MB",
            FileKind::Pdf,
            "Welcome to the file catalog demo!",
        ),
        FileRecord::demo(
            "Sample Image.jpg",
            "2.5 MB",
            FileKind::Image,
            "Sample image content",
        ),
        FileRecord::demo(
            "Instructions.txt",
            "15 KB",
            FileKind::Text,
            "This is a sample text file for demonstration.",
        ),
        FileRecord::demo(
            "Archive.zip",
            "8.7 MB",
            FileKind::Archive,
            "Sample archive content",
        ),
    ]
}
