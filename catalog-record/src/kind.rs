use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed set of file type tags used for filtering and display.
///
/// Note that [`FileKind::classify`] never yields `Text`: plain-text
/// extensions are tagged `document`, matching the legacy behavior this
/// catalog reproduces. The `text` tag only appears on seeded demo
/// records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Document,
    Text,
    Archive,
    Other,
}

impl FileKind {
    /// Infer the kind from a file name's extension.
    ///
    /// Unrecognized or missing extensions map to `Other`.
    pub fn classify(name: &str) -> Self {
        let ext = name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "pdf" => FileKind::Pdf,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" => FileKind::Image,
            "doc" | "docx" | "txt" | "rtf" => FileKind::Document,
            "zip" | "rar" | "7z" | "tar" | "gz" => FileKind::Archive,
            _ => FileKind::Other,
        }
    }

    /// The lowercase tag, as shown to the user and matched by queries.
    pub fn tag(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Image => "image",
            FileKind::Document => "document",
            FileKind::Text => "text",
            FileKind::Archive => "archive",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for FileKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "image" => Ok(FileKind::Image),
            "document" => Ok(FileKind::Document),
            "text" => Ok(FileKind::Text),
            "archive" => Ok(FileKind::Archive),
            "other" => Ok(FileKind::Other),
            _ => Err(
                "Kind must be one of 'pdf', 'image', 'document', 'text', \
                 'archive' or 'other'",
            ),
        }
    }
}
