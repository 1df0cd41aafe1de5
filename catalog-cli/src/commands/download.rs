use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use catalog_error::CatalogError;
use catalog_record::FileRecord;

use crate::app::App;
use crate::commands::parse_id;
use crate::error::AppError;
use crate::notice::{notice, Severity};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "download", about = "Save a record's bytes to disk")]
pub struct Download {
    #[clap(help = "Id of the record to download")]
    id: String,
    #[clap(value_parser, help = "Destination directory (defaults to the current one)")]
    dir: Option<PathBuf>,
}

impl Download {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        let id = parse_id(&self.id)?;
        let record = app
            .catalog
            .find(&id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))?;

        notice(
            Severity::Info,
            &format!("Downloading {}...", record.name()),
        );

        let dir = self.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let destination = dir.join(record.name());
        transfer(record, &destination)?;

        notice(
            Severity::Success,
            &format!("Saved to {}", destination.display()),
        );
        Ok(())
    }
}

/// Write the record's payload to `destination`.
///
/// Uploaded records are copied from their source handle; the handle is
/// opened for this transfer only and released as soon as the copy
/// finishes. Demo records write their inline placeholder body; a record
/// with neither payload produces an empty file.
fn transfer(record: &FileRecord, destination: &Path) -> Result<(), AppError> {
    match record.source() {
        Some(source) => {
            let mut reader = File::open(source)?;
            let mut writer = File::create(destination)?;
            io::copy(&mut reader, &mut writer)?;
        }
        None => {
            std::fs::write(destination, record.content().unwrap_or_default())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempdir::TempDir;
    use uuid::Uuid;

    use catalog_record::{FileKind, PendingFile};

    fn temp_dir() -> TempDir {
        TempDir::new(&Uuid::new_v4().to_string()).unwrap()
    }

    #[test]
    fn uploaded_record_is_copied_from_its_source() {
        let dir = temp_dir();
        let source = dir.path().join("data.bin");
        fs::write(&source, b"real bytes").unwrap();

        let pending = PendingFile::from_path(&source).unwrap();
        let record = FileRecord::from_pending(&pending);

        let destination = dir.path().join("out").join("data.bin");
        fs::create_dir_all(destination.parent().unwrap()).unwrap();
        transfer(&record, &destination).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"real bytes");
    }

    #[test]
    fn demo_record_writes_its_placeholder_body() {
        let dir = temp_dir();
        let record = FileRecord::demo(
            "Instructions.txt",
            "15 KB",
            FileKind::Text,
            "sample body",
        );

        let destination = dir.path().join("Instructions.txt");
        transfer(&record, &destination).unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "sample body");
    }
}
