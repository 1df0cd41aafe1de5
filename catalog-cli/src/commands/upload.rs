use catalog_error::CatalogError;
use catalog_record::FileRecord;

use crate::app::App;
use crate::error::AppError;
use crate::notice::{notice, Severity};
use crate::render;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "upload", about = "Commit the staged files to the catalog")]
pub struct Upload {}

impl Upload {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        if app.pending.is_empty() {
            return Err(CatalogError::EmptySelection.into());
        }

        app.flush_search();

        let staged = app.pending.take();
        let count = staged.len();
        let records: Vec<FileRecord> = staged
            .iter()
            .map(FileRecord::from_pending)
            .collect();
        app.catalog.append(records);

        notice(
            Severity::Success,
            &format!("{} file(s) uploaded successfully!", count),
        );
        render::listing(app);
        Ok(())
    }
}
