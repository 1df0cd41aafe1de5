use std::path::PathBuf;

use catalog_record::PendingFile;

use crate::app::App;
use crate::error::AppError;
use crate::notice::{notice, Severity};
use crate::render;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "stage", about = "Pick files to upload, replacing the current selection")]
pub struct Stage {
    #[clap(required = true, value_parser, help = "Paths of the files to stage")]
    paths: Vec<PathBuf>,
}

impl Stage {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        let files = self
            .paths
            .iter()
            .map(PendingFile::from_path)
            .collect::<Result<Vec<_>, _>>()?;

        let count = files.len();
        app.pending.replace(files);
        render::pending(app.pending.files());
        notice(
            Severity::Info,
            &format!("{} file(s) ready to upload", count),
        );
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "pending", about = "Show the files staged for upload")]
pub struct Pending {}

impl Pending {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        render::pending(app.pending.files());
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "cancel", about = "Discard the staged selection")]
pub struct Cancel {}

impl Cancel {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        app.pending.clear();
        notice(Severity::Info, "Selection cleared");
        Ok(())
    }
}
