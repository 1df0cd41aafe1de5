use catalog_error::CatalogError;

use crate::app::App;
use crate::commands::parse_id;
use crate::error::AppError;
use crate::render;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "preview", about = "Show a record's metadata and placeholder body")]
pub struct Preview {
    #[clap(help = "Id of the record to preview")]
    id: String,
}

impl Preview {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        let id = parse_id(&self.id)?;
        let record = app
            .catalog
            .find(&id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))?;
        render::preview(record);
        Ok(())
    }
}
