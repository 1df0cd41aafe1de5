use catalog_error::CatalogError;

use crate::app::App;
use crate::commands::parse_id;
use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "rm", about = "Delete a record from the catalog")]
pub struct Remove {
    #[clap(help = "Id of the record to delete")]
    id: String,
    #[clap(long, short = 'y', action, help = "Skip the confirmation prompt")]
    yes: bool,
}

impl Remove {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        let id = parse_id(&self.id)?;

        if self.yes {
            return app.delete(&id);
        }

        // Deletion needs confirmation; the answer arrives as the next
        // input line and is resolved by the event loop.
        let record = app
            .catalog
            .find(&id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))?;
        println!(
            "Are you sure you want to delete \"{}\"? [y/N]",
            record.name()
        );
        app.pending_delete = Some(id);
        Ok(())
    }
}
