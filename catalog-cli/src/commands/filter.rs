use std::str::FromStr;

use catalog_record::FileKind;

use crate::app::App;
use crate::error::AppError;
use crate::render;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "filter", about = "Restrict the listing to one file type ('all' clears)")]
pub struct Filter {
    #[clap(help = "pdf, image, document, text, archive, other or all")]
    kind: String,
}

impl Filter {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        let filter = if self.kind.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(
                FileKind::from_str(&self.kind)
                    .map_err(AppError::InvalidKind)?,
            )
        };

        app.flush_search();
        app.query.set_filter(filter);
        render::listing(app);
        Ok(())
    }
}
