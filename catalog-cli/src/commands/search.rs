use crate::app::App;
use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "search", about = "Set the free-text query (debounced); no text clears it")]
pub struct Search {
    #[clap(help = "Text matched against file names, types and sizes")]
    text: Vec<String>,
}

impl Search {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        // The text is staged, not applied: the view refreshes after the
        // quiet period, or earlier if another command flushes it.
        app.stage_search(self.text.join(" "));
        Ok(())
    }
}
