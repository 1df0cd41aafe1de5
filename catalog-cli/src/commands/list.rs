use crate::app::App;
use crate::error::AppError;
use crate::render;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "Show the files matching the current search and filter")]
pub struct List {
    #[clap(long, action, help = "Print the visible records as JSON")]
    json: bool,
}

impl List {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        app.flush_search();
        if self.json {
            render::listing_json(app)
        } else {
            render::listing(app);
            Ok(())
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "count", about = "Show how many files are cataloged")]
pub struct Count {}

impl Count {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        println!("{}", render::count_line(app.catalog.count()));
        Ok(())
    }
}
