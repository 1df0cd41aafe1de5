use std::str::FromStr;

use clap::Subcommand;

use catalog_record::RecordId;

use crate::app::App;
use crate::error::AppError;

mod download;
mod filter;
mod list;
mod preview;
mod remove;
mod search;
mod stage;
mod upload;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Stage(stage::Stage),
    Pending(stage::Pending),
    Cancel(stage::Cancel),
    Upload(upload::Upload),
    List(list::List),
    Count(list::Count),
    Search(search::Search),
    Filter(filter::Filter),
    Preview(preview::Preview),
    Download(download::Download),
    Rm(remove::Remove),
    #[command(about = "Leave the shell")]
    Quit,
}

impl Commands {
    pub fn run(&self, app: &mut App) -> Result<(), AppError> {
        match self {
            Commands::Stage(cmd) => cmd.run(app),
            Commands::Pending(cmd) => cmd.run(app),
            Commands::Cancel(cmd) => cmd.run(app),
            Commands::Upload(cmd) => cmd.run(app),
            Commands::List(cmd) => cmd.run(app),
            Commands::Count(cmd) => cmd.run(app),
            Commands::Search(cmd) => cmd.run(app),
            Commands::Filter(cmd) => cmd.run(app),
            Commands::Preview(cmd) => cmd.run(app),
            Commands::Download(cmd) => cmd.run(app),
            Commands::Rm(cmd) => cmd.run(app),
            // Handled by the event loop before dispatch
            Commands::Quit => Ok(()),
        }
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<RecordId, AppError> {
    RecordId::from_str(raw).map_err(|_| AppError::InvalidId(raw.to_owned()))
}
