use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Reportable conditions shared by the catalog crates.
///
/// `RecordNotFound` and `EmptySelection` are benign: they are surfaced
/// to the user as a notice and control returns to the event loop.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No file with id {0}")]
    RecordNotFound(String),

    #[error("Please select files first!")]
    EmptySelection,

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
