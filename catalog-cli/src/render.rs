use catalog_record::{FileRecord, PendingFile};

use crate::app::App;
use crate::error::AppError;
use crate::notice::{notice, Severity};

/// Render the visible subset as a table, with the count line and the
/// empty-state handling: an empty result only warrants a "no matches"
/// notice when a query or filter is active; an untouched empty catalog
/// is the "nothing uploaded yet" state.
pub fn listing(app: &App) {
    let visible = app.visible();

    if visible.is_empty() {
        if app.query.is_active() {
            notice(Severity::Info, "No files found matching your criteria");
        } else {
            println!("No files uploaded yet.");
        }
    } else {
        println!(
            "{}",
            format_row("ID", "NAME", "TYPE", "SIZE", "UPLOADED")
        );
        for record in &visible {
            println!(
                "{}",
                format_row(
                    record.id(),
                    record.name(),
                    record.kind(),
                    record.size(),
                    record.uploaded(),
                )
            );
        }
    }

    println!("{}", count_line(app.catalog.count()));
}

/// Render the visible subset as pretty-printed JSON.
pub fn listing_json(app: &App) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&app.visible())?);
    Ok(())
}

/// Render the staged files waiting for upload.
pub fn pending(files: &[PendingFile]) {
    if files.is_empty() {
        println!("No files selected");
        return;
    }

    println!("Selected files:");
    for file in files {
        println!("  {} ({})", file.name(), file.display_size());
    }
}

/// Render the metadata block for a single record, with the inline
/// placeholder body when there is one.
pub fn preview(record: &FileRecord) {
    println!("Preview: {}", record.name());
    println!("  id:       {}", record.id());
    println!("  type:     {}", record.kind().tag().to_uppercase());
    println!("  size:     {}", record.size());
    println!("  uploaded: {}", record.uploaded());
    if let Some(content) = record.content() {
        println!();
        println!("{}", content);
    }
}

pub fn count_line(count: usize) -> String {
    format!("{} file{}", count, if count == 1 { "" } else { "s" })
}

fn format_row<A, B, C, D, E>(id: A, name: B, kind: C, size: D, uploaded: E) -> String
where
    A: std::fmt::Display,
    B: std::fmt::Display,
    C: std::fmt::Display,
    D: std::fmt::Display,
    E: std::fmt::Display,
{
    format!(
        "{: <36}  {: <28} {: <9} {: <10} {}",
        id, name, kind, size, uploaded
    )
}
