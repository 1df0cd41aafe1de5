use chrono::Local;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

const TIMESTAMP_FORMAT: &str = "%b %e %H:%M %Y";

/// Format a raw byte count as the display string stored on records.
///
/// Sizes are formatted once at upload time; queries match against this
/// string, not the numeric count.
pub fn format_size(len: u64) -> String {
    if len < KIB {
        format!("{} Bytes", len)
    } else if len < MIB {
        format!("{:.1} KB", len as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", len as f64 / MIB as f64)
    }
}

/// The display-formatted local date/time captured at record creation.
pub fn current_datetime() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
