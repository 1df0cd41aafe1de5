mod format;
mod id;
mod kind;
mod pending;
mod record;

pub use format::{current_datetime, format_size};
pub use id::RecordId;
pub use kind::FileKind;
pub use pending::PendingFile;
pub use record::FileRecord;
