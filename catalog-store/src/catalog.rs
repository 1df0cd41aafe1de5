use catalog_error::{CatalogError, Result};
use catalog_record::{FileRecord, RecordId};

/// The authoritative in-memory sequence of file records.
///
/// The catalog is the sole source of truth for what files exist. It is
/// kept in insertion order: `append` grows the tail, `remove` deletes
/// by identity and preserves the relative order of the survivors.
/// Records are never updated in place.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<FileRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Replace the catalog wholesale. Used once at startup to seed
    /// demo data.
    pub fn seed(&mut self, records: Vec<FileRecord>) {
        log::debug!("Seeding catalog with {} records", records.len());
        self.records = records;
    }

    /// Add records to the end of the catalog, preserving input order.
    ///
    /// Ids are assigned by the record constructors before insertion;
    /// names are not deduplicated, identical names stay distinct
    /// records.
    pub fn append(&mut self, records: Vec<FileRecord>) {
        log::debug!("Appending {} records to catalog", records.len());
        self.records.extend(records);
    }

    /// Delete the record with the given id.
    ///
    /// Returns the removed record so callers can report its name.
    /// An unknown id is a reportable, non-fatal condition; the catalog
    /// is left unchanged.
    pub fn remove(&mut self, id: &RecordId) -> Result<FileRecord> {
        match self.records.iter().position(|r| r.id() == *id) {
            Some(index) => {
                let record = self.records.remove(index);
                log::debug!("Removed record {} ({})", id, record.name());
                Ok(record)
            }
            None => Err(CatalogError::RecordNotFound(id.to_string())),
        }
    }

    /// Look up a record by id.
    pub fn find(&self, id: &RecordId) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id() == *id)
    }

    /// Current records, in insertion order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Number of cataloged records, for display.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
