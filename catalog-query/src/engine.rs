use catalog_record::{FileKind, FileRecord};

/// The persistent query inputs and the engine that applies them.
///
/// A `Query` holds the last-applied free-text string and kind filter;
/// both survive catalog mutations and change only when the user edits
/// them. [`Query::select`] is a pure function of the query and the
/// catalog sequence: it recomputes the visible subset from scratch on
/// every call, which is fine at catalog sizes this domain sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    filter: Option<FileKind>,
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    /// Set the free-text needle. The input is trimmed and case-folded
    /// once here; an all-whitespace string clears the text predicate.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_lowercase();
        log::debug!("Query text set to {:?}", self.text);
    }

    /// Set or clear the kind filter. `None` means no filter.
    pub fn set_filter(&mut self, filter: Option<FileKind>) {
        self.filter = filter;
        log::debug!("Query filter set to {:?}", self.filter);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filter(&self) -> Option<FileKind> {
        self.filter
    }

    /// Whether any criterion is set. Drives the "no matches" notice:
    /// an empty result with no active criteria is the distinct
    /// "nothing uploaded yet" state and must not be reported as a
    /// failed search.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty() || self.filter.is_some()
    }

    /// Conjunction of the text and filter predicates.
    ///
    /// The text predicate matches the case-folded name, kind tag, or
    /// pre-formatted size string as a substring. Matching the size
    /// *string* (e.g. "mb") rather than the byte count is intentional
    /// legacy behavior.
    pub fn matches(&self, record: &FileRecord) -> bool {
        if !self.text.is_empty() {
            let hit = record.name().to_lowercase().contains(&self.text)
                || record.kind().tag().contains(self.text.as_str())
                || record.size().to_lowercase().contains(&self.text);
            if !hit {
                return false;
            }
        }

        match self.filter {
            Some(kind) => record.kind() == kind,
            None => true,
        }
    }

    /// The visible subset of `records`, in catalog order.
    ///
    /// A stable filter: survivors keep their relative order, nothing is
    /// re-sorted. With no text and no filter this is the identity.
    pub fn select<'a>(&self, records: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
