use std::time::Duration;

use catalog_query::Query;
use catalog_record::{FileRecord, RecordId};
use catalog_store::{Catalog, PendingSelection};

use crate::debounce::Debouncer;
use crate::error::AppError;
use crate::notice::{notice, Severity};
use crate::render;

/// Quiet period before typed search text is applied to the view.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Application state container: the catalog, the staging selection and
/// the persistent query, owned by the event loop and passed to the
/// commands by reference.
///
/// Search text goes through a debounce window: `search` events stash
/// the text and arm the timer, and the text becomes part of the query
/// either when the timer fires or when another command needs the
/// current view and flushes it.
pub struct App {
    pub catalog: Catalog,
    pub pending: PendingSelection,
    pub query: Query,
    /// Typed but not yet applied search text (debounce window).
    staged_text: Option<String>,
    /// Id awaiting a y/N confirmation before deletion.
    pub pending_delete: Option<RecordId>,
    debouncer: Debouncer,
}

impl App {
    /// Build the state container. `on_quiet` is invoked from the timer
    /// thread when typed search text has been quiet long enough; it
    /// should post an event back to the main loop.
    pub fn new<F>(on_quiet: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        App {
            catalog: Catalog::new(),
            pending: PendingSelection::new(),
            query: Query::new(),
            staged_text: None,
            pending_delete: None,
            debouncer: Debouncer::new(SEARCH_QUIET_PERIOD, on_quiet),
        }
    }

    /// Record typed search text and (re)arm the debounce timer.
    pub fn stage_search(&mut self, text: String) {
        self.staged_text = Some(text);
        self.debouncer.reset();
    }

    /// Move staged search text into the query. Returns whether the
    /// query changed. Called when the quiet period elapses.
    pub fn apply_staged_search(&mut self) -> bool {
        match self.staged_text.take() {
            Some(text) => {
                self.query.set_text(&text);
                true
            }
            None => false,
        }
    }

    /// Apply staged search text immediately, cancelling the pending
    /// timer. Commands that render or mutate call this first so the
    /// view reflects what was already typed.
    pub fn flush_search(&mut self) {
        self.debouncer.cancel();
        self.apply_staged_search();
    }

    /// The currently visible subset of the catalog.
    pub fn visible(&self) -> Vec<&FileRecord> {
        self.query.select(self.catalog.records())
    }

    /// Delete a record by id, report the outcome and re-render.
    /// Shared by the `--yes` path and the confirmed prompt path.
    pub fn delete(&mut self, id: &RecordId) -> Result<(), AppError> {
        self.flush_search();
        let removed = self.catalog.remove(id)?;
        notice(
            Severity::Success,
            &format!("Deleted \"{}\"", removed.name()),
        );
        render::listing(self);
        Ok(())
    }
}
