//! View State Store - owns the record collections and view parameters.

use crate::view::derive::derive_rows;
use crate::{Intent, SortKey, UserRecord, ViewParameters};

use std::sync::Arc;

use log::{debug, warn};

/// Holds the live ("current") records, the load-time snapshot ("original")
/// and the active view parameters.
///
/// Invariants:
/// - `original` is replaced only by [`ViewStore::load`]
/// - every id in `current` is also in `original`
#[derive(Debug, Clone, Default)]
pub struct ViewStore {
    current: Vec<UserRecord>,
    original: Arc<[UserRecord]>,
    params: ViewParameters,
    loaded: bool,
    load_failed: bool,
}

impl ViewStore {
    /// Create an empty store with default view parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given initial view parameters
    pub fn with_params(params: ViewParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Seed both collections from a fetched batch.
    ///
    /// Meant to run once per session. A second call overwrites the snapshot.
    pub fn load(&mut self, records: Vec<UserRecord>) {
        if self.loaded {
            warn!("ViewStore::load called again; replacing the original snapshot");
        }

        debug!("Loading {} user records", records.len());
        self.original = Arc::from(records.as_slice());
        self.current = records;
        self.loaded = true;
    }

    pub fn set_show_colors(&mut self, show_colors: bool) {
        self.params.show_colors = show_colors;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        debug!("Sort key: {} -> {}", self.params.sort_key, sort_key);
        self.params.sort_key = sort_key;
    }

    /// Store the filter text as given. Callers trim; whitespace-only text
    /// behaves as no filter.
    pub fn set_country_filter(&mut self, text: impl Into<String>) {
        self.params.country_filter = text.into();
    }

    /// Remove the record with `id` from the current collection.
    ///
    /// Returns `false` (and changes nothing) when no such record exists.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        if !self.current.iter().any(|record| record.id() == id) {
            debug!("Delete ignored, no record with id {id}");
            return false;
        }

        self.current = self
            .current
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        debug!("Deleted record {id}, {} remaining", self.current.len());
        true
    }

    /// Restore the current collection from the snapshot. View parameters are kept.
    pub fn reset(&mut self) {
        self.current = self.original.to_vec();
        debug!("Reset to {} original records", self.current.len());
    }

    /// Apply a UI intent.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleColors => self.set_show_colors(!self.params.show_colors),
            Intent::SetShowColors(show_colors) => self.set_show_colors(show_colors),
            Intent::ToggleCountrySort => self.set_sort_key(self.params.sort_key.toggle_country()),
            Intent::SortBy(sort_key) => self.set_sort_key(sort_key),
            Intent::FilterCountry(text) => self.set_country_filter(text),
            Intent::Delete(id) => {
                self.delete_by_id(&id);
            }
            Intent::Reset => self.reset(),
        }
    }

    /// Filtered and sorted rows for the renderer. Always a fresh vector.
    pub fn derived(&self) -> Vec<UserRecord> {
        derive_rows(&self.current, &self.params)
    }

    pub fn current(&self) -> &[UserRecord] {
        &self.current
    }

    pub fn original(&self) -> &[UserRecord] {
        &self.original
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    /// Whether the initial batch has arrived
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Record that the initial fetch failed. The collections stay empty.
    pub fn mark_load_failed(&mut self) {
        self.load_failed = true;
    }

    /// Whether the initial fetch has resolved, successfully or not
    pub fn is_settled(&self) -> bool {
        self.loaded || self.load_failed
    }
}
