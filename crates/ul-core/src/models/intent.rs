//! Messages from the UI surface to the store.

use crate::SortKey;

/// A user intent, dispatched to [`crate::ViewStore::dispatch`].
///
/// Toggling country sort and clicking a column header are distinct intents
/// even though both end up changing the sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "Color rows" button
    ToggleColors,
    SetShowColors(bool),
    /// "Sort by country" button: `None <-> ByCountry`
    ToggleCountrySort,
    /// Column header click
    SortBy(SortKey),
    FilterCountry(String),
    /// Per-row delete action, carrying the record identifier
    Delete(String),
    /// "Reset state" button: restores records, keeps view parameters
    Reset,
}
