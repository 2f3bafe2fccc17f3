use crate::{Intent, SortKey};

/// One column header of the rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: &'static str,
    /// Set for sortable columns
    pub sort_key: Option<SortKey>,
}

impl HeaderCell {
    pub const fn new(label: &'static str, sort_key: Option<SortKey>) -> Self {
        Self { label, sort_key }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    /// Intent emitted when the header is clicked. Clicking the active column
    /// again re-applies the same key; it never toggles back to `None`.
    pub fn click(&self) -> Option<Intent> {
        self.sort_key.map(Intent::SortBy)
    }
}
