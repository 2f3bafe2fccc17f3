use crate::SortKey;

use serde::{Deserialize, Serialize};

/// Parameters controlling how the current collection is projected
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewParameters {
    pub show_colors: bool,
    pub sort_key: SortKey,
    /// Case-insensitive country substring; empty or whitespace means no filter
    pub country_filter: String,
}

impl ViewParameters {
    /// The filter text, or `None` when it should be ignored
    pub fn active_filter(&self) -> Option<&str> {
        if self.country_filter.trim().is_empty() {
            None
        } else {
            Some(&self.country_filter)
        }
    }
}
