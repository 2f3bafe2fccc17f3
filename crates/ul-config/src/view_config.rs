use serde::Deserialize;
use ul_core::{SortKey, ViewParameters};

/// Initial view parameters for a session
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub show_colors: bool,
    /// One of `none`, `first`, `last`, `country`
    pub sort: SortKey,
    pub country_filter: String,
}

impl ViewConfig {
    pub fn view_parameters(&self) -> ViewParameters {
        ViewParameters {
            show_colors: self.show_colors,
            sort_key: self.sort,
            country_filter: self.country_filter.trim().to_string(),
        }
    }
}
