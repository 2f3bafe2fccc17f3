//! Stateless projection of ordered records into table rows.

use crate::{HeaderCell, RenderedRow, RowShade, SortKey, UserRecord};

const HEADER: [HeaderCell; 5] = [
    HeaderCell::new("Photo", None),
    HeaderCell::new("First name", Some(SortKey::ByFirstName)),
    HeaderCell::new("Last name", Some(SortKey::ByLastName)),
    HeaderCell::new("Country", Some(SortKey::ByCountry)),
    HeaderCell::new("Actions", None),
];

/// Output of [`TableRenderer::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header cell whose click selects `sort_key`
    pub fn header_for(&self, sort_key: SortKey) -> Option<&HeaderCell> {
        self.header
            .iter()
            .find(|cell| cell.sort_key == Some(sort_key))
    }
}

/// Renders rows in the order given. Performs no filtering or sorting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(rows: &[UserRecord], show_colors: bool) -> RenderedTable {
        RenderedTable {
            header: HEADER.to_vec(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(position, record)| {
                    RenderedRow::from_record(record, RowShade::for_position(position, show_colors))
                })
                .collect(),
        }
    }
}

/// Label of the "toggle country sort" button for the current key
pub fn toggle_country_label(sort_key: SortKey) -> &'static str {
    if sort_key == SortKey::ByCountry {
        "Unsort by country"
    } else {
        "Sort by country"
    }
}
