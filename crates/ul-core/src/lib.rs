pub mod error;
pub mod models;
pub mod source;
pub mod table;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::intent::Intent;
pub use models::sort_key::SortKey;
pub use models::user_record::{Location, Login, Name, Picture, UserRecord};
pub use models::view_parameters::ViewParameters;
pub use source::{LoadOutcome, UserSource, apply_fetch, load_initial};
pub use table::header_cell::HeaderCell;
pub use table::rendered_row::RenderedRow;
pub use table::row_shade::RowShade;
pub use table::table_renderer::{RenderedTable, TableRenderer, toggle_country_label};
pub use view::collation::locale_compare;
pub use view::derive::{derive_rows, filter_by_country, sort_records};
pub use view::view_store::ViewStore;
