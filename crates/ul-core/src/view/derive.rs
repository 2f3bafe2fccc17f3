//! Filter -> sort pipeline producing the rows handed to the renderer.

use crate::view::collation::CollationKey;
use crate::{SortKey, UserRecord, ViewParameters};

/// Keep records whose country contains `filter`, ignoring case.
///
/// An empty or whitespace-only filter passes every record through.
/// Always returns a fresh vector.
pub fn filter_by_country(records: &[UserRecord], filter: &str) -> Vec<UserRecord> {
    if filter.trim().is_empty() {
        return records.to_vec();
    }

    let needle = filter.to_lowercase();
    records
        .iter()
        .filter(|record| record.country().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Return a sorted copy of `records`. The input is never reordered.
///
/// `SortKey::None` keeps arrival order. Other keys sort ascending with a
/// locale-aware comparison; equal keys keep their relative input order.
pub fn sort_records(records: &[UserRecord], sort_key: SortKey) -> Vec<UserRecord> {
    let mut sorted = records.to_vec();

    if sort_key != SortKey::None {
        // sort_by_cached_key is stable
        sorted.sort_by_cached_key(|record| {
            CollationKey::new(sort_key.field(record).unwrap_or_default())
        });
    }

    sorted
}

/// Run the full pipeline for the given view parameters.
pub fn derive_rows(records: &[UserRecord], params: &ViewParameters) -> Vec<UserRecord> {
    let filtered = match params.active_filter() {
        Some(filter) => filter_by_country(records, filter),
        None => records.to_vec(),
    };

    match params.sort_key {
        SortKey::None => filtered,
        key => sort_records(&filtered, key),
    }
}
