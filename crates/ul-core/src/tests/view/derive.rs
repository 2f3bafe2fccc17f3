use crate::tests::{ids, user};
use crate::{SortKey, UserRecord, ViewParameters, derive_rows, filter_by_country, sort_records};

fn batch() -> Vec<UserRecord> {
    vec![
        user("1", "Ana", "Ruiz", "Spain"),
        user("2", "Leo", "Dupont", "France"),
        user("3", "Zoe", "Smith", "United Kingdom"),
        user("4", "Amy", "Ortega", "Spain"),
        user("5", "Émile", "Bernard", "France"),
    ]
}

// =========================================================================
// Filter
// =========================================================================

#[test]
fn given_substring_when_filtered_then_only_matching_countries() {
    let filtered = filter_by_country(&batch(), "pain");
    assert_eq!(ids(&filtered), vec!["1", "4"]);
}

#[test]
fn given_different_case_when_filtered_then_still_matches() {
    let filtered = filter_by_country(&batch(), "FRA");
    assert_eq!(ids(&filtered), vec!["2", "5"]);
}

#[test]
fn given_empty_filter_when_filtered_then_all_records_pass() {
    let records = batch();
    assert_eq!(filter_by_country(&records, ""), records);
    assert_eq!(filter_by_country(&records, "   "), records);
}

#[test]
fn given_unmatched_filter_when_filtered_then_empty() {
    assert!(filter_by_country(&batch(), "Atlantis").is_empty());
}

#[test]
fn given_empty_collection_when_filtered_then_empty() {
    assert!(filter_by_country(&[], "spain").is_empty());
}

// =========================================================================
// Sort
// =========================================================================

#[test]
fn given_none_key_when_sorted_then_arrival_order() {
    let records = batch();
    assert_eq!(sort_records(&records, SortKey::None), records);
}

#[test]
fn given_first_name_key_when_sorted_then_alphabetical() {
    let sorted = sort_records(&batch(), SortKey::ByFirstName);
    let names: Vec<&str> = sorted.iter().map(UserRecord::first_name).collect();
    assert_eq!(names, vec!["Amy", "Ana", "Émile", "Leo", "Zoe"]);
}

#[test]
fn given_last_name_key_when_sorted_then_alphabetical() {
    let sorted = sort_records(&batch(), SortKey::ByLastName);
    let names: Vec<&str> = sorted.iter().map(UserRecord::last_name).collect();
    assert_eq!(names, vec!["Bernard", "Dupont", "Ortega", "Ruiz", "Smith"]);
}

#[test]
fn given_country_key_when_sorted_then_ties_keep_input_order() {
    let sorted = sort_records(&batch(), SortKey::ByCountry);
    assert_eq!(ids(&sorted), vec!["2", "5", "1", "4", "3"]);
}

#[test]
fn given_records_when_sorted_then_input_untouched() {
    let records = batch();
    let before = records.clone();

    let _ = sort_records(&records, SortKey::ByFirstName);

    assert_eq!(records, before);
}

// =========================================================================
// Pipeline
// =========================================================================

#[test]
fn given_filter_and_sort_when_derived_then_filter_then_sort() {
    let params = ViewParameters {
        show_colors: false,
        sort_key: SortKey::ByFirstName,
        country_filter: "spain".to_string(),
    };

    let rows = derive_rows(&batch(), &params);

    assert_eq!(ids(&rows), vec!["4", "1"]);
}

#[test]
fn given_default_params_when_derived_then_equal_to_input() {
    let records = batch();
    assert_eq!(derive_rows(&records, &ViewParameters::default()), records);
}

#[test]
fn given_empty_collection_when_derived_then_empty() {
    let params = ViewParameters {
        sort_key: SortKey::ByCountry,
        ..Default::default()
    };
    assert!(derive_rows(&[], &params).is_empty());
}

#[test]
fn given_nordic_and_polish_names_when_sorted_by_first_then_stroked_letters_not_last() {
    let records = vec![
        user("1", "Zoe", "Hall", "Australia"),
        user("2", "Øystein", "Berg", "Norway"),
        user("3", "Łukasz", "Nowak", "Poland"),
        user("4", "Mia", "Jensen", "Denmark"),
    ];

    let sorted = sort_records(&records, SortKey::ByFirstName);

    assert_eq!(ids(&sorted), vec!["3", "4", "2", "1"]);
}
