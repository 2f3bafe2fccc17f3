use crate::tests::{ids, user};
use crate::{Intent, SortKey, UserRecord, ViewParameters, ViewStore};

use googletest::assert_that;
use googletest::prelude::{eq, is_empty, len};

fn three_users() -> Vec<UserRecord> {
    vec![
        user("1", "Ana", "Ruiz", "Spain"),
        user("2", "Leo", "Dupont", "France"),
        user("3", "Zoe", "Smith", "United Kingdom"),
    ]
}

fn loaded_store() -> ViewStore {
    let mut store = ViewStore::new();
    store.load(three_users());
    store
}

// =========================================================================
// Load
// =========================================================================

#[test]
fn given_new_store_then_empty_and_not_loaded() {
    let store = ViewStore::new();

    assert_that!(store.current(), is_empty());
    assert_that!(store.original(), is_empty());
    assert_that!(store.derived(), is_empty());
    assert_that!(store.is_loaded(), eq(false));
    assert_that!(store.is_settled(), eq(false));
}

#[test]
fn given_failed_load_when_marked_then_settled_but_not_loaded() {
    let mut store = ViewStore::new();

    store.mark_load_failed();

    assert_that!(store.is_settled(), eq(true));
    assert_that!(store.is_loaded(), eq(false));
    assert_that!(store.current(), is_empty());
}

#[test]
fn given_batch_when_loaded_then_current_and_original_match() {
    let store = loaded_store();

    assert_that!(store.is_loaded(), eq(true));
    assert_eq!(ids(store.current()), vec!["1", "2", "3"]);
    assert_eq!(ids(store.original()), vec!["1", "2", "3"]);
}

#[test]
fn given_initial_params_when_loaded_then_params_kept() {
    let params = ViewParameters {
        show_colors: true,
        sort_key: SortKey::ByCountry,
        country_filter: String::new(),
    };
    let mut store = ViewStore::with_params(params.clone());

    store.load(three_users());

    assert_that!(store.params(), eq(&params));
}

// =========================================================================
// Delete / Reset
// =========================================================================

#[test]
fn given_existing_id_when_deleted_then_removed_from_current_only() {
    let mut store = loaded_store();

    let removed = store.delete_by_id("2");

    assert_that!(removed, eq(true));
    assert_eq!(ids(store.current()), vec!["1", "3"]);
    assert_that!(store.original(), len(eq(3)));
}

#[test]
fn given_absent_id_when_deleted_then_no_change() {
    let mut store = loaded_store();
    let before = store.current().to_vec();

    let removed = store.delete_by_id("does-not-exist");

    assert_that!(removed, eq(false));
    assert_that!(store.current(), eq(before.as_slice()));
}

#[test]
fn given_empty_store_when_deleted_then_no_change() {
    let mut store = ViewStore::new();

    assert_that!(store.delete_by_id("1"), eq(false));
    assert_that!(store.current(), is_empty());
}

#[test]
fn given_deletions_when_reset_then_original_order_restored() {
    let mut store = loaded_store();
    store.delete_by_id("2");
    assert_that!(store.current(), len(eq(2)));
    assert_that!(store.original(), len(eq(3)));

    store.reset();

    assert_eq!(ids(store.current()), vec!["1", "2", "3"]);
}

#[test]
fn given_view_params_when_reset_then_params_unchanged() {
    let mut store = loaded_store();
    store.set_show_colors(true);
    store.set_sort_key(SortKey::ByLastName);
    store.set_country_filter("an");
    store.delete_by_id("1");
    let params = store.params().clone();

    store.reset();

    assert_that!(store.params(), eq(&params));
    assert_that!(store.current(), len(eq(3)));
}

#[test]
fn given_reset_then_delete_then_original_still_intact() {
    let mut store = loaded_store();
    store.reset();
    store.delete_by_id("1");
    store.delete_by_id("3");

    assert_eq!(ids(store.original()), vec!["1", "2", "3"]);
}

// =========================================================================
// Derivation
// =========================================================================

#[test]
fn given_filter_pain_when_derived_then_only_spain() {
    let mut store = ViewStore::new();
    store.load(vec![
        user("1", "Ana", "Ruiz", "Spain"),
        user("2", "Leo", "Dupont", "France"),
    ]);

    store.set_country_filter("pain");

    assert_eq!(ids(&store.derived()), vec!["1"]);
}

#[test]
fn given_first_name_sort_when_derived_then_amy_before_zoe() {
    let mut store = ViewStore::new();
    store.load(vec![
        user("1", "Zoe", "Smith", "United Kingdom"),
        user("2", "Amy", "Ortega", "Spain"),
    ]);

    store.set_sort_key(SortKey::ByFirstName);

    let names: Vec<String> = store
        .derived()
        .iter()
        .map(|record| record.first_name().to_string())
        .collect();
    assert_eq!(names, vec!["Amy", "Zoe"]);
}

#[test]
fn given_sort_when_derived_then_current_keeps_arrival_order() {
    let mut store = loaded_store();
    store.set_sort_key(SortKey::ByCountry);

    let _ = store.derived();

    assert_eq!(ids(store.current()), vec!["1", "2", "3"]);
}

#[test]
fn given_whitespace_filter_when_derived_then_everything_shown() {
    let mut store = loaded_store();
    store.set_country_filter("   ");

    assert_that!(store.derived(), len(eq(3)));
}

// =========================================================================
// Intents
// =========================================================================

#[test]
fn given_toggle_country_sort_twice_then_back_to_none() {
    let mut store = loaded_store();
    assert_that!(store.params().sort_key, eq(SortKey::None));

    store.dispatch(Intent::ToggleCountrySort);
    assert_that!(store.params().sort_key, eq(SortKey::ByCountry));

    store.dispatch(Intent::ToggleCountrySort);
    assert_that!(store.params().sort_key, eq(SortKey::None));
}

#[test]
fn given_header_sort_when_toggle_country_then_none_not_previous_key() {
    let mut store = loaded_store();
    store.dispatch(Intent::SortBy(SortKey::ByFirstName));

    store.dispatch(Intent::ToggleCountrySort);

    assert_that!(store.params().sort_key, eq(SortKey::None));
}

#[test]
fn given_same_header_clicked_twice_then_sort_stays() {
    let mut store = loaded_store();

    store.dispatch(Intent::SortBy(SortKey::ByLastName));
    let first = store.derived();
    store.dispatch(Intent::SortBy(SortKey::ByLastName));

    assert_that!(store.params().sort_key, eq(SortKey::ByLastName));
    assert_eq!(store.derived(), first);
}

#[test]
fn given_toggle_colors_then_flips() {
    let mut store = loaded_store();

    store.dispatch(Intent::ToggleColors);
    assert_that!(store.params().show_colors, eq(true));

    store.dispatch(Intent::ToggleColors);
    assert_that!(store.params().show_colors, eq(false));

    store.dispatch(Intent::SetShowColors(true));
    assert_that!(store.params().show_colors, eq(true));
}

#[test]
fn given_filter_delete_reset_intents_then_applied() {
    let mut store = loaded_store();

    store.dispatch(Intent::FilterCountry("fra".to_string()));
    assert_eq!(ids(&store.derived()), vec!["2"]);

    store.dispatch(Intent::Delete("2".to_string()));
    assert_that!(store.derived(), is_empty());

    store.dispatch(Intent::Reset);
    assert_eq!(ids(&store.derived()), vec!["2"]);
    assert_that!(store.params().country_filter.as_str(), eq("fra"));
}
