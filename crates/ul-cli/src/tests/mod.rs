
use ul_core::{UserRecord, ViewParameters, ViewStore};

pub(crate) fn user(id: &str, first: &str, last: &str, country: &str) -> UserRecord {
    UserRecord::new(
        id,
        first,
        last,
        country,
        format!("https://randomuser.me/api/portraits/thumb/men/{id}.jpg"),
    )
}

/// Store seeded with four users from three countries
pub(crate) fn loaded_store(params: ViewParameters) -> ViewStore {
    let mut store = ViewStore::with_params(params);
    store.load(vec![
        user("1", "Lucía", "Pérez", "Spain"),
        user("2", "Marc", "Dubois", "France"),
        user("3", "Ana", "Zapata", "Spain"),
        user("4", "Emma", "Brown", "United Kingdom"),
    ]);
    store
}

pub(crate) fn visible_ids(store: &ViewStore) -> Vec<String> {
    store
        .derived()
        .iter()
        .map(|record| record.id().to_string())
        .collect()
}
