
use crate::UserRecord;

/// Build a record with a placeholder thumbnail
pub(crate) fn user(id: &str, first: &str, last: &str, country: &str) -> UserRecord {
    UserRecord::new(
        id,
        first,
        last,
        country,
        format!("https://randomuser.me/api/portraits/thumb/men/{id}.jpg"),
    )
}

pub(crate) fn ids(records: &[UserRecord]) -> Vec<&str> {
    records.iter().map(UserRecord::id).collect()
}
