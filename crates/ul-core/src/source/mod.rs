//! Data-source seam and the load boundary.

use crate::{UserRecord, ViewStore};

use async_trait::async_trait;
use log::{error, info};

/// Anything that can supply a batch of user records.
#[async_trait]
pub trait UserSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch `count` records. Fails on transport errors, non-success
    /// responses, or unparsable payloads.
    async fn fetch_users(&self, count: usize) -> Result<Vec<UserRecord>, Self::Error>;
}

/// Result of [`load_initial`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    /// The fetch failed; the store was left empty and marked settled
    Failed,
}

/// Fetch the initial batch and seed `store` with it.
///
/// A failed fetch is logged and swallowed: the application keeps running
/// with an empty collection.
pub async fn load_initial<S>(store: &mut ViewStore, source: &S, count: usize) -> LoadOutcome
where
    S: UserSource + ?Sized,
{
    apply_fetch(store, source.fetch_users(count).await)
}

/// Apply the result of a fetch that ran elsewhere (e.g. on a spawned task).
pub fn apply_fetch<E>(store: &mut ViewStore, result: Result<Vec<UserRecord>, E>) -> LoadOutcome
where
    E: std::fmt::Display,
{
    match result {
        Ok(records) => {
            let loaded = records.len();
            store.load(records);
            info!("Loaded {loaded} users");
            LoadOutcome::Loaded(loaded)
        }
        Err(e) => {
            error!("Failed to load users: {e}");
            store.mark_load_failed();
            LoadOutcome::Failed
        }
    }
}
