use crate::catalog::models::Listing;
use chrono::{DateTime, Utc};

/// Lifecycle of the one-shot catalog load. `Loading` transitions to exactly
/// one of `Ready` or `Error`; a reload replaces the whole store with a fresh
/// `Loading`.
#[derive(Debug, Clone)]
pub enum CatalogStore {
    Loading,
    Ready {
        listings: Vec<Listing>,
        fetched_at: DateTime<Utc>,
    },
    Error(String),
}

impl CatalogStore {
    /// The dataset, or nothing while the store is not ready.
    pub fn listings(&self) -> &[Listing] {
        match self {
            CatalogStore::Ready { listings, .. } => listings,
            _ => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStore::Ready { .. })
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match self {
            CatalogStore::Ready { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }
}
