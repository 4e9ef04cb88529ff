use crate::catalog::models::Listing;
use std::collections::HashSet;

/// The user's active filter criteria. An empty location set means "show all
/// locations", not "show none".
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub locations: HashSet<String>,
    pub superhost_only: bool,
    pub bedroom_type: Option<i64>,
}

/// Narrow the dataset through the three filter steps, each operating on the
/// output of the previous. Returns indices into `listings`, so the result is
/// always a stable subsequence of the dataset.
pub fn apply_filters(listings: &[Listing], selection: &FilterSelection) -> Vec<usize> {
    let mut kept: Vec<usize> = (0..listings.len()).collect();

    if !selection.locations.is_empty() {
        kept.retain(|&i| {
            listings[i]
                .location
                .as_ref()
                .map(|l| selection.locations.contains(l))
                .unwrap_or(false)
        });
    }

    if selection.superhost_only {
        kept.retain(|&i| listings[i].superhost);
    }

    if let Some(bedrooms) = selection.bedroom_type {
        // Exact match only; an unknown bedroom count never matches.
        kept.retain(|&i| listings[i].bedrooms() == Some(bedrooms));
    }

    kept
}
