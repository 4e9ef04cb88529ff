use crate::catalog::models::Listing;
use std::collections::HashSet;

/// One selectable location filter option.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFacet {
    pub location: String,
    pub selected: bool,
}

/// Distinct locations in first-seen dataset order, all unselected. Listings
/// without a location contribute nothing.
pub fn derive_location_facets(listings: &[Listing]) -> Vec<LocationFacet> {
    let mut seen = HashSet::new();
    let mut facets = Vec::new();

    for listing in listings {
        if let Some(location) = &listing.location {
            if seen.insert(location.clone()) {
                facets.push(LocationFacet {
                    location: location.clone(),
                    selected: false,
                });
            }
        }
    }

    facets
}

/// Distinct defined bedroom counts, ascending numeric order. Listings with
/// no defined count contribute nothing.
pub fn derive_bedroom_facets(listings: &[Listing]) -> Vec<i64> {
    let mut counts: Vec<i64> = listings.iter().filter_map(|l| l.bedrooms()).collect();
    counts.sort_unstable();
    counts.dedup();
    counts
}
