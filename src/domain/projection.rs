use crate::catalog::models::Listing;
use crate::catalog::CatalogStore;
use crate::state::AppState;
use crate::storage::favorites::FavoriteSet;
use crate::storage::theme::Theme;
use chrono::{DateTime, Utc};

/// Catalog phase as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPhase {
    Loading,
    Error(String),
    Ready,
}

/// Presentation fields for one listing card. Display defaults (bedrooms and
/// guests fall back to 1) are applied here and nowhere earlier.
#[derive(Debug, Clone)]
pub struct CardVm {
    /// Render key: the id when present, the title otherwise.
    pub key: String,
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub price: f64,
    pub rating: f64,
    pub superhost: bool,
    pub bedrooms: i64,
    pub people: i64,
    pub image: String,
    pub is_favorite: bool,
}

impl CardVm {
    /// Only listings with an id can be favorited.
    pub fn favoritable(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct LocationPillVm {
    pub location: String,
    /// First word of the location, for the compact pill label.
    pub short_label: String,
    pub selected: bool,
}

/// Everything the browse page needs, derived read-only from the app state.
#[derive(Debug, Clone)]
pub struct BrowseVm {
    pub phase: CatalogPhase,
    pub total: usize,
    pub cards: Vec<CardVm>,
    pub pills: Vec<LocationPillVm>,
    /// The "All" pill is active exactly when no location is selected.
    pub all_selected: bool,
    pub bedroom_options: Vec<i64>,
    pub superhost_only: bool,
    pub bedroom_type: Option<i64>,
    pub favorites_count: usize,
    pub favorite_cards: Vec<CardVm>,
    pub show_favorites: bool,
    pub theme: Theme,
    pub fetched_at: Option<DateTime<Utc>>,
}

pub fn card_vm(listing: &Listing, favorites: &FavoriteSet) -> CardVm {
    CardVm {
        key: listing
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| listing.title.clone()),
        id: listing.id,
        title: listing.title.clone(),
        description: listing.description.clone(),
        location: listing.location.clone(),
        price: listing.price,
        rating: listing.rating,
        superhost: listing.superhost,
        bedrooms: listing.bedrooms().unwrap_or(1),
        people: listing.people().unwrap_or(1),
        image: listing.image.clone(),
        is_favorite: listing
            .id
            .map(|id| favorites.is_favorite(id))
            .unwrap_or(false),
    }
}

pub fn project(state: &AppState) -> BrowseVm {
    let phase = match &state.catalog {
        CatalogStore::Loading => CatalogPhase::Loading,
        CatalogStore::Error(msg) => CatalogPhase::Error(msg.clone()),
        CatalogStore::Ready { .. } => CatalogPhase::Ready,
    };

    let listings = state.catalog.listings();

    let cards: Vec<CardVm> = state
        .filtered
        .iter()
        .map(|&i| card_vm(&listings[i], &state.favorites))
        .collect();

    let favorite_cards: Vec<CardVm> = state
        .favorites
        .list(listings)
        .into_iter()
        .map(|l| card_vm(l, &state.favorites))
        .collect();

    let pills: Vec<LocationPillVm> = state
        .locations
        .iter()
        .map(|f| LocationPillVm {
            short_label: f
                .location
                .split(' ')
                .next()
                .unwrap_or(f.location.as_str())
                .to_string(),
            location: f.location.clone(),
            selected: f.selected,
        })
        .collect();

    let all_selected = !state.locations.iter().any(|f| f.selected);

    BrowseVm {
        phase,
        total: cards.len(),
        cards,
        pills,
        all_selected,
        bedroom_options: state.bedroom_options.clone(),
        superhost_only: state.superhost_only,
        bedroom_type: state.bedroom_type,
        favorites_count: state.favorites.len(),
        favorite_cards,
        show_favorites: state.show_favorites,
        theme: state.theme,
        fetched_at: state.catalog.fetched_at(),
    }
}
