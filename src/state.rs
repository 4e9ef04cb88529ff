use crate::catalog::models::Listing;
use crate::catalog::{self, CatalogStore};
use crate::domain::facets::{derive_bedroom_facets, derive_location_facets, LocationFacet};
use crate::domain::filter::{apply_filters, FilterSelection};
use crate::storage::connection::Database;
use crate::storage::favorites::FavoriteSet;
use crate::storage::theme::{self, Theme};
use chrono::Utc;
use std::sync::{Arc, Mutex};

pub type SharedState = Arc<Mutex<AppState>>;

/// Process-wide application state. All mutation goes through the methods
/// below; anything that changes which listings are visible ends by
/// recomputing `filtered`. Derived state is never computed implicitly at
/// render time.
pub struct AppState {
    db: Database,
    pub catalog: CatalogStore,
    pub locations: Vec<LocationFacet>,
    pub bedroom_options: Vec<i64>,
    pub superhost_only: bool,
    pub bedroom_type: Option<i64>,
    /// Indices into the ready catalog, dataset order.
    pub filtered: Vec<usize>,
    pub favorites: FavoriteSet,
    pub show_favorites: bool,
    pub theme: Theme,
}

impl AppState {
    /// Fresh state with persisted favorites and theme restored. The catalog
    /// starts out loading; see [`spawn_load`].
    pub fn new(db: Database) -> Self {
        let favorites = FavoriteSet::load(&db);
        let theme = theme::load(&db);

        Self {
            db,
            catalog: CatalogStore::Loading,
            locations: Vec::new(),
            bedroom_options: Vec::new(),
            superhost_only: false,
            bedroom_type: None,
            filtered: Vec::new(),
            favorites,
            show_favorites: false,
            theme,
        }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Current selection as the filter engine sees it.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            locations: self
                .locations
                .iter()
                .filter(|f| f.selected)
                .map(|f| f.location.clone())
                .collect(),
            superhost_only: self.superhost_only,
            bedroom_type: self.bedroom_type,
        }
    }

    /// Enter the loading state, dropping any previous dataset, facets and
    /// selection. Favorites and theme are untouched.
    pub fn begin_load(&mut self) {
        self.catalog = CatalogStore::Loading;
        self.locations.clear();
        self.bedroom_options.clear();
        self.superhost_only = false;
        self.bedroom_type = None;
        self.filtered.clear();
    }

    /// Install a fully deserialized dataset: facets are derived and the
    /// filtered view recomputed in the same state update, so no observer can
    /// see a ready catalog with stale derivations.
    pub fn finish_load(&mut self, listings: Vec<Listing>) {
        self.locations = derive_location_facets(&listings);
        self.bedroom_options = derive_bedroom_facets(&listings);
        self.catalog = CatalogStore::Ready {
            listings,
            fetched_at: Utc::now(),
        };
        self.recompute_filtered();
    }

    /// Terminal failure for this load attempt. Recovery is a fresh
    /// [`spawn_load`], nothing retries automatically.
    pub fn fail_load(&mut self, message: String) {
        self.catalog = CatalogStore::Error(message);
        self.filtered.clear();
    }

    pub fn recompute_filtered(&mut self) {
        let selection = self.selection();
        self.filtered = apply_filters(self.catalog.listings(), &selection);
    }

    /// Flip one location pill. Other selected locations stay selected.
    pub fn toggle_location(&mut self, name: &str) {
        if let Some(facet) = self.locations.iter_mut().find(|f| f.location == name) {
            facet.selected = !facet.selected;
        }
        self.recompute_filtered();
    }

    /// The "All" pill: clears every location flag in one step.
    pub fn clear_locations(&mut self) {
        for facet in &mut self.locations {
            facet.selected = false;
        }
        self.recompute_filtered();
    }

    pub fn toggle_superhost(&mut self) {
        self.superhost_only = !self.superhost_only;
        self.recompute_filtered();
    }

    pub fn set_bedroom_type(&mut self, bedroom_type: Option<i64>) {
        self.bedroom_type = bedroom_type;
        self.recompute_filtered();
    }

    pub fn toggle_favorite(&mut self, id: i64) -> bool {
        self.favorites.toggle(id, &self.db)
    }

    pub fn set_show_favorites(&mut self, show: bool) {
        self.show_favorites = show;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        theme::save(&self.db, self.theme);
    }
}

/// Start a fresh catalog load. The fetch runs on a detached thread and never
/// holds the state lock while waiting on I/O; the store flips straight from
/// `Loading` to its one outcome.
pub fn spawn_load(app: SharedState) {
    if let Ok(mut state) = app.lock() {
        state.begin_load();
    }

    std::thread::spawn(move || {
        eprintln!("Catalog load started");
        let result = catalog::load_catalog();

        let Ok(mut state) = app.lock() else {
            return;
        };
        match result {
            Ok(listings) => {
                eprintln!("Catalog loaded ({} listings)", listings.len());
                state.finish_load(listings);
            }
            Err(e) => {
                eprintln!("Catalog load failed: {e}");
                state.fail_load(e.to_string());
            }
        }
    });
}
