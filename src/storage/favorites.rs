use crate::catalog::models::Listing;
use crate::errors::ServerError;
use crate::storage::connection::Database;
use crate::storage::prefs;

pub const FAVORITES_KEY: &str = "propertyFavorites";

/// User-marked listings, persisted after every mutation. Ids keep insertion
/// order so the stored array round-trips unchanged across sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteSet {
    ids: Vec<i64>,
}

impl FavoriteSet {
    /// Load from storage. Missing or malformed state is an empty set, never
    /// an error.
    pub fn load(db: &Database) -> Self {
        let raw = match prefs::get(db, FAVORITES_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Failed to read favorites, starting empty: {e}");
                None
            }
        };

        let ids = raw
            .as_deref()
            .and_then(|json| serde_json::from_str::<Vec<i64>>(json).ok())
            .unwrap_or_default();

        Self { ids }
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership and persist before returning. The in-memory set is
    /// authoritative; a storage failure is warned and the toggle still
    /// succeeds.
    pub fn toggle(&mut self, id: i64, db: &Database) -> bool {
        match self.ids.iter().position(|&fav| fav == id) {
            Some(pos) => {
                self.ids.remove(pos);
            }
            None => self.ids.push(id),
        }

        if let Err(e) = self.persist(db) {
            eprintln!("Failed to persist favorites (keeping in-memory set): {e}");
        }

        self.is_favorite(id)
    }

    /// The favorited subset of `listings`, preserving dataset order.
    pub fn list<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|l| l.id.map(|id| self.is_favorite(id)).unwrap_or(false))
            .collect()
    }

    fn persist(&self, db: &Database) -> Result<(), ServerError> {
        let json =
            serde_json::to_string(&self.ids).map_err(|e| ServerError::DbError(e.to_string()))?;
        prefs::set(db, FAVORITES_KEY, &json)
    }
}
