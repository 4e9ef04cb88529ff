use crate::catalog::models::{Capacity, Listing};
use crate::state::{AppState, SharedState};
use crate::storage::connection::{init_db, Database};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh prefs database at a unique temp path.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "staybrowse_{tag}_{}.sqlite3",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.display().to_string());
    init_db(&db).expect("Failed to initialize test DB");
    db
}

pub fn listing(
    id: i64,
    title: &str,
    location: &str,
    superhost: bool,
    bedrooms: Option<i64>,
) -> Listing {
    Listing {
        id: Some(id),
        title: title.to_string(),
        description: format!("{title}, a place to stay"),
        location: Some(location.to_string()),
        price: 100.0,
        rating: 4.5,
        superhost,
        capacity: Some(Capacity {
            bedrooms,
            people: Some(2),
        }),
        image: String::new(),
    }
}

/// Four listings over three locations, two superhosts, one unknown bedroom
/// count. Small enough to assert exact counts against.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(1, "Marais Loft", "Paris, France", true, Some(2)),
        listing(2, "Trastevere Studio", "Rome, Italy", false, Some(1)),
        listing(3, "Harbour Cabin", "Helsinki, Finland", false, None),
        listing(4, "Left Bank House", "Paris, France", true, Some(3)),
    ]
}

/// App state with the sample dataset installed, behind the shared handle the
/// router expects.
pub fn make_ready_state(tag: &str) -> SharedState {
    let mut state = AppState::new(make_db(tag));
    state.finish_load(sample_listings());
    Arc::new(Mutex::new(state))
}
