use crate::errors::ServerError;
use crate::router::handle;
use crate::storage::favorites::FavoriteSet;
use crate::tests::router_tests::{body_string, get, hero};
use crate::tests::utils::make_ready_state;

#[test]
fn toggling_a_favorite_marks_the_card_and_persists() {
    let app = make_ready_state("favorites_toggle");

    let resp = handle(get("/favorites/toggle?id=2"), &app, &hero()).unwrap();
    assert_eq!(resp.status(), 303);

    {
        let state = app.lock().unwrap();
        assert!(state.favorites.is_favorite(2));

        // The persisted copy is already up to date.
        let reloaded = FavoriteSet::load(state.db());
        assert!(reloaded.is_favorite(2));
    }

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("heart active"));
    assert!(body.contains("♥ 1"));
}

#[test]
fn double_toggle_restores_the_original_state() {
    let app = make_ready_state("favorites_double");

    handle(get("/favorites/toggle?id=3"), &app, &hero()).unwrap();
    handle(get("/favorites/toggle?id=3"), &app, &hero()).unwrap();

    let state = app.lock().unwrap();
    assert!(!state.favorites.is_favorite(3));
    assert!(FavoriteSet::load(state.db()).is_empty());
}

#[test]
fn favorites_panel_lists_favorited_cards_in_dataset_order() {
    let app = make_ready_state("favorites_panel");

    handle(get("/favorites/toggle?id=4"), &app, &hero()).unwrap();
    handle(get("/favorites/toggle?id=1"), &app, &hero()).unwrap();
    handle(get("/favorites/open"), &app, &hero()).unwrap();

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Your Favorites:"));
    let first = body.find("Marais Loft").unwrap();
    let second = body.find("Left Bank House").unwrap();
    assert!(first < second);
}

#[test]
fn empty_panel_shows_the_hint() {
    let app = make_ready_state("favorites_empty");

    handle(get("/favorites/open"), &app, &hero()).unwrap();
    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No favorites yet"));

    handle(get("/favorites/close"), &app, &hero()).unwrap();
    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(!body.contains("No favorites yet"));
}

#[test]
fn a_missing_or_bad_id_is_rejected() {
    let app = make_ready_state("favorites_bad_id");

    assert!(matches!(
        handle(get("/favorites/toggle"), &app, &hero()),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/favorites/toggle?id=first"), &app, &hero()),
        Err(ServerError::BadRequest(_))
    ));
}
