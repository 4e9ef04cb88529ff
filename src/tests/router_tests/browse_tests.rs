use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::router_tests::{body_string, get, hero};
use crate::tests::utils::{make_db, make_ready_state};
use std::sync::{Arc, Mutex};

#[test]
fn browse_page_shows_count_and_cards() {
    let app = make_ready_state("browse");

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Over"));
    assert!(body.contains(r#"<span class="count-number">4</span>"#));
    assert!(body.contains("Marais Loft"));
    assert!(body.contains("Trastevere Studio"));
}

#[test]
fn browse_page_shows_loading_before_the_catalog_arrives() {
    let app = Arc::new(Mutex::new(AppState::new(make_db("browse_loading"))));

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Loading properties..."));
    assert!(!body.contains(r#"<span class="count-number">"#));
}

#[test]
fn browse_page_surfaces_a_failed_load_with_a_reload_link() {
    let app = Arc::new(Mutex::new(AppState::new(make_db("browse_error"))));
    app.lock()
        .unwrap()
        .fail_load("HTTP error! status: 500".to_string());

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Error loading data:"));
    assert!(body.contains("HTTP error! status: 500"));
    assert!(body.contains(r#"href="/reload""#));
}

#[test]
fn empty_filter_result_renders_the_empty_state() {
    let app = make_ready_state("browse_empty");
    {
        let mut state = app.lock().unwrap();
        state.toggle_superhost();
        state.set_bedroom_type(Some(1)); // no superhost has 1 bedroom
    }

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No properties found"));
    assert!(body.contains("Try adjusting your filters"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = make_ready_state("browse_404");
    let result = handle(get("/nope"), &app, &hero());
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn hero_headline_is_rendered() {
    let app = make_ready_state("browse_hero");
    let hero = hero();
    hero.advance();

    let mut resp = handle(get("/"), &app, &hero).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains(crate::hero::HERO_SLIDES[1].title));
}
