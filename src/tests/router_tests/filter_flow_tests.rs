use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::router_tests::{body_string, get, hero};
use crate::tests::utils::make_ready_state;

#[test]
fn toggling_a_location_narrows_the_grid() {
    let app = make_ready_state("filter_location");

    let resp = handle(get("/filter/location?name=Paris%2C+France"), &app, &hero()).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains(r#"<span class="count-number">2</span>"#));
    assert!(body.contains("Marais Loft"));
    assert!(!body.contains("Trastevere Studio"));
}

#[test]
fn the_all_pill_clears_every_selected_location() {
    let app = make_ready_state("filter_all");

    handle(get("/filter/location?name=Paris%2C+France"), &app, &hero()).unwrap();
    handle(get("/filter/location?name=Rome%2C+Italy"), &app, &hero()).unwrap();
    assert_eq!(app.lock().unwrap().selection().locations.len(), 2);

    handle(get("/filter/all"), &app, &hero()).unwrap();

    let state = app.lock().unwrap();
    assert!(state.selection().locations.is_empty());
    assert_eq!(state.filtered.len(), 4);
}

#[test]
fn superhost_toggle_round_trips() {
    let app = make_ready_state("filter_superhost");

    handle(get("/filter/superhost"), &app, &hero()).unwrap();
    assert_eq!(app.lock().unwrap().filtered.len(), 2);

    handle(get("/filter/superhost"), &app, &hero()).unwrap();
    assert_eq!(app.lock().unwrap().filtered.len(), 4);
}

#[test]
fn bedroom_type_is_set_and_cleared_via_the_query() {
    let app = make_ready_state("filter_bedrooms");

    handle(get("/filter/bedrooms?n=1"), &app, &hero()).unwrap();
    {
        let state = app.lock().unwrap();
        assert_eq!(state.bedroom_type, Some(1));
        assert_eq!(state.filtered.len(), 1);
    }

    // An empty value means "no constraint" again.
    handle(get("/filter/bedrooms?n="), &app, &hero()).unwrap();
    {
        let state = app.lock().unwrap();
        assert_eq!(state.bedroom_type, None);
        assert_eq!(state.filtered.len(), 4);
    }
}

#[test]
fn a_non_numeric_bedroom_count_is_rejected() {
    let app = make_ready_state("filter_bad_bedrooms");
    let result = handle(get("/filter/bedrooms?n=lots"), &app, &hero());
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn a_missing_location_name_is_rejected() {
    let app = make_ready_state("filter_bad_location");
    let result = handle(get("/filter/location"), &app, &hero());
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn location_and_superhost_filters_compound() {
    let app = make_ready_state("filter_compound");

    handle(get("/filter/location?name=Rome%2C+Italy"), &app, &hero()).unwrap();
    handle(get("/filter/superhost"), &app, &hero()).unwrap();

    // Rome's only listing is not a superhost.
    assert!(app.lock().unwrap().filtered.is_empty());
}
