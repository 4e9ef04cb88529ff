use crate::router::handle;
use crate::storage::theme::{self, Theme};
use crate::tests::router_tests::{body_string, get, hero};
use crate::tests::utils::make_ready_state;

#[test]
fn the_page_starts_light_and_toggles_to_dark() {
    let app = make_ready_state("theme_toggle");

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    assert!(body_string(&mut resp).contains(r#"<html data-theme="light">"#));

    handle(get("/theme/toggle"), &app, &hero()).unwrap();

    let mut resp = handle(get("/"), &app, &hero()).unwrap();
    assert!(body_string(&mut resp).contains(r#"<html data-theme="dark">"#));
}

#[test]
fn the_theme_preference_is_persisted_on_toggle() {
    let app = make_ready_state("theme_persist");

    handle(get("/theme/toggle"), &app, &hero()).unwrap();
    {
        let state = app.lock().unwrap();
        assert_eq!(theme::load(state.db()), Theme::Dark);
    }

    handle(get("/theme/toggle"), &app, &hero()).unwrap();
    {
        let state = app.lock().unwrap();
        assert_eq!(theme::load(state.db()), Theme::Light);
    }
}
