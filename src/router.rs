use crate::errors::ServerError;
use crate::hero::HeroCarousel;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::state::{self, AppState, SharedState};
use crate::templates;
use astra::Request;
use std::collections::HashMap;
use std::sync::{Arc, MutexGuard};

pub fn handle(req: Request, app: &SharedState, hero: &Arc<HeroCarousel>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let vm = {
                let state = lock_state(app)?;
                crate::domain::projection::project(&state)
            };
            html_response(templates::pages::browse_page(&vm, hero.current()))
        }

        // Filter intents. Each one mutates the selection and leaves the
        // filtered view recomputed before redirecting back.
        ("GET", "/filter/location") => {
            let params = parse_query(&req);
            let name = params
                .get("name")
                .filter(|n| !n.is_empty())
                .ok_or_else(|| ServerError::BadRequest("missing location name".to_string()))?;
            lock_state(app)?.toggle_location(name);
            redirect_response("/")
        }
        ("GET", "/filter/all") => {
            lock_state(app)?.clear_locations();
            redirect_response("/")
        }
        ("GET", "/filter/superhost") => {
            lock_state(app)?.toggle_superhost();
            redirect_response("/")
        }
        ("GET", "/filter/bedrooms") => {
            let params = parse_query(&req);
            let bedroom_type = match params.get("n").map(String::as_str) {
                None | Some("") => None,
                Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                    ServerError::BadRequest(format!("invalid bedroom count: {raw}"))
                })?),
            };
            lock_state(app)?.set_bedroom_type(bedroom_type);
            redirect_response("/")
        }

        // Favorites intents.
        ("GET", "/favorites/toggle") => {
            let params = parse_query(&req);
            let id = params
                .get("id")
                .and_then(|raw| raw.parse::<i64>().ok())
                .ok_or_else(|| ServerError::BadRequest("missing or invalid listing id".to_string()))?;
            lock_state(app)?.toggle_favorite(id);
            redirect_response("/")
        }
        ("GET", "/favorites/open") => {
            lock_state(app)?.set_show_favorites(true);
            redirect_response("/")
        }
        ("GET", "/favorites/close") => {
            lock_state(app)?.set_show_favorites(false);
            redirect_response("/")
        }

        ("GET", "/theme/toggle") => {
            lock_state(app)?.toggle_theme();
            redirect_response("/")
        }

        // Fresh catalog load; overwrites whatever the store held.
        ("GET", "/reload") => {
            state::spawn_load(Arc::clone(app));
            redirect_response("/")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn lock_state<'a>(app: &'a SharedState) -> Result<MutexGuard<'a, AppState>, ServerError> {
    app.lock().map_err(|_| ServerError::InternalError)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
