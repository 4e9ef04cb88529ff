use crate::hero::HeroCarousel;
use crate::router::handle;
use crate::state::AppState;
use crate::storage::connection::{init_db, Database};
use astra::Server;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

mod catalog;
mod domain;
mod errors;
mod hero;
mod responses;
mod router;
mod state;
mod storage;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let db = Database::new("staybrowse.sqlite3");

    if let Err(e) = init_db(&db) {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // Favorites and theme come back from the prefs store; the catalog starts
    // loading in the background so the first page can render immediately.
    let app = Arc::new(Mutex::new(AppState::new(db)));
    state::spawn_load(Arc::clone(&app));

    let hero = Arc::new(HeroCarousel::new());
    hero::spawn_ticker(Arc::clone(&hero));

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &app, &hero) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
