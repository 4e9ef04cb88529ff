mod browse_tests;
mod favorites_tests;
mod filter_flow_tests;
mod theme_tests;

use crate::hero::HeroCarousel;
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::Arc;

/// Build a GET request against the router. `Request::new` already defaults
/// the method to GET; only the uri needs filling in.
pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = path.parse().expect("invalid test uri");
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .expect("Failed to read response body");
    String::from_utf8(buf).expect("Response body was not UTF-8")
}

pub fn hero() -> Arc<HeroCarousel> {
    Arc::new(HeroCarousel::new())
}
