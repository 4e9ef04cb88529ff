pub mod facets;
pub mod filter;
pub mod projection;
