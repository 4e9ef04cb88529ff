pub mod card;
pub mod favorites_panel;
pub mod filter_bar;
pub mod hero;

pub use card::listing_card;
pub use favorites_panel::favorites_panel;
pub use filter_bar::filter_bar;
pub use hero::hero_section;
