use crate::domain::projection::BrowseVm;
use crate::templates::components::listing_card;
use maud::{html, Markup};

pub fn favorites_panel(vm: &BrowseVm) -> Markup {
    html! {
        aside class="favorites-panel" {
            a class="close" href="/favorites/close" { "✕ Close" }
            h2 {
                "Your Favorites: ("
                span class="count" { (vm.favorites_count) }
                ")"
            }
            @if vm.favorite_cards.is_empty() {
                div class="empty" {
                    p { "No favorites yet" }
                    p class="hint" { "Click the heart icon to save properties" }
                }
            } @else {
                div class="favorites-list" {
                    @for card in &vm.favorite_cards {
                        (listing_card(card))
                    }
                }
            }
        }
    }
}
