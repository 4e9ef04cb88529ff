use crate::domain::projection::CardVm;
use maud::{html, Markup};

pub fn listing_card(card: &CardVm) -> Markup {
    html! {
        article class="card" {
            div class="card-media" {
                img src=(card.image) alt=(card.title) loading="lazy";
                @if card.superhost {
                    span class="badge" { "★ Superhost" }
                }
                @if let Some(id) = card.id {
                    a class=(if card.is_favorite { "heart active" } else { "heart" })
                        href=(format!("/favorites/toggle?id={id}"))
                        aria-label=(if card.is_favorite { "Remove from favorites" } else { "Add to favorites" }) {
                        "♥"
                    }
                }
            }
            div class="card-body" {
                h3 { (card.title) }
                p class="description" { (card.description) }
                p class="capacity" {
                    (card.bedrooms) " bed" @if card.bedrooms != 1 { "s" }
                    " · "
                    (card.people) " guest" @if card.people != 1 { "s" }
                }
                div class="card-foot" {
                    p class="price" {
                        span class="amount" { "$" (card.price) }
                        span class="per" { "/night" }
                    }
                    p class="rating" { "★ " (card.rating) }
                }
            }
        }
    }
}
