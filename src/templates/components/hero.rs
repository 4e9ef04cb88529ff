use crate::hero::HeroSlide;
use maud::{html, Markup};

pub fn hero_section(slide: &HeroSlide) -> Markup {
    html! {
        section class="hero" {
            h1 { (slide.title) }
            p class="tagline" { (slide.tagline) }
            a class="cta" href="#properties" { "Browse All Properties" }
            div class="stats" {
                div class="stat" {
                    p class="stat-value" { "500+" }
                    p class="stat-label" { "Properties" }
                }
                div class="stat" {
                    p class="stat-value" { "4.9★" }
                    p class="stat-label" { "Average Rating" }
                }
                div class="stat" {
                    p class="stat-value" { "50+" }
                    p class="stat-label" { "Cities" }
                }
            }
        }
    }
}
