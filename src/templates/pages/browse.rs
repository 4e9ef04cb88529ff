use crate::domain::projection::{BrowseVm, CatalogPhase};
use crate::hero::HeroSlide;
use crate::templates::components::{favorites_panel, filter_bar, hero_section, listing_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn browse_page(vm: &BrowseVm, slide: &HeroSlide) -> Markup {
    desktop_layout(
        "staybrowse",
        vm.theme,
        html! {
            (topbar(vm))
            (hero_section(slide))
            (content(vm))
            @if vm.show_favorites {
                (favorites_panel(vm))
            }
            a class="favorites-fab" href="/favorites/open" { "♥ " (vm.favorites_count) }
        },
    )
}

fn topbar(vm: &BrowseVm) -> Markup {
    html! {
        header class="topbar" {
            span class="logo" { "staybrowse" }
            nav class="theme-toggle" {
                @for (mode, label) in [("dark", "Dark"), ("light", "Light")] {
                    a class=(if vm.theme.as_str() == mode { "mode active" } else { "mode" })
                        href="/theme/toggle"
                        aria-label=(format!("Switch to {mode} mode")) {
                        (label)
                    }
                }
            }
        }
    }
}

fn content(vm: &BrowseVm) -> Markup {
    match &vm.phase {
        CatalogPhase::Loading => html! {
            section id="properties" class="status" {
                p { "Loading properties..." }
            }
        },
        CatalogPhase::Error(message) => html! {
            section id="properties" class="status error" {
                p { "Error loading data:" }
                p class="detail" { (message) }
                a class="cta" href="/reload" { "Reload" }
            }
        },
        CatalogPhase::Ready => html! {
            section id="properties" {
                (filter_bar(vm))
                h2 class="count" {
                    "Over " span class="count-number" { (vm.total) } " Stays"
                }
                @if let Some(fetched_at) = vm.fetched_at {
                    p class="updated" { "Updated " (fetched_at.format("%H:%M UTC")) }
                }
                @if vm.total > 0 {
                    div class="grid" {
                        @for card in &vm.cards {
                            (listing_card(card))
                        }
                    }
                } @else {
                    div class="empty-state" {
                        h3 { "No properties found" }
                        p { "Try adjusting your filters" }
                    }
                }
            }
        },
    }
}
