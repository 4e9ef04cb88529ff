use crate::domain::projection::BrowseVm;
use maud::{html, Markup};

pub fn filter_bar(vm: &BrowseVm) -> Markup {
    html! {
        div class="filter-bar" {
            div class="pills" {
                a class=(pill_class(vm.all_selected)) href="/filter/all" { "All" }
                @for pill in &vm.pills {
                    a class=(pill_class(pill.selected))
                        href=(location_href(&pill.location))
                        title=(pill.location) {
                        (pill.short_label)
                    }
                }
            }
            div class="extra-filters" {
                a class=(if vm.superhost_only { "toggle on" } else { "toggle" })
                    href="/filter/superhost" {
                    span class="knob" {}
                    span { "Superhost" }
                }
                form class="bedroom-select" action="/filter/bedrooms" method="get" {
                    select name="n" onchange="this.form.submit()" {
                        option value="" selected[vm.bedroom_type.is_none()] { "Property Type" }
                        @for n in &vm.bedroom_options {
                            option value=(n) selected[vm.bedroom_type == Some(*n)] {
                                (n) " bedroom" @if *n != 1 { "s" }
                            }
                        }
                    }
                    noscript { button type="submit" { "Apply" } }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill active"
    } else {
        "pill"
    }
}

fn location_href(location: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", location)
        .finish();
    format!("/filter/location?{query}")
}
