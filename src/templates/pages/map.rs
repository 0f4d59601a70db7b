use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn map_page(email: Option<&str>) -> Markup {
    desktop_layout(
        "Map",
        email,
        html! {
            h1 { "Map" }
            div id="map" class="map-view" data-zoom="12" {}
            p class="text-gray-600" {
                "Pick a home on the map or " a href="/" { "search by address" } "."
            }
        },
    )
}
