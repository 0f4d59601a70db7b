// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

/// Search form. Submits the selection fields to `/result` as a query string.
pub fn home_page(email: Option<&str>) -> Markup {
    desktop_layout(
        "Search",
        email,
        html! {
            h1 { "Find a safe home" }

            (card("Search for a home", html! {
                form method="get" action="/result" class="search" {
                    label for="address" { "Street address" }
                    input type="text" id="address" name="address" required;

                    label for="city" { "City" }
                    input type="text" id="city" name="city";

                    label for="state" { "State" }
                    input type="text" id="state" name="state" maxlength="2" placeholder="FL";

                    label for="zipcode" { "Zip code" }
                    input type="text" id="zipcode" name="zipcode" inputmode="numeric";

                    label for="prop_id" { "Listing ID (optional)" }
                    input type="text" id="prop_id" name="prop_id";

                    label for="lat" { "Latitude" }
                    input type="text" id="lat" name="lat" inputmode="decimal";

                    label for="long" { "Longitude" }
                    input type="text" id="long" name="long" inputmode="decimal";

                    button type="submit" class="primary" { "Search" }
                }
            }))

            @if email.is_none() {
                (card("Save favorites", html! {
                    form method="post" action="/account" {
                        label for="email" { "Email address" }
                        input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@domain.com"
                            autocomplete="email"
                            required;
                        button type="submit" class="primary" { "Continue" }
                    }
                }))
            }
        },
    )
}
