// templates/pages/details.rs

use crate::details::DetailsView;
use crate::templates::components::{
    comparable_card, crime_bar_chart, detail_summary, hidden_selection_fields, school_table,
};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn details_page(view: &DetailsView) -> Markup {
    let sel = &view.selection;
    let heading = sel.display_address();

    desktop_layout(
        &heading,
        view.email.as_deref(),
        html! {
            div class="flex items-center justify-between" {
                h1 { (heading) }
                div class="actions" {
                    @if let Some(url) = &sel.url {
                        a href=(url) target="_blank" rel="noopener" class="btn" { "Listing" }
                    }
                    a href="/map" class="btn" { "Back to map" }
                    @if view.email.is_some() && sel.provider_id.is_some() {
                        form method="post" action="/favorites" class="inline" {
                            (hidden_selection_fields(sel))
                            button type="submit" class="primary" { "Add to favorites" }
                        }
                    }
                }
            }

            (card("Home details", html! {
                @if view.home_list.is_empty() {
                    p class="empty" { "No details available for this home." }
                } @else {
                    @for detail in &view.home_list {
                        (detail_summary(detail))
                    }
                }
            }))

            (card("Crime near this home", html! {
                @match &view.crime_chart {
                    Some(chart) => {
                        (crime_bar_chart(chart))
                    }
                    None => {
                        p class="empty" { "No reported crimes found for this zip code." }
                    }
                }
            }))

            (card("Nearby schools", html! {
                @if view.schools.is_empty() {
                    p class="empty" { "No school ratings available." }
                } @else {
                    (school_table(&view.schools))
                }
            }))

            (card("Similar homes nearby", html! {
                @if view.nearby_houses.is_empty() {
                    p class="empty" { "No similar homes found." }
                } @else {
                    div class="comparables grid" {
                        @for home in &view.nearby_houses {
                            (comparable_card(home, sel))
                        }
                    }
                }
            }))
        },
    )
}
