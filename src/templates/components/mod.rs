use maud::{html, Markup};

pub mod chart;
pub mod listing;

pub use chart::crime_bar_chart;
pub use listing::{comparable_card, detail_summary, hidden_selection_fields, school_table};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
