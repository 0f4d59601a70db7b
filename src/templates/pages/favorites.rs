use crate::domain::SavedFavorite;
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn result_link(f: &SavedFavorite) -> String {
    let h = &f.house;
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("prop_id", &h.provider_id);
    for (key, value) in [
        ("address", &h.address),
        ("city", &h.city),
        ("zipcode", &h.zipcode),
        ("url", &h.url),
    ] {
        if let Some(v) = value {
            query.append_pair(key, v);
        }
    }
    format!("/result?{}", query.finish())
}

pub fn favorites_page(email: &str, favorites: &[SavedFavorite]) -> Markup {
    desktop_layout(
        "Favorites",
        Some(email),
        html! {
            h1 { "Your favorite homes" }

            @if favorites.is_empty() {
                p class="empty" { "You have not saved any homes yet." }
            } @else {
                table class="favorites" {
                    thead {
                        tr {
                            th { "Address" }
                            th { "City" }
                            th { "Zip" }
                            th { "Saved" }
                            th {}
                        }
                    }
                    tbody {
                        @for f in favorites {
                            tr {
                                td { a href=(result_link(f)) { (f.house.address.as_deref().unwrap_or("Unknown address")) } }
                                td { (f.house.city.as_deref().unwrap_or_default()) }
                                td { (f.house.zipcode.as_deref().unwrap_or_default()) }
                                td { (f.saved_at.format("%Y-%m-%d")) }
                                td {
                                    @if let Some(url) = &f.house.url {
                                        a href=(url) target="_blank" rel="noopener" { "Listing" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
