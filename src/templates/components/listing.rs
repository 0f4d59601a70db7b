use crate::domain::PropertySelection;
use crate::providers::ComparableProperty;
use maud::{html, Markup};
use serde_json::Value;

/// Reads a nested string or number out of a passthrough provider record.
pub fn json_text(value: &Value, path: &[&str]) -> Option<String> {
    let leaf = path.iter().try_fold(value, |v, key| v.get(key))?;
    match leaf {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if amount < 0 {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}

/// Hidden inputs carrying the current selection through a form post.
pub fn hidden_selection_fields(selection: &PropertySelection) -> Markup {
    html! {
        @for (name, value) in selection.to_params() {
            input type="hidden" name=(name) value=(value);
        }
    }
}

pub fn detail_summary(detail: &Value) -> Markup {
    let rows = [
        ("Price", json_text(detail, &["price"])),
        ("Beds", json_text(detail, &["beds"])),
        ("Baths", json_text(detail, &["baths"])),
        ("Size (sqft)", json_text(detail, &["building_size", "size"])),
        ("Lot (sqft)", json_text(detail, &["lot_size", "size"])),
        ("Year built", json_text(detail, &["year_built"])),
        ("Type", json_text(detail, &["prop_type"])),
        ("Status", json_text(detail, &["prop_status"])),
    ];

    html! {
        dl class="detail-summary" {
            @for (label, value) in rows.iter() {
                @if let Some(value) = value {
                    dt { (label) }
                    dd { (value) }
                }
            }
        }
        @if let Some(text) = json_text(detail, &["description"]) {
            p class="detail-description" { (text) }
        }
    }
}

/// A comparable listing with a button that pivots the page to it.
pub fn comparable_card(home: &ComparableProperty, current: &PropertySelection) -> Markup {
    let address = home.address();
    let coordinate = home.coordinate();
    let description = home.description.as_ref();

    html! {
        div class="comparable card" {
            @if let Some(href) = home.primary_photo.as_ref().and_then(|p| p.href.as_deref()) {
                img src=(href) alt="Comparable home" loading="lazy";
            }
            @if let Some(price) = home.list_price {
                p class="price" { (money(price)) }
            }
            p class="address" {
                (address.and_then(|a| a.line.as_deref()).unwrap_or("Address unavailable"))
                @if let Some(city) = address.and_then(|a| a.city.as_deref()) {
                    ", " (city)
                }
                @if let Some(zip) = address.and_then(|a| a.postal_code.as_deref()) {
                    " " (zip)
                }
            }
            @if let Some(d) = description {
                p class="facts" {
                    @if let Some(beds) = d.beds { (beds) " bd " }
                    @if let Some(baths) = d.baths { (baths) " ba " }
                    @if let Some(sqft) = d.sqft { (sqft) " sqft" }
                }
            }

            form method="post" action="/result/refresh" {
                (hidden_selection_fields(current))
                @if let Some(id) = &home.property_id {
                    input type="hidden" name="comparable_prop_id" value=(id);
                }
                @if let Some(a) = address {
                    @if let Some(line) = &a.line {
                        input type="hidden" name="comparable_address" value=(line);
                    }
                    @if let Some(city) = &a.city {
                        input type="hidden" name="comparable_city" value=(city);
                    }
                    @if let Some(zip) = &a.postal_code {
                        input type="hidden" name="comparable_zipcode" value=(zip);
                    }
                }
                @if let Some(c) = coordinate {
                    @if let Some(lat) = c.lat {
                        input type="hidden" name="comparable_lat" value=(lat);
                    }
                    @if let Some(lon) = c.lon {
                        input type="hidden" name="comparable_long" value=(lon);
                    }
                }
                button type="submit" class="btn" { "View this home" }
            }
        }
    }
}

pub fn school_table(schools: &[Value]) -> Markup {
    html! {
        table class="schools" {
            thead {
                tr {
                    th { "School" }
                    th { "Rating" }
                    th { "Grades" }
                    th { "Distance" }
                }
            }
            tbody {
                @for school in schools {
                    tr {
                        td { (json_text(school, &["name"]).unwrap_or_else(|| "Unnamed school".into())) }
                        td { (json_text(school, &["gsRating"]).unwrap_or_else(|| "n/a".into())) }
                        td { (json_text(school, &["gradeRange"]).unwrap_or_default()) }
                        td { (json_text(school, &["distance"]).unwrap_or_default()) }
                    }
                }
            }
        }
    }
}
