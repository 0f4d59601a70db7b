// src/domain/selection.rs

use crate::providers::ComparableProperty;
use std::collections::HashMap;

/// The property currently being viewed. Every field is optional: a page can
/// be opened with only part of the selection known, and each details branch
/// checks for the fields it needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySelection {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub provider_id: Option<String>,
    pub url: Option<String>,
}

/// Selection plus the signed-in user's email, threaded explicitly through
/// every operation that needs them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionContext {
    pub selection: PropertySelection,
    pub email: Option<String>,
}

impl PropertySelection {
    /// Builds a selection from decoded query or form pairs. Blank values are
    /// treated as absent; unparsable coordinates too.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let number = |key: &str| text(key).and_then(|v| v.parse::<f64>().ok());

        Self {
            address: text("address"),
            city: text("city"),
            state: text("state"),
            zipcode: text("zipcode"),
            lat: number("lat"),
            long: number("long"),
            provider_id: text("prop_id"),
            url: text("url"),
        }
    }

    /// Inverse of `from_params`, used to build links and hidden form fields.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(v) = value {
                out.push((key, v));
            }
        };

        push("prop_id", self.provider_id.clone());
        push("address", self.address.clone());
        push("city", self.city.clone());
        push("state", self.state.clone());
        push("zipcode", self.zipcode.clone());
        push("lat", self.lat.map(|v| v.to_string()));
        push("long", self.long.map(|v| v.to_string()));
        push("url", self.url.clone());

        out
    }

    /// Pivots the selection to a comparable listing. Provider ID, address,
    /// city, zip and coordinates are taken from the comparable; state and
    /// listing URL are left as they were.
    pub fn apply_comparable(&mut self, comparable: &ComparableProperty) {
        let address = comparable.address();
        let coordinate = comparable.coordinate();

        self.provider_id = comparable.property_id.clone();
        self.address = address.and_then(|a| a.line.clone());
        self.city = address.and_then(|a| a.city.clone());
        self.zipcode = address.and_then(|a| a.postal_code.clone());
        self.lat = coordinate.and_then(|c| c.lat);
        self.long = coordinate.and_then(|c| c.lon);
    }

    /// Single-line address for headings.
    pub fn display_address(&self) -> String {
        let parts: Vec<&str> = [
            self.address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zipcode.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "Unknown address".to_string()
        } else {
            parts.join(", ")
        }
    }
}
