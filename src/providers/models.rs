use serde::{Deserialize, Deserializer};
use serde_json::Value;

// similar home
//  ├── property_id
//  ├── list_price
//  ├── location
//  │    └── address
//  │         ├── line
//  │         ├── city
//  │         ├── state_code
//  │         ├── postal_code
//  │         └── coordinate
//  │              ├── lat
//  │              └── lon
//  ├── description
//  │    ├── beds
//  │    ├── baths
//  │    └── sqft
//  └── primary_photo
//       └── href

#[derive(Debug, Deserialize)]
pub struct SimilarHomesResponse {
    pub results: SimilarHomesResults,
}

#[derive(Debug, Deserialize)]
pub struct SimilarHomesResults {
    pub similar_homes: SimilarHomes,
}

#[derive(Debug, Deserialize)]
pub struct SimilarHomes {
    pub count: Option<i64>,
    #[serde(default)]
    pub properties: Vec<ComparableProperty>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparableProperty {
    pub property_id: Option<String>,
    pub list_price: Option<i64>,
    pub location: Option<Location>,
    pub description: Option<Description>,
    pub primary_photo: Option<Photo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub line: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coordinate {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    pub beds: Option<i64>,
    pub baths: Option<f64>,
    pub sqft: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Photo {
    pub href: Option<String>,
}

impl ComparableProperty {
    pub fn address(&self) -> Option<&Address> {
        self.location.as_ref().and_then(|l| l.address.as_ref())
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.address().and_then(|a| a.coordinate.as_ref())
    }
}

/// `properties[]` of the detail endpoint. Passed to the view as-is.
#[derive(Debug, Deserialize)]
pub struct HomeDetailResponse {
    #[serde(default)]
    pub properties: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SchoolsResponse {
    pub schools: SchoolList,
}

#[derive(Debug, Deserialize)]
pub struct SchoolList {
    #[serde(default)]
    pub school: Vec<Value>,
}

/// One row of the municipal crime dataset. Only the two columns the
/// chart needs are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IncidentRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl IncidentRecord {
    #[cfg(test)]
    pub fn new(zip_code: &str, description: Option<&str>) -> Self {
        Self {
            zip_code: Some(zip_code.to_string()),
            description: description.map(str::to_string),
        }
    }
}

// Socrata datasets are inconsistent about zip columns: some export text,
// some export numbers (which drop leading zeros, or carry a `.0`).
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(numeric_zip(&n)),
        _ => None,
    })
}

fn numeric_zip(n: &serde_json::Number) -> String {
    let whole = n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    });

    match whole {
        Some(zip) => format!("{zip:05}"),
        None => n.to_string(),
    }
}
