// src/domain/crime.rs

use crate::providers::IncidentRecord;
use rand::Rng;
use std::fmt;

/// Bar color. Alpha is always 1; it is kept so the value renders as the
/// `rgba(...)` string chart consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgba {
    /// Each channel uniform over 0..=255.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: rng.gen_range(0..=255),
            green: rng.gen_range(0..=255),
            blue: rng.gen_range(0..=255),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},1)", self.red, self.green, self.blue)
    }
}

/// One bar of the chart: a distinct offense description in the zip code.
#[derive(Debug, Clone, PartialEq)]
pub struct OffenseBucket {
    pub label: String,
    pub count: usize,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrimeChart {
    pub zipcode: String,
    pub title: String,
    pub dataset_label: String,
    pub buckets: Vec<OffenseBucket>,
}

impl CrimeChart {
    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    pub fn colors(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.color.to_string()).collect()
    }

    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Descriptions of the incidents in `zipcode`, sorted, duplicates kept.
/// Records without a description are dropped.
pub fn offenses_in_zip<'a>(zipcode: &str, incidents: &'a [IncidentRecord]) -> Vec<&'a str> {
    let mut offenses: Vec<&str> = incidents
        .iter()
        .filter(|r| r.zip_code.as_deref() == Some(zipcode))
        .filter_map(|r| r.description.as_deref())
        .collect();

    offenses.sort_unstable();
    offenses
}

/// Groups the incidents of one zip code into offense buckets in label
/// order. Labels, counts and colors come from the same pass over the sorted
/// offenses, so they can never drift apart.
pub fn aggregate_offenses<R: Rng + ?Sized>(
    zipcode: &str,
    incidents: &[IncidentRecord],
    rng: &mut R,
) -> Vec<OffenseBucket> {
    let offenses = offenses_in_zip(zipcode, incidents);

    let mut buckets: Vec<OffenseBucket> = Vec::new();
    for offense in offenses {
        match buckets.last_mut() {
            Some(last) if last.label == offense => last.count += 1,
            _ => buckets.push(OffenseBucket {
                label: offense.to_string(),
                count: 1,
                color: Rgba::random(rng),
            }),
        }
    }

    buckets
}

/// Runs the aggregation and wraps it in a chart model. `None` when nothing
/// in the zip code has a description.
pub fn build_crime_chart<R: Rng + ?Sized>(
    zipcode: &str,
    incidents: &[IncidentRecord],
    year: i32,
    rng: &mut R,
) -> Option<CrimeChart> {
    let buckets = aggregate_offenses(zipcode, incidents, rng);

    if buckets.is_empty() {
        tracing::info!(zipcode, "crime list is empty, skipping chart");
        return None;
    }

    tracing::debug!(zipcode, offenses = buckets.len(), "built crime chart");

    Some(CrimeChart {
        zipcode: zipcode.to_string(),
        title: format!("Number of Reported Crimes ({year}) for {zipcode}"),
        dataset_label: format!("Number of Reported Crimes Committed ({year}) {zipcode}"),
        buckets,
    })
}
