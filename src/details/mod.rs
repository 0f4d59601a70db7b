// src/details/mod.rs
//
// Everything the details page shows about one selected property. The three
// sources are independent: each branch runs on its own scoped thread and
// returns its own piece of the view. All branches are joined before the view
// is returned, so nothing writes into a page that has already been rendered.

use crate::domain::{build_crime_chart, CrimeChart, PropertySelection, SelectionContext};
use crate::providers::{
    ComparableProperty, CrimeProvider, ListingProvider, Providers, SchoolProvider,
};
use serde_json::Value;
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct DetailsView {
    pub selection: PropertySelection,
    pub email: Option<String>,
    pub home_list: Vec<Value>,
    pub nearby_houses: Vec<ComparableProperty>,
    pub schools: Vec<Value>,
    pub crime_chart: Option<CrimeChart>,
}

#[derive(Debug, Default)]
struct ListingData {
    home_list: Vec<Value>,
    nearby_houses: Vec<ComparableProperty>,
}

/// Runs every branch whose inputs are present and composes the results.
/// Missing inputs and provider failures leave the branch's output empty.
pub fn assemble(ctx: &SelectionContext, providers: &Providers, crime_year: i32) -> DetailsView {
    let sel = &ctx.selection;

    let (listing, schools, crime_chart) = thread::scope(|s| {
        let listing = s.spawn(|| listing_branch(sel, providers.listings.as_ref()));
        let schools = s.spawn(|| schools_branch(sel, providers.schools.as_ref()));
        let crimes = s.spawn(|| crime_branch(sel, providers.crimes.as_ref(), crime_year));

        (
            join_branch("listing", listing),
            join_branch("schools", schools),
            join_branch("crime", crimes),
        )
    });

    DetailsView {
        selection: sel.clone(),
        email: ctx.email.clone(),
        home_list: listing.home_list,
        nearby_houses: listing.nearby_houses,
        schools,
        crime_chart,
    }
}

/// Pivots the context to a comparable property and assembles its page.
pub fn refresh(
    ctx: &mut SelectionContext,
    comparable: &ComparableProperty,
    providers: &Providers,
    crime_year: i32,
) -> DetailsView {
    ctx.selection.apply_comparable(comparable);
    tracing::info!(
        provider_id = ?ctx.selection.provider_id,
        zipcode = ?ctx.selection.zipcode,
        "refreshing details for comparable property"
    );
    assemble(ctx, providers, crime_year)
}

// A panicking branch only loses its own section of the page.
fn join_branch<T: Default>(name: &str, handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|_| {
        tracing::error!(branch = name, "details branch panicked");
        T::default()
    })
}

fn listing_branch(sel: &PropertySelection, listings: &dyn ListingProvider) -> ListingData {
    let Some(property_id) = sel.provider_id.as_deref() else {
        tracing::info!("property ID is undefined, skipping listing provider");
        return ListingData::default();
    };

    // Comparables and detail are independent calls; one failing must not
    // cost the other.
    thread::scope(|s| {
        let similar = s.spawn(|| similar_homes(property_id, listings));
        let detail = s.spawn(|| home_detail(property_id, listings));

        ListingData {
            nearby_houses: join_branch("similar homes", similar),
            home_list: join_branch("home detail", detail),
        }
    })
}

fn similar_homes(property_id: &str, listings: &dyn ListingProvider) -> Vec<ComparableProperty> {
    match listings.similar_homes(property_id) {
        Ok(resp) => {
            let homes = resp.results.similar_homes;
            match homes.count {
                None => {
                    tracing::info!(property_id, "returned similar homes is null");
                    Vec::new()
                }
                Some(0) => {
                    tracing::info!(property_id, "returned similar homes count is 0");
                    Vec::new()
                }
                Some(_) => homes.properties,
            }
        }
        Err(e) => {
            tracing::error!(property_id, error = %e, "similar homes request failed");
            Vec::new()
        }
    }
}

fn home_detail(property_id: &str, listings: &dyn ListingProvider) -> Vec<Value> {
    match listings.home_detail(property_id) {
        Ok(resp) => resp.properties,
        Err(e) => {
            tracing::error!(property_id, error = %e, "home detail request failed");
            Vec::new()
        }
    }
}

fn schools_branch(sel: &PropertySelection, schools: &dyn SchoolProvider) -> Vec<Value> {
    let (Some(state), Some(lat), Some(lon)) = (sel.state.as_deref(), sel.lat, sel.long) else {
        tracing::info!(
            state = ?sel.state,
            lat = ?sel.lat,
            long = ?sel.long,
            "state, latitude or longitude is undefined, skipping schools"
        );
        return Vec::new();
    };

    match schools.nearby_schools(state, lat, lon) {
        Ok(resp) => resp.schools.school,
        Err(e) => {
            tracing::error!(state, error = %e, "schools request failed");
            Vec::new()
        }
    }
}

fn crime_branch(
    sel: &PropertySelection,
    crimes: &dyn CrimeProvider,
    year: i32,
) -> Option<CrimeChart> {
    let Some(zipcode) = sel.zipcode.as_deref() else {
        tracing::info!("zipcode is undefined, skipping crime chart");
        return None;
    };

    match crimes.incidents() {
        Ok(incidents) => build_crime_chart(zipcode, &incidents, year, &mut rand::thread_rng()),
        Err(e) => {
            tracing::error!(zipcode, error = %e, "crime data request failed");
            None
        }
    }
}
