use crate::providers::IncidentRecord;
use crate::router::handle;
use crate::tests::fakes::{FakeCrimes, FakeListings, FakeSchools};
use crate::tests::utils::{body_string, test_app};
use astra::Body;
use http::{Method, Request};
use std::sync::atomic::Ordering;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

#[test]
fn home_page_loads() {
    let app = test_app(
        FakeListings::with_similar(0),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(Vec::new()),
    );

    let resp = handle(get("/"), &app.state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Find a safe home"));
    assert!(body.contains(r#"action="/result""#));
}

#[test]
fn result_page_renders_every_section() {
    let app = test_app(
        FakeListings::with_similar(2),
        FakeSchools::with_names(&["Littlewood Elementary"]),
        FakeCrimes::with(vec![
            IncidentRecord::new("32601", Some("THEFT")),
            IncidentRecord::new("32601", Some("THEFT")),
            IncidentRecord::new("32601", Some("ASSAULT")),
            IncidentRecord::new("32605", Some("ROBBERY")),
        ]),
    );

    let uri = "/result?prop_id=M100&address=1+Main+St&city=Gainesville&state=FL\
               &zipcode=32601&lat=29.65&long=-82.32";
    let resp = handle(get(uri), &app.state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("1 Main St, Gainesville, FL, 32601"));
    assert!(body.contains("315000"));
    assert!(body.contains("Littlewood Elementary"));
    assert!(body.contains("10 Comparable Way"));
    assert!(body.contains("11 Comparable Way"));
    assert!(body.contains("Number of Reported Crimes (2020) for 32601"));
    assert!(body.contains("THEFT: 2"));
    assert!(body.contains("ASSAULT: 1"));
    assert!(!body.contains("ROBBERY"));
}

#[test]
fn result_without_provider_id_never_calls_listings() {
    let app = test_app(
        FakeListings::with_similar(2),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(Vec::new()),
    );

    let resp = handle(get("/result?address=1+Main+St&zipcode=32601"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(app.listings.calls.load(Ordering::SeqCst), 0);
    assert_eq!(app.schools.calls.load(Ordering::SeqCst), 0);
    assert_eq!(app.crimes.calls.load(Ordering::SeqCst), 1);
    assert!(body.contains("No details available"));
    assert!(body.contains("No reported crimes found"));
}

#[test]
fn refresh_switches_to_the_comparable() {
    let app = test_app(
        FakeListings::with_similar(1),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(vec![IncidentRecord::new("32605", Some("BURGLARY"))]),
    );

    let form = "prop_id=M100&address=1+Main+St&city=Gainesville&state=FL&zipcode=32601\
                &comparable_prop_id=C0&comparable_address=10+Comparable+Way\
                &comparable_city=Gainesville&comparable_zipcode=32605\
                &comparable_lat=29.66&comparable_long=-82.4";
    let resp = handle(post_form("/result/refresh", form), &app.state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(app.listings.last_property_id().as_deref(), Some("C0"));
    assert!(body.contains("10 Comparable Way, Gainesville, FL, 32605"));
    assert!(body.contains("BURGLARY: 1"));
}

#[test]
fn refresh_without_comparable_is_a_bad_request() {
    let app = test_app(
        FakeListings::with_similar(0),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(Vec::new()),
    );

    let err = handle(post_form("/result/refresh", "prop_id=M100"), &app.state).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn map_page_loads_and_unknown_routes_404() {
    let app = test_app(
        FakeListings::with_similar(0),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(Vec::new()),
    );

    let resp = handle(get("/map"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(r#"id="map""#));

    let err = handle(get("/nowhere"), &app.state).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn layout_stylesheet_is_served() {
    let app = test_app(
        FakeListings::with_similar(0),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(Vec::new()),
    );

    let page = body_string(handle(get("/"), &app.state).unwrap());
    assert!(page.contains(r#"href="/static/main.css""#));

    let resp = handle(get("/static/main.css"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".crime-chart"));
}
