use crate::db::accounts::find_account_by_email;
use crate::db::favorites::list_favorite_houses;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::fakes::{FakeCrimes, FakeListings, FakeSchools};
use crate::tests::utils::{body_string, test_app, TestApp};
use astra::Body;
use http::{Method, Request};

fn app() -> TestApp {
    test_app(
        FakeListings::with_similar(0),
        FakeSchools::with_names(&[]),
        FakeCrimes::with(Vec::new()),
    )
}

fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[test]
fn account_form_creates_account_and_sets_cookie() {
    let app = app();

    let resp = handle(post_form("/account", "email=Buyer%40Example.com", None), &app.state)
        .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("email=buyer%40example.com;"));

    let account = app
        .state
        .db
        .with_conn(|conn| find_account_by_email(conn, "buyer@example.com"))
        .unwrap();
    assert!(account.is_some());
}

#[test]
fn adding_a_favorite_stores_it_under_the_account() {
    let app = app();
    let cookie = Some("theme=dark; email=buyer%40example.com");
    handle(post_form("/account", "email=buyer%40example.com", None), &app.state).unwrap();

    let form = "prop_id=M100&address=1+Main+St&city=Gainesville&zipcode=32601\
                &url=https%3A%2F%2Flisting.example%2FM100";
    let resp = handle(post_form("/favorites", form, cookie), &app.state).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.starts_with("/result?prop_id=M100"));

    // Saving again overwrites rather than duplicating.
    handle(post_form("/favorites", form, cookie), &app.state).unwrap();

    let favorites = app
        .state
        .db
        .with_conn(|conn| {
            let account = find_account_by_email(conn, "buyer@example.com")?.unwrap();
            list_favorite_houses(conn, account.id)
        })
        .unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].house.provider_id, "M100");
    assert_eq!(
        favorites[0].house.url.as_deref(),
        Some("https://listing.example/M100")
    );

    let resp = handle(get("/favorites", cookie), &app.state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("1 Main St"));
}

#[test]
fn favorite_for_unknown_account_is_not_found() {
    let app = app();

    let err = handle(
        post_form("/favorites", "prop_id=M100", Some("email=ghost%40example.com")),
        &app.state,
    )
    .unwrap_err();

    assert_eq!(err.status(), 404);
    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("no account for ghost@example.com"));
}

#[test]
fn favorite_without_sign_in_is_rejected() {
    let app = app();
    let err = handle(post_form("/favorites", "prop_id=M100", None), &app.state).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn favorites_page_redirects_when_signed_out() {
    let app = app();
    let resp = handle(get("/favorites", None), &app.state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
}
