use crate::db::accounts::{get_or_create_account, require_account};
use crate::db::favorites::{add_favorite_house, list_favorite_houses};
use crate::db::Database;
use crate::details;
use crate::domain::{PropertySelection, SelectionContext};
use crate::errors::ServerError;
use crate::providers::{Address, ComparableProperty, Coordinate, Location, Providers};
use crate::responses::{css_response, html_response, redirect, ResultResp};
use crate::templates;
use astra::{Body, Request, ResponseBuilder};
use std::collections::HashMap;
use std::io::Read;

const EMAIL_COOKIE: &str = "email";
const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a request handler needs, built once in `main`.
pub struct AppState {
    pub db: Database,
    pub providers: Providers,
    pub crime_year: i32,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let email = email_from_cookie(&req);

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(email.as_deref())),
        ("GET", "/map") => html_response(templates::pages::map_page(email.as_deref())),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", "/result") => {
            let ctx = SelectionContext {
                selection: PropertySelection::from_params(&parse_query(&req)),
                email,
            };
            let view = details::assemble(&ctx, &state.providers, state.crime_year);
            html_response(templates::pages::details_page(&view))
        }

        ("POST", "/result/refresh") => {
            let form = parse_form(req)?;
            let comparable = comparable_from_form(&form)?;
            let mut ctx = SelectionContext {
                selection: PropertySelection::from_params(&form),
                email,
            };
            let view = details::refresh(&mut ctx, &comparable, &state.providers, state.crime_year);
            html_response(templates::pages::details_page(&view))
        }

        ("POST", "/favorites") => {
            let selection = PropertySelection::from_params(&parse_form(req)?);
            state
                .db
                .with_conn(|conn| add_favorite_house(conn, email.as_deref(), &selection))?;
            redirect(&result_url(&selection))
        }

        ("GET", "/favorites") => {
            let Some(email) = email else {
                return redirect("/");
            };
            let (account, favorites) = state.db.with_conn(|conn| {
                let account = require_account(conn, &email)?;
                let favorites = list_favorite_houses(conn, account.id)?;
                Ok((account, favorites))
            })?;
            html_response(templates::pages::favorites_page(&account.email, &favorites))
        }

        ("POST", "/account") => {
            let form = parse_form(req)?;
            let email = form
                .get("email")
                .ok_or_else(|| ServerError::BadRequest("email is required".into()))?;
            let account = state
                .db
                .with_conn(|conn| get_or_create_account(conn, email, chrono::Utc::now().timestamp()))?;
            remember_email(&account.email)
        }

        _ => Err(ServerError::NotFound(path.clone())),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}

fn email_from_cookie(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == EMAIL_COOKIE)
        .and_then(|(_, value)| {
            url::form_urlencoded::parse(format!("v={value}").as_bytes())
                .next()
                .map(|(_, v)| v.into_owned())
        })
        .filter(|v| !v.is_empty())
}

fn remember_email(email: &str) -> ResultResp {
    let encoded: String = url::form_urlencoded::byte_serialize(email.as_bytes()).collect();

    ResponseBuilder::new()
        .status(303)
        .header("Location", "/")
        .header(
            "Set-Cookie",
            format!("{EMAIL_COOKIE}={encoded}; Path=/; HttpOnly; SameSite=Lax"),
        )
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

fn result_url(selection: &PropertySelection) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in selection.to_params() {
        query.append_pair(key, &value);
    }
    format!("/result?{}", query.finish())
}

/// The refresh form posts the comparable's fields with a `comparable_`
/// prefix next to the current selection.
fn comparable_from_form(form: &HashMap<String, String>) -> Result<ComparableProperty, ServerError> {
    let text = |key: &str| {
        form.get(&format!("comparable_{key}"))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let number = |key: &str| text(key).and_then(|v| v.parse::<f64>().ok());

    let property_id = text("prop_id")
        .ok_or_else(|| ServerError::BadRequest("comparable property ID is required".into()))?;

    Ok(ComparableProperty {
        property_id: Some(property_id),
        location: Some(Location {
            address: Some(Address {
                line: text("address"),
                city: text("city"),
                state_code: None,
                postal_code: text("zipcode"),
                coordinate: Some(Coordinate {
                    lat: number("lat"),
                    lon: number("long"),
                }),
            }),
        }),
        ..Default::default()
    })
}
