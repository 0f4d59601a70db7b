// src/db/favorites.rs
use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::db::accounts::require_account;
use crate::domain::{FavoriteHouse, PropertySelection, SavedFavorite};
use crate::errors::ServerError;

/// Saves the selected property under the account registered for `email`.
///
/// The record is keyed by provider ID, so saving the same property again
/// replaces the earlier row instead of adding a second one.
pub fn add_favorite_house(
    conn: &Connection,
    email: Option<&str>,
    selection: &PropertySelection,
) -> Result<FavoriteHouse, ServerError> {
    let email = email.ok_or_else(|| ServerError::BadRequest("not signed in".into()))?;
    let house = FavoriteHouse::from_selection(selection)?;
    let account = require_account(conn, email)?;

    upsert_favorite(conn, account.id, &house, Utc::now().naive_utc())?;

    tracing::info!(
        account_id = account.id,
        provider_id = %house.provider_id,
        "saved favorite house"
    );
    Ok(house)
}

pub fn upsert_favorite(
    conn: &Connection,
    account_id: i64,
    house: &FavoriteHouse,
    saved_at: NaiveDateTime,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into favorite_houses
            (account_id, provider_id, address, city, zipcode, url, saved_at)
        values (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        on conflict (account_id, provider_id) do update set
            address  = excluded.address,
            city     = excluded.city,
            zipcode  = excluded.zipcode,
            url      = excluded.url,
            saved_at = excluded.saved_at
        "#,
        params![
            account_id,
            house.provider_id,
            house.address,
            house.city,
            house.zipcode,
            house.url,
            saved_at,
        ],
    )
    .map_err(ServerError::db("upsert favorite failed"))?;

    Ok(())
}

/// Newest first.
pub fn list_favorite_houses(
    conn: &Connection,
    account_id: i64,
) -> Result<Vec<SavedFavorite>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select provider_id, address, city, zipcode, url, saved_at
            from favorite_houses
            where account_id = ?
            order by saved_at desc, provider_id
            "#,
        )
        .map_err(ServerError::db("prepare favorites query failed"))?;

    let rows = stmt
        .query_map(params![account_id], |r| {
            Ok(SavedFavorite {
                house: FavoriteHouse {
                    provider_id: r.get(0)?,
                    address: r.get(1)?,
                    city: r.get(2)?,
                    zipcode: r.get(3)?,
                    url: r.get(4)?,
                },
                saved_at: r.get(5)?,
            })
        })
        .map_err(ServerError::db("query favorites failed"))?;

    let mut favorites = Vec::new();
    for row in rows {
        favorites.push(row.map_err(ServerError::db("read favorite row failed"))?);
    }
    Ok(favorites)
}
