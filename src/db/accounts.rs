// src/db/accounts.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub created_at: i64,
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Insert an account if none exists for the email, then return it.
pub fn get_or_create_account(
    conn: &Connection,
    email: &str,
    now: i64,
) -> Result<Account, ServerError> {
    let email = normalize_email(email)?;

    conn.execute(
        "insert or ignore into accounts (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(ServerError::db("insert account failed"))?;

    find_account_by_email(conn, &email)?
        .ok_or_else(|| ServerError::DbError(format!("account for {email} vanished after insert")))
}

/// Emails are unique, so this is at most one row.
pub fn find_account_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<Account>, ServerError> {
    let email = normalize_email(email)?;

    conn.query_row(
        "select id, email, created_at from accounts where email = ?",
        params![email],
        |r| {
            Ok(Account {
                id: r.get(0)?,
                email: r.get(1)?,
                created_at: r.get(2)?,
            })
        },
    )
    .optional()
    .map_err(ServerError::db("select account failed"))
}

/// Like `find_account_by_email`, but a missing account is an error.
pub fn require_account(conn: &Connection, email: &str) -> Result<Account, ServerError> {
    find_account_by_email(conn, email)?
        .ok_or_else(|| ServerError::NotFound(format!("no account for {}", email.trim())))
}
