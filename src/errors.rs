// src/errors.rs
use std::fmt;

/// Errors surfaced by route handlers and the favorites store.
///
/// Provider failures never show up here: the details branches log and
/// swallow them (see `details::assemble`).
#[derive(Debug)]
pub enum ServerError {
    NotFound(String),
    BadRequest(String),
    DbError(String),
    InternalError,
}

impl ServerError {
    /// HTTP status used when the error is rendered as a page.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }

    /// Wraps a rusqlite error with the operation that failed.
    pub fn db(context: &str) -> impl FnOnce(rusqlite::Error) -> ServerError + '_ {
        move |e| ServerError::DbError(format!("{context}: {e}"))
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound(what) => write!(f, "Not Found: {what}"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
