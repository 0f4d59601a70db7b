use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

use crate::errors::ServerError;

// Thread-local connections, one per database path. Each astra worker
// thread opens its own on first use.
thread_local! {
    static DB_CONNS: RefCell<HashMap<String, Connection>> = RefCell::new(HashMap::new());
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONNS
            .try_with(|cell| {
                let mut conns = cell.borrow_mut();
                let conn = match conns.entry(self.path.clone()) {
                    std::collections::hash_map::Entry::Occupied(slot) => slot.into_mut(),
                    std::collections::hash_map::Entry::Vacant(slot) => {
                        let conn = Connection::open(&self.path)
                            .map_err(ServerError::db("open database failed"))?;
                        conn.execute_batch("PRAGMA foreign_keys = ON;")
                            .map_err(ServerError::db("enable foreign keys failed"))?;
                        slot.insert(conn)
                    }
                };
                f(conn)
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(ServerError::db("failed to apply schema"))
    })?;

    tracing::info!(path = db.path(), schema = schema_path, "database initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn temp_db() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conn.sqlite");
        (dir, Database::new(path.to_string_lossy().into_owned()))
    }

    #[test]
    fn init_db_applies_schema() {
        let (_dir, db) = temp_db();
        init_db(&db, "sql/schema.sql").unwrap();

        let tables: i64 = db
            .with_conn(|conn| {
                conn.query_row(
                    "select count(*) from sqlite_master where type = 'table'
                     and name in ('accounts', 'favorite_houses')",
                    [],
                    |r| r.get(0),
                )
                .map_err(ServerError::db("count tables failed"))
            })
            .unwrap();

        assert_eq!(tables, 2);
    }

    #[test]
    fn database_file_is_removed_with_its_directory() {
        let (dir, db) = temp_db();
        init_db(&db, "sql/schema.sql").unwrap();
        let path = std::path::PathBuf::from(db.path());
        assert!(path.exists());

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn missing_schema_file_is_reported() {
        let (_dir, db) = temp_db();
        let err = init_db(&db, "sql/does_not_exist.sql").unwrap_err();
        assert!(matches!(err, ServerError::DbError(_)));
    }
}
