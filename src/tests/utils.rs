use crate::db::{init_db, Database};
use crate::router::AppState;
use crate::tests::fakes::{fake_providers, FakeCrimes, FakeListings, FakeSchools};
use astra::Response;
use std::io::Read;
use std::sync::Arc;
use tempfile::TempDir;

/// Fresh database file per call, using the production schema. The file is
/// removed when the returned directory is dropped.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("safehome.sqlite");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

pub struct TestApp {
    pub state: AppState,
    pub db_dir: TempDir,
    pub listings: Arc<FakeListings>,
    pub schools: Arc<FakeSchools>,
    pub crimes: Arc<FakeCrimes>,
}

pub fn test_app(
    listings: FakeListings,
    schools: FakeSchools,
    crimes: FakeCrimes,
) -> TestApp {
    let listings = Arc::new(listings);
    let schools = Arc::new(schools);
    let crimes = Arc::new(crimes);
    let (db_dir, db) = init_test_db();

    TestApp {
        db_dir,
        state: AppState {
            db,
            providers: fake_providers(&listings, &schools, &crimes),
            crime_year: 2020,
        },
        listings,
        schools,
        crimes,
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
