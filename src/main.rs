use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::providers::Providers;
use crate::router::{handle, AppState};
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod details;
mod domain;
mod errors;
mod providers;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let db = Database::new(cfg.database_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let providers = match Providers::from_config(&cfg) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("provider setup failed: {e}");
            std::process::exit(1);
        }
    };

    for (name, missing) in [
        ("RAPIDAPI_KEY", cfg.realtor.api_key.is_none()),
        ("GREATSCHOOLS_API_KEY", cfg.schools.api_key.is_none()),
        ("SOCRATA_CRIMES_URL", cfg.crime.dataset_url.is_none()),
    ] {
        if missing {
            tracing::warn!("{name} not set; that section of the details page will stay empty");
        }
    }

    let state = AppState {
        db,
        providers,
        crime_year: cfg.crime.year,
    };

    tracing::info!("starting server at http://{}", cfg.bind_addr);

    let server = Server::bind(&cfg.bind_addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
