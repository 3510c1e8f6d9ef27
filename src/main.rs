use std::net::SocketAddr;
use std::sync::Arc;

use astra::Server;
use tracing::{error, info};

use crate::auth::google::{GoogleVerifier, IdentityProvider};
use crate::config::SiteConfig;
use crate::db::connection::init_db;
use crate::db::Database;
use crate::responses::error_to_response;
use crate::router::{handle, App};

mod auth;
mod backend;
mod config;
mod db;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "realtor_site=info".into()),
        )
        .init();

    let config = SiteConfig::load();

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let identity: Arc<dyn IdentityProvider + Send + Sync> =
        match GoogleVerifier::new(config.google_client_id.clone()) {
            Ok(v) => Arc::new(v),
            Err(e) => {
                error!("identity provider init failed: {e}");
                std::process::exit(1);
            }
        };

    let app = match App::new(db, config.clone(), identity) {
        Ok(app) => app,
        Err(e) => {
            error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid bind address {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };
    info!("serving on http://{addr}");

    let server = Server::bind(&addr).max_workers(8);
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }
}
