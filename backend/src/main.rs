//! Service entry-point: loads settings, prepares the schema and serves HTTP.

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mannah::domain::{ConstraintOutcome, SchemaManager};
use mannah::inbound::http::health::HealthState;
use mannah::outbound::persistence::{DbPool, DieselSchemaRepository};
use mannah::server::{ServerConfig, create_server};
use mannah::settings::AppSettings;

fn fatal(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!(error = %err, "{context}");
    io::Error::other(format!("{context}: {err}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| fatal("failed to load configuration", err))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| fatal("invalid bind address", err))?;
    let request_timeout = settings
        .request_timeout()
        .map_err(|err| fatal("invalid request timeout", err))?;
    let pool_config = settings
        .pool_config()
        .map_err(|err| fatal("invalid database configuration", err))?;

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| fatal("database unavailable", err))?;

    let report = SchemaManager::new(Arc::new(DieselSchemaRepository::new(pool.clone())))
        .ensure_schema()
        .await
        .map_err(|err| fatal("schema bootstrap failed", err))?;
    for (key, outcome) in &report.constraints {
        if matches!(outcome, ConstraintOutcome::Failed(_)) {
            warn!(constraint = %key, "serving without foreign key");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool).with_request_timeout(request_timeout);
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, timeout = ?request_timeout, "server listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
