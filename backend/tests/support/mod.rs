//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module holds the app and database setup they share.

#![allow(dead_code, reason = "each test crate uses a subset of the helpers")]

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use mannah::inbound::http::health::HealthState;
use mannah::server::{AppDependencies, build_http_state};
use mannah::test_support::InMemoryStore;

/// Environment variable naming the PostgreSQL database used by the Diesel suite.
pub const TEST_DATABASE_URL_ENV: &str = "MANNAH_TEST_DATABASE_URL";

/// App dependencies over a shared in-memory store.
pub fn in_memory_deps(store: Arc<InMemoryStore>) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: build_http_state(store.clone(), store),
        request_timeout: Duration::from_secs(5),
    }
}

/// Returns the test database URL, or prints a skip marker when unset.
pub fn test_database_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_ENV} is not set");
            None
        }
    }
}
