//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the user, mannah and schema repository ports,
//! backed by `diesel-async` over a shared `bb8` pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: pool and Diesel failures are classified once in
//!   `diesel_error_mapping.rs` and converted into each port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use mannah::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/mannah")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_mannah_repository;
mod diesel_schema_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_mannah_repository::DieselMannahRepository;
pub use diesel_schema_repository::DieselSchemaRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
