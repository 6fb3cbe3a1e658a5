//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod mannah_command;
mod mannah_query;
mod mannah_repository;
mod schema_repository;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use mannah_command::MockMannahCommand;
pub use mannah_command::MannahCommand;
#[cfg(test)]
pub use mannah_query::MockMannahQuery;
pub use mannah_query::MannahQuery;
#[cfg(test)]
pub use mannah_repository::MockMannahRepository;
pub use mannah_repository::{MannahPersistenceError, MannahRepository};
#[cfg(test)]
pub use schema_repository::MockSchemaRepository;
pub use schema_repository::{MannahForeignKey, SchemaPersistenceError, SchemaRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
