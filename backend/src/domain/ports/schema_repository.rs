//! Port for the DDL the service runs at startup.

use std::fmt;

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while ensuring the schema.
    pub enum SchemaPersistenceError {
        /// The store could not be reached.
        Connection { message } => "schema connection failed: {message}",
        /// A DDL statement failed.
        Query { message } => "schema statement failed: {message}",
        /// The object being created is already present.
        AlreadyExists { name } => "{name} already exists",
    }
}

/// Foreign keys the mannah table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MannahForeignKey {
    /// `mannah.from_user` references `users.id`.
    FromUser,
    /// `mannah.to_user` references `users.id`.
    ToUser,
}

impl MannahForeignKey {
    /// Both constraints, in creation order.
    pub const ALL: [Self; 2] = [Self::FromUser, Self::ToUser];

    /// Constraint name in the store.
    #[must_use]
    pub fn constraint_name(self) -> &'static str {
        match self {
            Self::FromUser => "fk_from",
            Self::ToUser => "fk_to",
        }
    }

    /// Referencing column on the mannah table.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::FromUser => "from_user",
            Self::ToUser => "to_user",
        }
    }
}

impl fmt::Display for MannahForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constraint_name())
    }
}

/// Port for creating tables and constraints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaRepository: Send + Sync {
    /// Create the users and mannah tables when absent.
    async fn ensure_tables(&self) -> Result<(), SchemaPersistenceError>;

    /// Add one foreign key to the mannah table.
    async fn add_foreign_key(&self, key: MannahForeignKey) -> Result<(), SchemaPersistenceError>;
}
