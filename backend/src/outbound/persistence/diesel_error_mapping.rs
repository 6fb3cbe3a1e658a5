//! Classification of pool and Diesel failures shared by the repositories.
//!
//! Every adapter needs the same three-way split: the store is unreachable,
//! the store rejected a write through a foreign key, or anything else went
//! wrong. [`StoreFailure`] carries that split until each adapter converts it
//! into its own port error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{MannahPersistenceError, SchemaPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Adapter-neutral failure classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreFailure {
    /// Pool checkout failed or the connection dropped mid-query.
    Connection(String),
    /// A write was refused by a foreign-key constraint.
    ForeignKeyViolation(String),
    /// Any other database or query-builder error.
    Query(String),
}

impl From<PoolError> for StoreFailure {
    fn from(error: PoolError) -> Self {
        Self::Connection(error.into_message())
    }
}

impl From<DieselError> for StoreFailure {
    fn from(error: DieselError) -> Self {
        match &error {
            DieselError::DatabaseError(kind, info) => {
                debug!(?kind, message = info.message(), "diesel operation failed");
            }
            _ => debug!(error = %error, "diesel operation failed"),
        }

        match error {
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                Self::Connection(info.message().to_owned())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                let constraint = info
                    .constraint_name()
                    .map_or_else(|| info.message().to_owned(), str::to_owned);
                Self::ForeignKeyViolation(constraint)
            }
            DieselError::DatabaseError(_, info) => Self::Query(info.message().to_owned()),
            DieselError::QueryBuilderError(err) => Self::Query(err.to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}

impl From<StoreFailure> for UserPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::ForeignKeyViolation(message) => Self::foreign_key_violation(message),
            StoreFailure::Query(message) => Self::query(message),
        }
    }
}

impl From<StoreFailure> for MannahPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::ForeignKeyViolation(message) => Self::foreign_key_violation(message),
            StoreFailure::Query(message) => Self::query(message),
        }
    }
}

impl From<StoreFailure> for SchemaPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::ForeignKeyViolation(message) | StoreFailure::Query(message) => {
                Self::query(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;
    use rstest::rstest;

    #[derive(Debug)]
    struct StubInfo {
        message: &'static str,
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            self.message
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(
        kind: DatabaseErrorKind,
        message: &'static str,
        constraint: Option<&'static str>,
    ) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo { message, constraint }))
    }

    #[rstest]
    fn pool_errors_are_connection_failures() {
        let failure = StoreFailure::from(PoolError::checkout("timed out"));
        assert_eq!(failure, StoreFailure::Connection("timed out".to_owned()));
    }

    #[rstest]
    fn foreign_key_violation_prefers_constraint_name() {
        let failure = StoreFailure::from(database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "update or delete on table \"users\" violates foreign key constraint",
            Some("fk_to"),
        ));
        assert_eq!(failure, StoreFailure::ForeignKeyViolation("fk_to".to_owned()));
    }

    #[rstest]
    #[case(DatabaseErrorKind::Unknown, "la contrainte « fk_from » existe déjà")]
    #[case(DatabaseErrorKind::Unknown, "constraint \"fk_from\" already exists")]
    #[case(DatabaseErrorKind::ForeignKeyViolation, "orphaned rows")]
    fn schema_failures_are_classified_without_message_text(
        #[case] kind: DatabaseErrorKind,
        #[case] message: &'static str,
    ) {
        let failure = StoreFailure::from(database_error(kind, message, None));
        let schema = SchemaPersistenceError::from(failure);
        assert!(matches!(schema, SchemaPersistenceError::Query { .. }));
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::ClosedConnection, "server closed", None), true)]
    #[case(database_error(DatabaseErrorKind::Unknown, "syntax error", None), false)]
    #[case(DieselError::NotFound, false)]
    fn user_errors_split_connection_from_query(
        #[case] error: DieselError,
        #[case] is_connection: bool,
    ) {
        let mapped = UserPersistenceError::from(StoreFailure::from(error));
        assert_eq!(
            matches!(mapped, UserPersistenceError::Connection { .. }),
            is_connection
        );
    }

    #[rstest]
    fn foreign_key_violation_reaches_mannah_port() {
        let mapped = MannahPersistenceError::from(StoreFailure::from(database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert violates foreign key",
            Some("fk_from"),
        )));
        assert!(matches!(
            mapped,
            MannahPersistenceError::ForeignKeyViolation { .. }
        ));
    }

    fn user_statement(result: Result<(), DieselError>) -> Result<(), UserPersistenceError> {
        result.map_err(StoreFailure::from)?;
        Ok(())
    }

    fn schema_checkout(result: Result<(), PoolError>) -> Result<(), SchemaPersistenceError> {
        result.map_err(StoreFailure::from)?;
        Ok(())
    }

    #[rstest]
    fn question_mark_converts_into_port_errors() {
        let user = user_statement(Err(database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "violates foreign key",
            Some("fk_to"),
        )));
        assert!(matches!(
            user,
            Err(UserPersistenceError::ForeignKeyViolation { .. })
        ));

        let schema = schema_checkout(Err(PoolError::checkout("refused")));
        assert!(matches!(
            schema,
            Err(SchemaPersistenceError::Connection { .. })
        ));
    }
}
