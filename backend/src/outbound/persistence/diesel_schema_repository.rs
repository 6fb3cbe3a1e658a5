//! PostgreSQL DDL adapter backing the `SchemaRepository` port.
//!
//! Table creation is idempotent through `IF NOT EXISTS`. Foreign keys are
//! looked up in `pg_constraint` first so a rerun reports `AlreadyExists`,
//! and the `ALTER TABLE` itself is guarded by the same lookup.

use async_trait::async_trait;
use diesel::QueryableByName;
use diesel::sql_query;
use diesel::sql_types::{Bool, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MannahForeignKey, SchemaPersistenceError, SchemaRepository};

use super::diesel_error_mapping::StoreFailure;
use super::pool::DbPool;

const CREATE_USERS_SQL: &str = "CREATE TABLE IF NOT EXISTS users (\
    id SERIAL PRIMARY KEY, \
    name TEXT NOT NULL, \
    email TEXT NOT NULL)";

const CREATE_MANNAH_SQL: &str = "CREATE TABLE IF NOT EXISTS mannah (\
    id SERIAL PRIMARY KEY, \
    description TEXT NOT NULL, \
    from_user INT NOT NULL, \
    to_user INT NOT NULL)";

const CONSTRAINT_PRESENT_SQL: &str = "SELECT EXISTS (\
    SELECT 1 FROM pg_constraint \
    WHERE conname = $1 AND conrelid = 'mannah'::regclass) AS present";

#[derive(QueryableByName)]
struct ConstraintPresent {
    #[diesel(sql_type = Bool)]
    present: bool,
}

/// Build the guarded `ALTER TABLE` block for one foreign key.
///
/// Identifiers come from the closed [`MannahForeignKey`] set, never from
/// request data.
pub(crate) fn add_foreign_key_sql(key: MannahForeignKey) -> String {
    let name = key.constraint_name();
    format!(
        "DO $$ BEGIN \
         IF NOT EXISTS (SELECT 1 FROM pg_constraint \
         WHERE conname = '{name}' AND conrelid = 'mannah'::regclass) THEN \
         ALTER TABLE mannah ADD CONSTRAINT {name} FOREIGN KEY ({column}) REFERENCES users(id); \
         END IF; END $$",
        column = key.column()
    )
}

/// Diesel-backed implementation of the [`SchemaRepository`] port.
#[derive(Clone)]
pub struct DieselSchemaRepository {
    pool: DbPool,
}

impl DieselSchemaRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaRepository for DieselSchemaRepository {
    async fn ensure_tables(&self) -> Result<(), SchemaPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        for statement in [CREATE_USERS_SQL, CREATE_MANNAH_SQL] {
            sql_query(statement)
                .execute(&mut conn)
                .await
                .map_err(StoreFailure::from)?;
        }
        Ok(())
    }

    async fn add_foreign_key(&self, key: MannahForeignKey) -> Result<(), SchemaPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let ConstraintPresent { present } = sql_query(CONSTRAINT_PRESENT_SQL)
            .bind::<Text, _>(key.constraint_name())
            .get_result(&mut conn)
            .await
            .map_err(StoreFailure::from)?;
        if present {
            return Err(SchemaPersistenceError::already_exists(key.constraint_name()));
        }

        sql_query(add_foreign_key_sql(key))
            .execute(&mut conn)
            .await
            .map_err(StoreFailure::from)?;
        Ok(())
    }
}
