//! Startup schema bootstrap.
//!
//! Tables are mandatory: if they cannot be created the service must not
//! start. Foreign keys are best effort, since `ALTER TABLE ... ADD CONSTRAINT`
//! fails on every run after the first; those failures are logged and skipped.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::ports::{MannahForeignKey, SchemaPersistenceError, SchemaRepository};

/// Fatal schema failure.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The users or mannah table could not be created.
    #[error("failed to ensure tables: {0}")]
    Tables(#[source] SchemaPersistenceError),
}

/// What happened to a single foreign key during bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOutcome {
    /// The constraint was added by this run.
    Created,
    /// The constraint was present already.
    AlreadyPresent,
    /// Adding the constraint failed for another reason.
    Failed(SchemaPersistenceError),
}

/// Result of a successful bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub constraints: Vec<(MannahForeignKey, ConstraintOutcome)>,
}

/// Ensures tables and constraints exist.
#[derive(Clone)]
pub struct SchemaManager<R> {
    schema: Arc<R>,
}

impl<R> SchemaManager<R>
where
    R: SchemaRepository,
{
    /// Create a manager over the given repository.
    #[must_use]
    pub fn new(schema: Arc<R>) -> Self {
        Self { schema }
    }

    /// Create tables, then add each foreign key.
    ///
    /// # Errors
    /// Returns [`SchemaError::Tables`] when table creation fails; constraint
    /// failures are reported in the [`SchemaReport`] instead.
    pub async fn ensure_schema(&self) -> Result<SchemaReport, SchemaError> {
        self.schema
            .ensure_tables()
            .await
            .map_err(SchemaError::Tables)?;
        info!("users and mannah tables ensured");

        let mut constraints = Vec::with_capacity(MannahForeignKey::ALL.len());
        for key in MannahForeignKey::ALL {
            let outcome = match self.schema.add_foreign_key(key).await {
                Ok(()) => {
                    info!(constraint = %key, "foreign key added");
                    ConstraintOutcome::Created
                }
                Err(SchemaPersistenceError::AlreadyExists { .. }) => {
                    debug!(constraint = %key, "foreign key already present");
                    ConstraintOutcome::AlreadyPresent
                }
                Err(err) => {
                    warn!(constraint = %key, error = %err, "foreign key could not be added");
                    ConstraintOutcome::Failed(err)
                }
            };
            constraints.push((key, outcome));
        }

        Ok(SchemaReport { constraints })
    }
}
