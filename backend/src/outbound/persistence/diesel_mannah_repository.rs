//! PostgreSQL-backed `MannahRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MannahPersistenceError, MannahRepository};
use crate::domain::{Mannah, MannahDraft, UserId};

use super::diesel_error_mapping::StoreFailure;
use super::models::{MannahRow, NewMannahRow};
use super::pool::DbPool;
use super::schema::mannah;

/// Diesel-backed implementation of the [`MannahRepository`] port.
///
/// Sender and recipient existence is left to the `fk_from`/`fk_to`
/// constraints; a rejected insert comes back as
/// [`MannahPersistenceError::ForeignKeyViolation`].
#[derive(Clone)]
pub struct DieselMannahRepository {
    pool: DbPool,
}

impl DieselMannahRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MannahRepository for DieselMannahRepository {
    async fn list_for_recipient(
        &self,
        recipient: UserId,
    ) -> Result<Vec<Mannah>, MannahPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let rows: Vec<MannahRow> = mannah::table
            .filter(mannah::to_user.eq(recipient.get()))
            .order_by(mannah::id.asc())
            .select(MannahRow::as_select())
            .load(&mut conn)
            .await
            .map_err(StoreFailure::from)?;

        Ok(rows.into_iter().map(Mannah::from).collect())
    }

    async fn insert(&self, draft: &MannahDraft) -> Result<Mannah, MannahPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let row: MannahRow = diesel::insert_into(mannah::table)
            .values(NewMannahRow::from(draft))
            .returning(MannahRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(StoreFailure::from)?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MannahId;
    use rstest::rstest;

    #[rstest]
    fn mannah_row_converts_to_domain_mannah() {
        let row = MannahRow {
            id: 7,
            description: "thanks for lunch".to_owned(),
            from_user: 1,
            to_user: 2,
        };

        let note = Mannah::from(row);
        assert_eq!(note.id(), MannahId::new(7));
        assert_eq!(note.description(), "thanks for lunch");
        assert_eq!(note.from_user(), UserId::new(1));
        assert_eq!(note.to_user(), UserId::new(2));
    }

    #[rstest]
    fn new_row_copies_draft_ids() {
        let draft = MannahDraft {
            description: "hi".to_owned(),
            from_user: UserId::new(5),
            to_user: UserId::new(5),
        };
        let row = NewMannahRow::from(&draft);
        assert_eq!((row.from_user, row.to_user), (5, 5));
        assert_eq!(row.description, "hi");
    }
}
