//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each operation checks out one pooled connection and issues one statement.
//! Updates and deletes rely on the row count the store reports, so a missing
//! id surfaces as `None`/`false` rather than an error.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

use super::diesel_error_mapping::StoreFailure;
use super::models::{UserFields, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl<'a> From<&'a UserDraft> for UserFields<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            email: draft.email.as_str(),
        }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let rows: Vec<UserRow> = users::table
            .order_by(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(StoreFailure::from)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(StoreFailure::from)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(UserFields::from(draft))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(StoreFailure::from)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let row: Option<UserRow> = diesel::update(users::table.find(id.get()))
            .set(UserFields::from(draft))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(StoreFailure::from)?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from)?;

        let affected = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(StoreFailure::from)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn user_row_converts_to_domain_user() {
        let row = UserRow {
            id: 3,
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
        };

        let user = User::from(row);
        assert_eq!(user.id(), UserId::new(3));
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.email(), "ann@example.com");
    }

    #[rstest]
    fn draft_borrows_into_user_fields() {
        let draft = UserDraft::new("Bob", "");
        let fields = UserFields::from(&draft);
        assert_eq!(fields.name, "Bob");
        assert_eq!(fields.email, "");
    }
}
