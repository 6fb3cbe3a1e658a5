//! User domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`]. Each
//! operation issues exactly one repository call; the store decides conflicts
//! and this layer only translates its verdicts into [`Error`] codes.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    users: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    #[must_use]
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found")).with_details(json!({
        "userId": id.get(),
        "code": "user_not_found",
    }))
}

fn map_persistence_error(err: UserPersistenceError, id: Option<UserId>) -> Error {
    match err {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::ForeignKeyViolation { message } => {
            let error = Error::conflict("user is still referenced by mannah");
            match id {
                Some(id) => error.with_details(json!({
                    "userId": id.get(),
                    "code": "user_referenced",
                })),
                None => error.with_details(json!({ "reason": message })),
            }
        }
        UserPersistenceError::Query { message } => {
            error!(
                error = %message,
                user_id = ?id.map(UserId::get),
                "user repository query failed"
            );
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list()
            .await
            .map_err(|err| map_persistence_error(err, None))
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| map_persistence_error(err, Some(id)))?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        self.users
            .insert(&draft)
            .await
            .map_err(|err| map_persistence_error(err, None))
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        self.users
            .update(id, &draft)
            .await
            .map_err(|err| map_persistence_error(err, Some(id)))?
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self
            .users
            .delete(id)
            .await
            .map_err(|err| map_persistence_error(err, Some(id)))?;
        if removed {
            Ok(())
        } else {
            Err(user_not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Behaviour of the user service against a mocked repository.

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    fn service(repo: MockUserRepository) -> UserService<MockUserRepository> {
        UserService::new(Arc::new(repo))
    }

    fn ann() -> User {
        User::new(UserId::new(1), "Ann", "ann@example.com")
    }

    #[tokio::test]
    async fn list_users_returns_empty_list_for_empty_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).return_once(|| Ok(Vec::new()));

        let users = service(repo).list_users().await.expect("list succeeds");
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn get_user_maps_missing_row_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == UserId::new(9))
            .times(1)
            .return_once(|_| Ok(None));

        let err = service(repo)
            .get_user(UserId::new(9))
            .await
            .expect_err("missing user");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "user 9 not found");
    }

    #[tokio::test]
    async fn create_user_returns_stored_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|draft| draft.name == "Ann" && draft.email == "ann@example.com")
            .times(1)
            .return_once(|draft| Ok(User::from_draft(UserId::new(1), draft.clone())));

        let user = service(repo)
            .create_user(UserDraft::new("Ann", "ann@example.com"))
            .await
            .expect("create succeeds");
        assert_eq!(user, ann());
    }

    #[tokio::test]
    async fn update_user_reports_not_found_for_zero_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().times(1).return_once(|_, _| Ok(None));

        let err = service(repo)
            .update_user(UserId::new(4), UserDraft::new("Ann", "ann@example.com"))
            .await
            .expect_err("no row to update");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_user_reports_not_found_when_nothing_removed() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(false));

        let err = service(repo)
            .delete_user(UserId::new(4))
            .await
            .expect_err("no row to delete");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_user_maps_foreign_key_rejection_to_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::foreign_key_violation("fk_to")));

        let err = service(repo)
            .delete_user(UserId::new(1))
            .await
            .expect_err("referenced user");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(
            err.details().and_then(|d| d.get("code")).and_then(|c| c.as_str()),
            Some("user_referenced")
        );
    }

    #[rstest]
    #[case(UserPersistenceError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("syntax error"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_failures_map_to_error_codes(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).return_once(move || Err(failure));

        let err = service(repo).list_users().await.expect_err("failure");
        assert_eq!(err.code(), expected);
    }
}
