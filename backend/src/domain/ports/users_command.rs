//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, overwriting and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user and return it with its assigned id.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Overwrite name and email of an existing user.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove a user that nothing references any more.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
