//! Port abstraction for mannah persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Mannah, MannahDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by mannah repository adapters.
    pub enum MannahPersistenceError {
        /// Repository connection could not be established.
        Connection { message } => "mannah repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message } => "mannah repository query failed: {message}",
        /// The sender or recipient does not exist.
        ForeignKeyViolation { message } =>
            "mannah references a missing user: {message}",
    }
}

/// Port for reading and writing mannah rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MannahRepository: Send + Sync {
    /// Every mannah addressed to `recipient`, in id order.
    async fn list_for_recipient(
        &self,
        recipient: UserId,
    ) -> Result<Vec<Mannah>, MannahPersistenceError>;

    /// Insert a mannah and return it with its store-assigned id.
    async fn insert(&self, draft: &MannahDraft) -> Result<Mannah, MannahPersistenceError>;
}
