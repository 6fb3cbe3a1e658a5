//! Driving port for mannah reads.

use async_trait::async_trait;

use crate::domain::{Error, Mannah, UserId};

/// Domain use-case port for reading a recipient's mannah.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MannahQuery: Send + Sync {
    /// Every mannah whose recipient is `recipient`; empty when there are none.
    async fn list_for_recipient(&self, recipient: UserId) -> Result<Vec<Mannah>, Error>;
}
