//! Driving port for sending mannah.

use async_trait::async_trait;

use crate::domain::{Error, Mannah, MannahDraft};

/// Domain use-case port for creating mannah.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MannahCommand: Send + Sync {
    /// Store a mannah; a missing sender or recipient is a conflict.
    async fn send_mannah(&self, draft: MannahDraft) -> Result<Mannah, Error>;
}
