//! Mannah: a directed note one user sends another.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Store-assigned mannah identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MannahId(i32);

impl MannahId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MannahId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values supplied when sending a mannah.
///
/// Both user references are checked by the store's foreign keys on insert,
/// never ahead of time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MannahDraft {
    pub description: String,
    pub from_user: UserId,
    pub to_user: UserId,
}

/// Stored mannah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mannah {
    #[schema(value_type = i32, example = 1)]
    id: MannahId,
    #[schema(example = "thanks")]
    description: String,
    #[schema(value_type = i32, example = 1)]
    from_user: UserId,
    #[schema(value_type = i32, example = 2)]
    to_user: UserId,
}

impl Mannah {
    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: MannahId, draft: MannahDraft) -> Self {
        let MannahDraft {
            description,
            from_user,
            to_user,
        } = draft;
        Self {
            id,
            description,
            from_user,
            to_user,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> MannahId {
        self.id
    }

    /// Free-form note content.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Sender.
    #[must_use]
    pub fn from_user(&self) -> UserId {
        self.from_user
    }

    /// Recipient.
    #[must_use]
    pub fn to_user(&self) -> UserId {
        self.to_user
    }
}
