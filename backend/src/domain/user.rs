//! User data model.
//!
//! Users are identified by a store-assigned serial integer. Names and emails
//! are free-form text; nothing here validates or deduplicates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
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

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Name and email supplied when creating or overwriting a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    /// Build a draft from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Stored user.
///
/// # Examples
/// ```
/// use mannah::domain::{User, UserDraft, UserId};
///
/// let user = User::from_draft(UserId::new(1), UserDraft::new("Ann", "ann@example.com"));
/// assert_eq!(user.name(), "Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = i32, example = 1)]
    id: UserId,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "ann@example.com")]
    email: String,
}

impl User {
    /// Build a user from stored values.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Free-form name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-form email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_serialises_flat_json() {
        let user = User::new(UserId::new(3), "Bo", "bo@x.io");
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(value, json!({ "id": 3, "name": "Bo", "email": "bo@x.io" }));
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("-4", Some(-4))]
    #[case("abc", None)]
    #[case("", None)]
    fn user_id_parses_integers_only(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(raw.parse::<UserId>().ok().map(UserId::get), expected);
    }
}
