//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values.

use diesel::prelude::*;

use crate::domain::{Mannah, MannahDraft, MannahId, User, UserId};

use super::schema::{mannah, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.name, row.email)
    }
}

/// Insertable and changeset struct for user name and email.
///
/// Updates overwrite both columns, so one struct serves both purposes.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Row struct for reading from the mannah table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = mannah)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MannahRow {
    pub id: i32,
    pub description: String,
    pub from_user: i32,
    pub to_user: i32,
}

impl From<MannahRow> for Mannah {
    fn from(row: MannahRow) -> Self {
        Mannah::from_draft(
            MannahId::new(row.id),
            MannahDraft {
                description: row.description,
                from_user: UserId::new(row.from_user),
                to_user: UserId::new(row.to_user),
            },
        )
    }
}

/// Insertable struct for new mannah rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = mannah)]
pub(crate) struct NewMannahRow<'a> {
    pub description: &'a str,
    pub from_user: i32,
    pub to_user: i32,
}

impl<'a> From<&'a MannahDraft> for NewMannahRow<'a> {
    fn from(draft: &'a MannahDraft) -> Self {
        Self {
            description: draft.description.as_str(),
            from_user: draft.from_user.get(),
            to_user: draft.to_user.get(),
        }
    }
}
