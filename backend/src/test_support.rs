//! In-memory repository used by HTTP contract tests.
//!
//! Mirrors the PostgreSQL behaviour the services rely on: serial ids that
//! never repeat, rows listed in id order, and `fk_from`/`fk_to` enforcement
//! on both insert and delete. Failures can be injected to exercise the
//! unavailable-store paths.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    MannahForeignKey, MannahPersistenceError, MannahRepository, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Mannah, MannahDraft, MannahId, User, UserDraft, UserId};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    mannah: BTreeMap<i32, Mannah>,
    user_seq: i32,
    mannah_seq: i32,
    unavailable: bool,
}

/// Shared in-memory users and mannah tables.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

const UNAVAILABLE: &str = "store marked unavailable";

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Number of stored mannah rows.
    #[must_use]
    pub fn mannah_count(&self) -> usize {
        self.lock().mannah.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let tables = self.lock();
        if tables.unavailable {
            return Err(UserPersistenceError::connection(UNAVAILABLE));
        }
        Ok(tables.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.lock();
        if tables.unavailable {
            return Err(UserPersistenceError::connection(UNAVAILABLE));
        }
        Ok(tables.users.get(&id.get()).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut tables = self.lock();
        if tables.unavailable {
            return Err(UserPersistenceError::connection(UNAVAILABLE));
        }
        tables.user_seq += 1;
        let id = tables.user_seq;
        let user = User::from_draft(UserId::new(id), draft.clone());
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut tables = self.lock();
        if tables.unavailable {
            return Err(UserPersistenceError::connection(UNAVAILABLE));
        }
        Ok(tables.users.get_mut(&id.get()).map(|row| {
            *row = User::from_draft(id, draft.clone());
            row.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut tables = self.lock();
        if tables.unavailable {
            return Err(UserPersistenceError::connection(UNAVAILABLE));
        }
        if let Some(note) = tables
            .mannah
            .values()
            .find(|note| note.from_user() == id || note.to_user() == id)
        {
            let key = if note.to_user() == id {
                MannahForeignKey::ToUser
            } else {
                MannahForeignKey::FromUser
            };
            return Err(UserPersistenceError::foreign_key_violation(
                key.constraint_name(),
            ));
        }
        Ok(tables.users.remove(&id.get()).is_some())
    }
}

#[async_trait]
impl MannahRepository for InMemoryStore {
    async fn list_for_recipient(
        &self,
        recipient: UserId,
    ) -> Result<Vec<Mannah>, MannahPersistenceError> {
        let tables = self.lock();
        if tables.unavailable {
            return Err(MannahPersistenceError::connection(UNAVAILABLE));
        }
        Ok(tables
            .mannah
            .values()
            .filter(|note| note.to_user() == recipient)
            .cloned()
            .collect())
    }

    async fn insert(&self, draft: &MannahDraft) -> Result<Mannah, MannahPersistenceError> {
        let mut tables = self.lock();
        if tables.unavailable {
            return Err(MannahPersistenceError::connection(UNAVAILABLE));
        }
        for (key, user) in [
            (MannahForeignKey::FromUser, draft.from_user),
            (MannahForeignKey::ToUser, draft.to_user),
        ] {
            if !tables.users.contains_key(&user.get()) {
                return Err(MannahPersistenceError::foreign_key_violation(
                    key.constraint_name(),
                ));
            }
        }
        tables.mannah_seq += 1;
        let id = tables.mannah_seq;
        let note = Mannah::from_draft(MannahId::new(id), draft.clone());
        tables.mannah.insert(id, note.clone());
        Ok(note)
    }
}
