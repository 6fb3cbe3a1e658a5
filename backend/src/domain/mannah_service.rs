//! Mannah domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::error;

use crate::domain::ports::{MannahCommand, MannahPersistenceError, MannahQuery, MannahRepository};
use crate::domain::{Error, Mannah, MannahDraft, UserId};

/// Mannah service implementing [`MannahQuery`] and [`MannahCommand`].
#[derive(Clone)]
pub struct MannahService<R> {
    mannah: Arc<R>,
}

impl<R> MannahService<R> {
    /// Create a new service over the given repository.
    #[must_use]
    pub fn new(mannah: Arc<R>) -> Self {
        Self { mannah }
    }
}

impl<R> MannahService<R>
where
    R: MannahRepository,
{
    fn map_persistence_error(err: MannahPersistenceError, draft: Option<&MannahDraft>) -> Error {
        match err {
            MannahPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("mannah repository unavailable: {message}"))
            }
            MannahPersistenceError::ForeignKeyViolation { message } => {
                let details = match draft {
                    Some(draft) => json!({
                        "fromUser": draft.from_user.get(),
                        "toUser": draft.to_user.get(),
                        "code": "unknown_user",
                    }),
                    None => json!({ "reason": message }),
                };
                Error::conflict("mannah references a user that does not exist")
                    .with_details(details)
            }
            MannahPersistenceError::Query { message } => {
                error!(error = %message, "mannah repository query failed");
                Error::internal(format!("mannah repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> MannahQuery for MannahService<R>
where
    R: MannahRepository,
{
    async fn list_for_recipient(&self, recipient: UserId) -> Result<Vec<Mannah>, Error> {
        self.mannah
            .list_for_recipient(recipient)
            .await
            .map_err(|err| Self::map_persistence_error(err, None))
    }
}

#[async_trait]
impl<R> MannahCommand for MannahService<R>
where
    R: MannahRepository,
{
    async fn send_mannah(&self, draft: MannahDraft) -> Result<Mannah, Error> {
        self.mannah
            .insert(&draft)
            .await
            .map_err(|err| Self::map_persistence_error(err, Some(&draft)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, MannahId};
    use crate::domain::ports::MockMannahRepository;

    fn draft(from: i32, to: i32) -> MannahDraft {
        MannahDraft {
            description: "thanks".to_owned(),
            from_user: UserId::new(from),
            to_user: UserId::new(to),
        }
    }

    #[tokio::test]
    async fn send_mannah_returns_stored_row() {
        let mut repo = MockMannahRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|draft| Ok(Mannah::from_draft(MannahId::new(1), draft.clone())));

        let stored = MannahService::new(Arc::new(repo))
            .send_mannah(draft(1, 2))
            .await
            .expect("send succeeds");
        assert_eq!(stored.id(), MannahId::new(1));
        assert_eq!(stored.to_user(), UserId::new(2));
    }

    #[tokio::test]
    async fn send_mannah_maps_missing_user_to_conflict() {
        let mut repo = MockMannahRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(MannahPersistenceError::foreign_key_violation("fk_from")));

        let err = MannahService::new(Arc::new(repo))
            .send_mannah(draft(40, 2))
            .await
            .expect_err("unknown sender");
        assert_eq!(err.code(), ErrorCode::Conflict);
        let details = err.details().expect("details attached");
        assert_eq!(details["fromUser"], 40);
        assert_eq!(details["code"], "unknown_user");
    }

    #[tokio::test]
    async fn list_for_recipient_passes_empty_results_through() {
        let mut repo = MockMannahRepository::new();
        repo.expect_list_for_recipient()
            .withf(|recipient| *recipient == UserId::new(1))
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let listed = MannahService::new(Arc::new(repo))
            .list_for_recipient(UserId::new(1))
            .await
            .expect("list succeeds");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn list_for_recipient_maps_connection_failures() {
        let mut repo = MockMannahRepository::new();
        repo.expect_list_for_recipient()
            .times(1)
            .return_once(|_| Err(MannahPersistenceError::connection("refused")));

        let err = MannahService::new(Arc::new(repo))
            .list_for_recipient(UserId::new(1))
            .await
            .expect_err("store down");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
