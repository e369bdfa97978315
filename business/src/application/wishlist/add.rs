use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::MutationOutcome;
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<MutationOutcome, WishlistError> {
        let id = params.item.id.clone();
        self.logger
            .info(&format!("Adding product {} to wishlist", id));

        let (added, persistence) = self
            .session
            .try_mutate(|store| store.add(params.item, Utc::now()))
            .await
            .inspect_err(|err| {
                self.logger
                    .warn(&format!("Product {} rejected: {}", id, err));
            })?;

        if added {
            self.logger.info(&format!("Product {} added to wishlist", id));
            Ok(MutationOutcome {
                affected: 1,
                persistence,
            })
        } else {
            self.logger.info(&format!(
                "Product {} already in wishlist, skipping",
                id
            ));
            Ok(MutationOutcome {
                affected: 0,
                persistence,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::wishlist::model::PersistenceStatus;
    use crate::test_support::{
        MockWishlistRepo, empty_session, failing_session, mock_logger, new_item,
    };

    #[tokio::test]
    async fn should_add_new_item() {
        let session = empty_session().await;
        let use_case = AddToWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", "Air Max"),
            })
            .await;

        let outcome = result.unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(outcome.persistence, PersistenceStatus::Persisted);
        assert!(session.read(|s| s.contains(&ProductId::new("p1"))).await);
    }

    #[tokio::test]
    async fn should_not_duplicate_existing_item() {
        let session = empty_session().await;
        let use_case = AddToWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };
        use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", "Air Max"),
            })
            .await
            .unwrap();
        let first_added_at = session
            .read(|s| s.get(&ProductId::new("p1")).map(|i| i.added_at))
            .await;

        let outcome = use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", "Renamed"),
            })
            .await
            .unwrap();

        assert_eq!(outcome.affected, 0);
        assert_eq!(session.read(|s| s.count()).await, 1);
        let (name, added_at) = session
            .read(|s| {
                let item = s.get(&ProductId::new("p1")).unwrap();
                (item.name.clone(), item.added_at)
            })
            .await;
        assert_eq!(name, "Air Max");
        assert_eq!(Some(added_at), first_added_at);
    }

    #[tokio::test]
    async fn should_reject_item_without_id() {
        let session = empty_session().await;
        let use_case = AddToWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToWishlistParams {
                item: new_item("", "Air Max"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::IdEmpty));
        assert_eq!(session.read(|s| s.count()).await, 0);
    }

    #[tokio::test]
    async fn should_treat_invalid_readd_of_known_id_as_noop() {
        let session = empty_session().await;
        let use_case = AddToWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };
        use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", "Air Max"),
            })
            .await
            .unwrap();

        let outcome = use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", ""),
            })
            .await
            .unwrap();

        assert_eq!(outcome.affected, 0);
        assert_eq!(session.read(|s| s.count()).await, 1);
    }

    #[tokio::test]
    async fn should_not_write_storage_for_rejected_item() {
        let mut repo = MockWishlistRepo::new();
        repo.expect_load().returning(|| Ok(None));
        repo.expect_save().never();
        let session = Arc::new(WishlistSession::open(Arc::new(repo), mock_logger()).await);
        let use_case = AddToWishlistUseCaseImpl {
            session,
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", "  "),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_not_persisted_when_storage_fails() {
        let session = failing_session().await;
        let use_case = AddToWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(AddToWishlistParams {
                item: new_item("p1", "Air Max"),
            })
            .await
            .unwrap();

        assert_eq!(outcome.affected, 1);
        assert_eq!(outcome.persistence, PersistenceStatus::NotPersisted);
        assert_eq!(session.read(|s| s.count()).await, 1);
    }
}
