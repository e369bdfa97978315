use std::sync::Arc;

use async_trait::async_trait;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::model::MutationOutcome;
use crate::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

pub struct RemoveFromWishlistUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromWishlistUseCase for RemoveFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveFromWishlistParams) -> MutationOutcome {
        self.logger
            .info(&format!("Removing product {} from wishlist", params.id));

        let (removed, persistence) = self
            .session
            .mutate(|store| store.remove(&params.id))
            .await;

        match removed {
            Some(_) => {
                self.logger
                    .info(&format!("Product {} removed from wishlist", params.id));
                MutationOutcome {
                    affected: 1,
                    persistence,
                }
            }
            None => {
                self.logger
                    .debug(&format!("Product {} was not in wishlist", params.id));
                MutationOutcome {
                    affected: 0,
                    persistence,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{empty_session, mock_logger, new_item};

    #[tokio::test]
    async fn should_remove_existing_item() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        let use_case = RemoveFromWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(RemoveFromWishlistParams {
                id: ProductId::new("p1"),
            })
            .await;

        assert_eq!(outcome.affected, 1);
        assert!(!session.read(|s| s.contains(&ProductId::new("p1"))).await);
    }

    #[tokio::test]
    async fn should_be_idempotent() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        session
            .mutate(|s| s.add(new_item("p2", "Blazer"), Utc::now()))
            .await;
        let use_case = RemoveFromWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(RemoveFromWishlistParams {
                id: ProductId::new("p1"),
            })
            .await;
        let after_first = session.read(|s| s.items().to_vec()).await;
        let second = use_case
            .execute(RemoveFromWishlistParams {
                id: ProductId::new("p1"),
            })
            .await;

        assert_eq!(second.affected, 0);
        assert_eq!(session.read(|s| s.items().to_vec()).await, after_first);
    }

    #[tokio::test]
    async fn should_ignore_unknown_id() {
        let session = empty_session().await;
        let use_case = RemoveFromWishlistUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(RemoveFromWishlistParams {
                id: ProductId::new("missing"),
            })
            .await;

        assert_eq!(outcome.affected, 0);
        assert_eq!(session.read(|s| s.count()).await, 0);
    }
}
