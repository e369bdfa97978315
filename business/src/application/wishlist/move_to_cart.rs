use std::sync::Arc;

use async_trait::async_trait;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::MutationOutcome;
use crate::domain::wishlist::services::CartService;
use crate::domain::wishlist::use_cases::move_to_cart::{MoveToCartParams, MoveToCartUseCase};

pub struct MoveToCartUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub cart: Arc<dyn CartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MoveToCartUseCase for MoveToCartUseCaseImpl {
    async fn execute(&self, params: MoveToCartParams) -> Result<MutationOutcome, WishlistError> {
        self.logger
            .info(&format!("Moving product {} to cart", params.id));

        let Some(_claim) = self.session.claim_move(&params.id) else {
            self.logger.debug(&format!(
                "Product {} is already on its way to the cart",
                params.id
            ));
            return Ok(self.no_op().await);
        };

        let Some(item) = self.session.read(|s| s.get(&params.id).cloned()).await else {
            self.logger
                .debug(&format!("Product {} was not in wishlist", params.id));
            return Ok(self.no_op().await);
        };

        // No store lock is held while the cart answers.
        if let Err(err) = self.cart.add_item(&item).await {
            self.logger.error(&format!(
                "Cart did not accept product {}: {}",
                params.id, err
            ));
            return Err(err.into());
        }

        let (removed, persistence) = self
            .session
            .mutate(|s| s.remove(&params.id).is_some())
            .await;

        self.logger
            .info(&format!("Product {} moved to cart", params.id));
        Ok(MutationOutcome {
            affected: usize::from(removed),
            persistence,
        })
    }
}

impl MoveToCartUseCaseImpl {
    async fn no_op(&self) -> MutationOutcome {
        let ((), persistence) = self.session.mutate(|_| ()).await;
        MutationOutcome {
            affected: 0,
            persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::wishlist::model::WishlistItem;
    use crate::domain::wishlist::services::CartError;
    use crate::test_support::{MockCart, empty_session, mock_logger, new_item};

    /// Cart that holds every call until the test releases it.
    #[derive(Default)]
    struct GatedCart {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl CartService for GatedCart {
        async fn add_item(&self, _item: &WishlistItem) -> Result<(), CartError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_hand_item_to_cart_and_remove_it() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        let mut cart = MockCart::new();
        cart.expect_add_item()
            .withf(|item| item.id.as_str() == "p1" && item.name == "Air Max")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = MoveToCartUseCaseImpl {
            session: session.clone(),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(MoveToCartParams {
                id: ProductId::new("p1"),
            })
            .await
            .unwrap();

        assert_eq!(outcome.affected, 1);
        assert!(!session.read(|s| s.contains(&ProductId::new("p1"))).await);
    }

    #[tokio::test]
    async fn should_leave_wishlist_unchanged_for_absent_id() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        let before = session.read(|s| s.items().to_vec()).await;
        let mut cart = MockCart::new();
        cart.expect_add_item().never();

        let use_case = MoveToCartUseCaseImpl {
            session: session.clone(),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(MoveToCartParams {
                id: ProductId::new("missing"),
            })
            .await
            .unwrap();

        assert_eq!(outcome.affected, 0);
        assert_eq!(session.read(|s| s.items().to_vec()).await, before);
    }

    #[tokio::test]
    async fn should_keep_item_when_cart_unavailable() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        let mut cart = MockCart::new();
        cart.expect_add_item()
            .returning(|_| Err(CartError::Unavailable));

        let use_case = MoveToCartUseCaseImpl {
            session: session.clone(),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(MoveToCartParams {
                id: ProductId::new("p1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::CartUnavailable
        ));
        assert!(session.read(|s| s.contains(&ProductId::new("p1"))).await);
    }

    #[tokio::test]
    async fn should_map_rejection_from_cart() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        let mut cart = MockCart::new();
        cart.expect_add_item()
            .returning(|_| Err(CartError::Rejected));

        let use_case = MoveToCartUseCaseImpl {
            session,
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(MoveToCartParams {
                id: ProductId::new("p1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::CartRejected));
    }

    #[tokio::test]
    async fn should_serve_reads_while_cart_is_pending() {
        let session = empty_session().await;
        session
            .mutate(|s| s.add(new_item("p1", "Air Max"), Utc::now()))
            .await;
        let cart = Arc::new(GatedCart::default());
        let use_case = Arc::new(MoveToCartUseCaseImpl {
            session: session.clone(),
            cart: cart.clone(),
            logger: mock_logger(),
        });

        let pending = tokio::spawn({
            let use_case = use_case.clone();
            async move {
                use_case
                    .execute(MoveToCartParams {
                        id: ProductId::new("p1"),
                    })
                    .await
            }
        });
        cart.entered.notified().await;

        let count = tokio::time::timeout(Duration::from_secs(1), session.read(|s| s.count())).await;
        assert_eq!(count.unwrap(), 1);

        let second = tokio::time::timeout(
            Duration::from_secs(1),
            use_case.execute(MoveToCartParams {
                id: ProductId::new("p1"),
            }),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(second.affected, 0);

        cart.release.notify_one();
        let outcome = pending.await.unwrap().unwrap();

        assert_eq!(outcome.affected, 1);
        assert_eq!(session.read(|s| s.count()).await, 0);
    }
}
