use std::sync::Arc;

use async_trait::async_trait;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::use_cases::get_count::GetItemCountUseCase;

pub struct GetItemCountUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemCountUseCase for GetItemCountUseCaseImpl {
    async fn execute(&self) -> usize {
        let count = self.session.read(|store| store.count()).await;
        self.logger.debug(&format!("Wishlist holds {} items", count));
        count
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{empty_session, mock_logger, new_item};

    #[tokio::test]
    async fn should_count_distinct_items_minus_removed() {
        let session = empty_session().await;
        for id in ["p1", "p2", "p3", "p1"] {
            session
                .mutate(|s| s.add(new_item(id, "Shoe"), Utc::now()))
                .await;
        }
        session
            .mutate(|s| s.remove(&ProductId::new("p2")))
            .await;
        let use_case = GetItemCountUseCaseImpl {
            session,
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, 2);
    }
}
