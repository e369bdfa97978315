use std::sync::Arc;

use async_trait::async_trait;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::model::MutationOutcome;
use crate::domain::wishlist::use_cases::clear::ClearWishlistUseCase;

pub struct ClearWishlistUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearWishlistUseCase for ClearWishlistUseCaseImpl {
    async fn execute(&self) -> MutationOutcome {
        self.logger.info("Clearing wishlist");

        let (affected, persistence) = self.session.mutate(|store| store.clear()).await;

        self.logger
            .info(&format!("Cleared {} wishlist items", affected));
        MutationOutcome {
            affected,
            persistence,
        }
    }
}
