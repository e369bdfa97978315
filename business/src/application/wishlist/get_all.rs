use std::sync::Arc;

use async_trait::async_trait;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::use_cases::get_all::GetWishlistUseCase;

pub struct GetWishlistUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self) -> Vec<WishlistItem> {
        self.logger.info("Getting wishlist");
        let items = self.session.read(|store| store.items().to_vec()).await;
        self.logger
            .info(&format!("Retrieved {} wishlist items", items.len()));
        items
    }
}
