use std::sync::Arc;

use async_trait::async_trait;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::logger::Logger;
use crate::domain::wishlist::use_cases::is_in_wishlist::{
    IsInWishlistParams, IsInWishlistUseCase,
};

pub struct IsInWishlistUseCaseImpl {
    pub session: Arc<WishlistSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IsInWishlistUseCase for IsInWishlistUseCaseImpl {
    async fn execute(&self, params: IsInWishlistParams) -> bool {
        let found = self.session.read(|store| store.contains(&params.id)).await;
        self.logger
            .debug(&format!("Product {} in wishlist: {}", params.id, found));
        found
    }
}
