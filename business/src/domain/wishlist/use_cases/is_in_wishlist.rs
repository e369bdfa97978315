use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

pub struct IsInWishlistParams {
    pub id: ProductId,
}

#[async_trait]
pub trait IsInWishlistUseCase: Send + Sync {
    async fn execute(&self, params: IsInWishlistParams) -> bool;
}
