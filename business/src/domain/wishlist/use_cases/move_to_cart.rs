use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::MutationOutcome;

pub struct MoveToCartParams {
    pub id: ProductId,
}

#[async_trait]
pub trait MoveToCartUseCase: Send + Sync {
    async fn execute(&self, params: MoveToCartParams) -> Result<MutationOutcome, WishlistError>;
}
