use async_trait::async_trait;

use crate::domain::wishlist::model::MutationOutcome;

#[async_trait]
pub trait ClearWishlistUseCase: Send + Sync {
    async fn execute(&self) -> MutationOutcome;
}
