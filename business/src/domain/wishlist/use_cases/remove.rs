use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::model::MutationOutcome;

pub struct RemoveFromWishlistParams {
    pub id: ProductId,
}

/// Removing an absent id is a no-op, so this use case cannot fail.
#[async_trait]
pub trait RemoveFromWishlistUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromWishlistParams) -> MutationOutcome;
}
