use async_trait::async_trait;

use crate::domain::wishlist::model::WishlistItem;

#[async_trait]
pub trait GetWishlistUseCase: Send + Sync {
    /// Items in insertion order.
    async fn execute(&self) -> Vec<WishlistItem>;
}
