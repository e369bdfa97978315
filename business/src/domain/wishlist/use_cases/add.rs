use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{MutationOutcome, NewWishlistItem};

pub struct AddToWishlistParams {
    pub item: NewWishlistItem,
}

#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddToWishlistParams) -> Result<MutationOutcome, WishlistError>;
}
