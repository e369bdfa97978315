use super::services::CartError;

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.id_empty")]
    IdEmpty,
    #[error("wishlist.name_empty")]
    NameEmpty,
    #[error("wishlist.price_negative")]
    PriceNegative,
    #[error("wishlist.cart_unavailable")]
    CartUnavailable,
    #[error("wishlist.cart_rejected")]
    CartRejected,
}

impl From<CartError> for WishlistError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::Unavailable => WishlistError::CartUnavailable,
            CartError::Rejected => WishlistError::CartRejected,
        }
    }
}
