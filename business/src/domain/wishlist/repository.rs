use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::WishlistItem;

/// Durable storage for the wishlist collection.
///
/// The whole collection is written on every save; there is no per-item API.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<Vec<WishlistItem>>, RepositoryError>;
    async fn save(&self, items: &[WishlistItem]) -> Result<(), RepositoryError>;
}
