use std::collections::HashSet;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::Mutex;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::model::PersistenceStatus;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::store::WishlistStore;

/// Owns the process-wide wishlist and writes it through to the repository.
///
/// Every operation runs under one lock, so operations are totally ordered and
/// saves reach the repository in the same order as the mutations. The lock is
/// never held across a call to an outside collaborator such as the cart.
pub struct WishlistSession {
    store: Mutex<WishlistStore>,
    repository: Arc<dyn WishlistRepository>,
    logger: Arc<dyn Logger>,
    moving: StdMutex<HashSet<ProductId>>,
}

impl WishlistSession {
    /// Restores the persisted wishlist. Missing, unreadable or corrupt records
    /// all start an empty wishlist.
    pub async fn open(repository: Arc<dyn WishlistRepository>, logger: Arc<dyn Logger>) -> Self {
        let store = match repository.load().await {
            Ok(Some(items)) => {
                let store = WishlistStore::from_items(items);
                logger.info(&format!("Restored wishlist with {} items", store.count()));
                store
            }
            Ok(None) => {
                logger.info("No stored wishlist found, starting empty");
                WishlistStore::new()
            }
            Err(RepositoryError::Corrupted) => {
                logger.warn("Stored wishlist is corrupted, starting empty");
                WishlistStore::new()
            }
            Err(err) => {
                logger.warn(&format!(
                    "Stored wishlist could not be read ({}), starting empty",
                    err
                ));
                WishlistStore::new()
            }
        };

        Self {
            store: Mutex::new(store),
            repository,
            logger,
            moving: StdMutex::new(HashSet::new()),
        }
    }

    pub(crate) async fn read<R>(&self, f: impl FnOnce(&WishlistStore) -> R) -> R {
        let store = self.store.lock().await;
        f(&store)
    }

    /// Applies `f` and persists the resulting collection before releasing the lock.
    pub(crate) async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut WishlistStore) -> R,
    ) -> (R, PersistenceStatus) {
        let mut store = self.store.lock().await;
        let result = f(&mut store);
        let status = self.persist(&store).await;
        (result, status)
    }

    /// Like [`WishlistSession::mutate`], but rejected input (`Err`) is not persisted.
    pub(crate) async fn try_mutate<T, E>(
        &self,
        f: impl FnOnce(&mut WishlistStore) -> Result<T, E>,
    ) -> Result<(T, PersistenceStatus), E> {
        let mut store = self.store.lock().await;
        let result = f(&mut store)?;
        let status = self.persist(&store).await;
        Ok((result, status))
    }

    /// Marks `id` as being handed to the cart. Returns `None` while another
    /// move of the same id is still pending. The mark clears when the claim drops.
    pub(crate) fn claim_move(&self, id: &ProductId) -> Option<MoveClaim<'_>> {
        let mut moving = self.moving.lock().unwrap_or_else(PoisonError::into_inner);
        if !moving.insert(id.clone()) {
            return None;
        }
        Some(MoveClaim {
            moving: &self.moving,
            id: id.clone(),
        })
    }

    async fn persist(&self, store: &WishlistStore) -> PersistenceStatus {
        match self.repository.save(store.items()).await {
            Ok(()) => {
                self.logger
                    .debug(&format!("Persisted wishlist with {} items", store.count()));
                PersistenceStatus::Persisted
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Wishlist change kept in memory but not persisted: {}",
                    err
                ));
                PersistenceStatus::NotPersisted
            }
        }
    }

    /// Final flush on shutdown.
    pub async fn close(&self) -> PersistenceStatus {
        let store = self.store.lock().await;
        self.logger
            .info(&format!("Closing wishlist with {} items", store.count()));
        self.persist(&store).await
    }
}

pub(crate) struct MoveClaim<'a> {
    moving: &'a StdMutex<HashSet<ProductId>>,
    id: ProductId,
}

impl Drop for MoveClaim<'_> {
    fn drop(&mut self) {
        self.moving
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}
