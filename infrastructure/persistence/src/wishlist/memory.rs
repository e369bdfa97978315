use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistRecord;

/// Keeps the encoded record in process memory. Nothing survives a restart.
pub struct WishlistRepositoryInMemory {
    namespace: String,
    records: Mutex<HashMap<String, String>>,
}

impl WishlistRepositoryInMemory {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds the raw stored text, as another writer would have left it.
    pub fn with_raw_record(namespace: impl Into<String>, raw: impl Into<String>) -> Self {
        let repo = Self::new(namespace);
        if let Ok(mut records) = repo.records.lock() {
            records.insert(repo.namespace.clone(), raw.into());
        }
        repo
    }

    pub fn raw_record(&self) -> Option<String> {
        self.records
            .lock()
            .ok()
            .and_then(|records| records.get(&self.namespace).cloned())
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryInMemory {
    async fn load(&self) -> Result<Option<Vec<WishlistItem>>, RepositoryError> {
        let raw = {
            let records = self
                .records
                .lock()
                .map_err(|_| RepositoryError::Unavailable)?;
            records.get(&self.namespace).cloned()
        };

        match raw {
            Some(raw) => Ok(Some(WishlistRecord::decode(&raw)?.into_domain())),
            None => Ok(None),
        }
    }

    async fn save(&self, items: &[WishlistItem]) -> Result<(), RepositoryError> {
        let raw = WishlistRecord::from_domain(items).encode()?;
        self.records
            .lock()
            .map_err(|_| RepositoryError::Persistence)?
            .insert(self.namespace.clone(), raw);
        Ok(())
    }
}
