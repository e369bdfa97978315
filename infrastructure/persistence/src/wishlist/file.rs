use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistRecord;

/// Stores the wishlist as `<dir>/<namespace>.json`.
pub struct WishlistRepositoryFile {
    path: PathBuf,
}

impl WishlistRepositoryFile {
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", namespace)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryFile {
    async fn load(&self) -> Result<Option<Vec<WishlistItem>>, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "wishlist file unreadable");
                return Err(RepositoryError::Unavailable);
            }
        };

        let record = WishlistRecord::decode(&raw)?;
        Ok(Some(record.into_domain()))
    }

    async fn save(&self, items: &[WishlistItem]) -> Result<(), RepositoryError> {
        let raw = WishlistRecord::from_domain(items).encode()?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| RepositoryError::Persistence)?;
        }

        // Write aside then rename, so a crash never leaves a half-written record.
        let temp = self.temp_path();
        tokio::fs::write(&temp, raw)
            .await
            .map_err(|_| RepositoryError::Persistence)?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        tracing::debug!(path = %self.path.display(), items = items.len(), "wishlist file written");
        Ok(())
    }
}
