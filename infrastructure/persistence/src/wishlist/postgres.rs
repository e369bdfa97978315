use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::{ClientStorageEntity, WishlistRecord};

/// Stores the wishlist record as JSONB in `client_storage`, one row per namespace.
pub struct WishlistRepositoryPostgres {
    pool: PgPool,
    namespace: String,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool, namespace: impl Into<String>) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn load(&self) -> Result<Option<Vec<WishlistItem>>, RepositoryError> {
        let entity = sqlx::query_as::<_, ClientStorageEntity>(
            "SELECT namespace, payload, updated_at FROM client_storage WHERE namespace = $1",
        )
        .bind(&self.namespace)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "wishlist record query failed");
            RepositoryError::DatabaseError
        })?;

        match entity {
            Some(entity) => {
                tracing::debug!(
                    namespace = %entity.namespace,
                    updated_at = %entity.updated_at,
                    "wishlist record loaded"
                );
                Ok(Some(WishlistRecord::from_value(entity.payload)?.into_domain()))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, items: &[WishlistItem]) -> Result<(), RepositoryError> {
        let payload = WishlistRecord::from_domain(items).to_value()?;

        sqlx::query(
            r#"INSERT INTO client_storage (namespace, payload, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (namespace) DO UPDATE SET
                payload = EXCLUDED.payload,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(&self.namespace)
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "wishlist record upsert failed");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }
}
