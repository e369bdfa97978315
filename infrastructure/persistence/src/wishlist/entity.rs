use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::model::WishlistItem;

/// Stored shape of a wishlist item. Field names are camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemEntity {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "price::deserialize")]
    pub price: BigDecimal,
    #[serde(
        default,
        deserialize_with = "price::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<BigDecimal>,
    pub image: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub stock: u32,
    pub added_at: DateTime<Utc>,
}

impl WishlistItemEntity {
    pub fn from_domain(item: &WishlistItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            name: item.name.clone(),
            price: item.price.clone(),
            original_price: item.original_price.clone(),
            image: item.image.clone(),
            slug: item.slug.clone(),
            brand: item.brand.clone(),
            category: item.category.clone(),
            rating: item.rating,
            stock: item.stock,
            added_at: item.added_at,
        }
    }

    pub fn into_domain(self) -> WishlistItem {
        WishlistItem::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            self.original_price,
            self.image,
            self.slug,
            self.brand,
            self.category,
            self.rating,
            self.stock,
            self.added_at,
        )
    }
}

/// Prices are written as decimal strings. Older records may hold JSON numbers;
/// those are read back through their shortest decimal text so `129.99` stays
/// `129.99` instead of the exact binary expansion of the float.
mod price {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredPrice {
        Text(String),
        Number(f64),
    }

    impl StoredPrice {
        fn into_decimal(self) -> Result<BigDecimal, String> {
            let text = match self {
                StoredPrice::Text(text) => text,
                StoredPrice::Number(number) if number.is_finite() => number.to_string(),
                StoredPrice::Number(number) => return Err(format!("invalid price {}", number)),
            };
            BigDecimal::from_str(text.trim()).map_err(|err| err.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        StoredPrice::deserialize(deserializer)?
            .into_decimal()
            .map_err(D::Error::custom)
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigDecimal>, D::Error> {
        Option::<StoredPrice>::deserialize(deserializer)?
            .map(StoredPrice::into_decimal)
            .transpose()
            .map_err(D::Error::custom)
    }
}

/// The single record persisted per namespace: `{ "items": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WishlistRecord {
    pub items: Vec<WishlistItemEntity>,
}

impl WishlistRecord {
    pub fn from_domain(items: &[WishlistItem]) -> Self {
        Self {
            items: items.iter().map(WishlistItemEntity::from_domain).collect(),
        }
    }

    pub fn into_domain(self) -> Vec<WishlistItem> {
        self.items.into_iter().map(|e| e.into_domain()).collect()
    }

    pub fn encode(&self) -> Result<String, RepositoryError> {
        serde_json::to_string(self).map_err(|_| RepositoryError::Persistence)
    }

    pub fn decode(raw: &str) -> Result<Self, RepositoryError> {
        serde_json::from_str(raw).map_err(|err| {
            tracing::warn!(error = %err, "wishlist record could not be decoded");
            RepositoryError::Corrupted
        })
    }

    pub fn to_value(&self) -> Result<serde_json::Value, RepositoryError> {
        serde_json::to_value(self).map_err(|_| RepositoryError::Persistence)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, RepositoryError> {
        serde_json::from_value(value).map_err(|err| {
            tracing::warn!(error = %err, "wishlist record could not be decoded");
            RepositoryError::Corrupted
        })
    }
}

/// Row of the `client_storage` table.
#[derive(Debug, FromRow)]
pub struct ClientStorageEntity {
    pub namespace: String,
    pub payload: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
