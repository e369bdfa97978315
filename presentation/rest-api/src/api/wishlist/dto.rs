use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::model::{MutationOutcome, NewWishlistItem, WishlistItem};

use crate::api::error::ErrorResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    /// Product identifier (dedup key)
    pub id: String,
    /// Product name
    pub name: String,
    /// Price as a decimal string, e.g. "129.99"
    pub price: String,
    /// Price before discount
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<String>,
    /// Image URI
    pub image: String,
    /// URL-safe product identifier
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f64>,
    /// Units in stock when saved
    pub stock: u32,
}

fn parse_price(raw: &str) -> Result<BigDecimal, ErrorResponse> {
    BigDecimal::from_str(raw.trim()).map_err(|_| ErrorResponse::validation("wishlist.price_invalid"))
}

impl AddToWishlistRequest {
    pub fn into_new_item(self) -> Result<NewWishlistItem, ErrorResponse> {
        let price = parse_price(&self.price)?;
        let original_price = self.original_price.as_deref().map(parse_price).transpose()?;

        Ok(NewWishlistItem {
            id: ProductId::new(self.id),
            name: self.name,
            price,
            original_price,
            image: self.image,
            slug: self.slug,
            brand: self.brand,
            category: self.category,
            rating: self.rating,
            stock: self.stock,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WishlistItemResponse {
    pub id: String,
    pub name: String,
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<String>,
    pub image: String,
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f64>,
    pub stock: u32,
    /// When the item was saved
    pub added_at: DateTime<Utc>,
}

impl From<WishlistItem> for WishlistItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price.to_string(),
            original_price: item.original_price.map(|p| p.to_string()),
            image: item.image,
            slug: item.slug,
            brand: item.brand,
            category: item.category,
            rating: item.rating,
            stock: item.stock,
            added_at: item.added_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    /// Saved items in insertion order
    pub items: Vec<WishlistItemResponse>,
    pub count: u64,
}

#[derive(Debug, Clone, Object)]
pub struct MutationResponse {
    /// Entries added or removed; 0 when nothing changed
    pub affected: u64,
    /// False when the change only lives in memory until the next successful write
    pub persisted: bool,
}

impl From<MutationOutcome> for MutationResponse {
    fn from(outcome: MutationOutcome) -> Self {
        Self {
            affected: outcome.affected as u64,
            persisted: outcome.persistence.is_persisted(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: String,
    pub in_wishlist: bool,
}

#[derive(Debug, Clone, Object)]
pub struct CountResponse {
    pub count: u64,
}
