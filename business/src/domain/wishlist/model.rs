use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::errors::WishlistError;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub image: String,
    pub slug: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    /// Units available when the item was saved. Not kept in sync with inventory.
    pub stock: u32,
    pub added_at: DateTime<Utc>,
}

/// Item data supplied by the caller. `added_at` is stamped by the store.
#[derive(Debug, Clone)]
pub struct NewWishlistItem {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub image: String,
    pub slug: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub stock: u32,
}

impl WishlistItem {
    pub fn new(props: NewWishlistItem, added_at: DateTime<Utc>) -> Result<Self, WishlistError> {
        if props.id.is_blank() {
            return Err(WishlistError::IdEmpty);
        }

        if props.name.trim().is_empty() {
            return Err(WishlistError::NameEmpty);
        }

        let zero = BigDecimal::from(0);
        if props.price < zero || props.original_price.as_ref().is_some_and(|p| *p < zero) {
            return Err(WishlistError::PriceNegative);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            original_price: props.original_price,
            image: props.image,
            slug: props.slug,
            brand: props.brand,
            category: props.category,
            rating: props.rating,
            stock: props.stock,
            added_at,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: BigDecimal,
        original_price: Option<BigDecimal>,
        image: String,
        slug: String,
        brand: Option<String>,
        category: Option<String>,
        rating: Option<f64>,
        stock: u32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            original_price,
            image,
            slug,
            brand,
            category,
            rating,
            stock,
            added_at,
        }
    }
}

/// Whether the collection reached durable storage after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceStatus {
    Persisted,
    NotPersisted,
}

impl PersistenceStatus {
    pub fn is_persisted(self) -> bool {
        self == PersistenceStatus::Persisted
    }
}

/// Result of a mutating wishlist operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Entries added or removed. Zero when the operation was a no-op.
    pub affected: usize,
    pub persistence: PersistenceStatus,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn props() -> NewWishlistItem {
        NewWishlistItem {
            id: ProductId::new("p1"),
            name: "Air Max".to_string(),
            price: BigDecimal::from_str("129.99").unwrap(),
            original_price: None,
            image: "/a.jpg".to_string(),
            slug: "air-max".to_string(),
            brand: None,
            category: None,
            rating: None,
            stock: 5,
        }
    }

    #[test]
    fn should_create_item_with_given_timestamp() {
        let added_at = Utc::now();
        let item = WishlistItem::new(props(), added_at).unwrap();

        assert_eq!(item.id, ProductId::new("p1"));
        assert_eq!(item.name, "Air Max");
        assert_eq!(item.stock, 5);
        assert_eq!(item.added_at, added_at);
    }

    #[test]
    fn should_reject_when_id_blank() {
        let mut props = props();
        props.id = ProductId::new("  ");

        let result = WishlistItem::new(props, Utc::now());

        assert!(matches!(result.unwrap_err(), WishlistError::IdEmpty));
    }

    #[test]
    fn should_reject_when_name_empty() {
        let mut props = props();
        props.name = "".to_string();

        let result = WishlistItem::new(props, Utc::now());

        assert!(matches!(result.unwrap_err(), WishlistError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut props = props();
        props.price = BigDecimal::from(-1);

        let result = WishlistItem::new(props, Utc::now());

        assert!(matches!(result.unwrap_err(), WishlistError::PriceNegative));
    }

    #[test]
    fn should_reject_negative_original_price() {
        let mut props = props();
        props.original_price = Some(BigDecimal::from_str("-0.01").unwrap());

        let result = WishlistItem::new(props, Utc::now());

        assert!(matches!(result.unwrap_err(), WishlistError::PriceNegative));
    }

    #[test]
    fn should_accept_free_items() {
        let mut props = props();
        props.price = BigDecimal::from(0);

        assert!(WishlistItem::new(props, Utc::now()).is_ok());
    }
}
