use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::application::wishlist::session::WishlistSession;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::model::{NewWishlistItem, WishlistItem};
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::services::{CartError, CartService};

mock! {
    pub WishlistRepo {}

    #[async_trait]
    impl WishlistRepository for WishlistRepo {
        async fn load(&self) -> Result<Option<Vec<WishlistItem>>, RepositoryError>;
        async fn save(&self, items: &[WishlistItem]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Cart {}

    #[async_trait]
    impl CartService for Cart {
        async fn add_item(&self, item: &WishlistItem) -> Result<(), CartError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn new_item(id: &str, name: &str) -> NewWishlistItem {
    NewWishlistItem {
        id: ProductId::new(id),
        name: name.to_string(),
        price: BigDecimal::from_str("129.99").unwrap(),
        original_price: Some(BigDecimal::from_str("149.99").unwrap()),
        image: "/a.jpg".to_string(),
        slug: "air-max".to_string(),
        brand: Some("Nike".to_string()),
        category: Some("running".to_string()),
        rating: Some(4.5),
        stock: 5,
    }
}

/// Repository keeping the last saved collection, shared between sessions.
#[derive(Default, Clone)]
pub struct RecordingRepo {
    pub saved: Arc<Mutex<Option<Vec<WishlistItem>>>>,
}

#[async_trait]
impl WishlistRepository for RecordingRepo {
    async fn load(&self) -> Result<Option<Vec<WishlistItem>>, RepositoryError> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn save(&self, items: &[WishlistItem]) -> Result<(), RepositoryError> {
        *self.saved.lock().unwrap() = Some(items.to_vec());
        Ok(())
    }
}

/// Session backed by an empty repository that accepts every save.
pub async fn empty_session() -> Arc<WishlistSession> {
    let mut repo = MockWishlistRepo::new();
    repo.expect_load().returning(|| Ok(None));
    repo.expect_save().returning(|_| Ok(()));
    Arc::new(WishlistSession::open(Arc::new(repo), mock_logger()).await)
}

/// Session whose saves always fail.
pub async fn failing_session() -> Arc<WishlistSession> {
    let mut repo = MockWishlistRepo::new();
    repo.expect_load().returning(|| Ok(None));
    repo.expect_save()
        .returning(|_| Err(RepositoryError::Persistence));
    Arc::new(WishlistSession::open(Arc::new(repo), mock_logger()).await)
}
