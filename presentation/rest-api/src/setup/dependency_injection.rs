use std::sync::Arc;

use logger::TracingLogger;
use persistence::wishlist::file::WishlistRepositoryFile;
use persistence::wishlist::memory::WishlistRepositoryInMemory;
use persistence::wishlist::postgres::WishlistRepositoryPostgres;
use storefront::cart::CartServiceHttp;
use storefront::client::StorefrontClient;

use business::application::wishlist::add::AddToWishlistUseCaseImpl;
use business::application::wishlist::clear::ClearWishlistUseCaseImpl;
use business::application::wishlist::get_all::GetWishlistUseCaseImpl;
use business::application::wishlist::get_count::GetItemCountUseCaseImpl;
use business::application::wishlist::is_in_wishlist::IsInWishlistUseCaseImpl;
use business::application::wishlist::move_to_cart::MoveToCartUseCaseImpl;
use business::application::wishlist::remove::RemoveFromWishlistUseCaseImpl;
use business::application::wishlist::session::WishlistSession;
use business::domain::logger::Logger;
use business::domain::wishlist::repository::WishlistRepository;
use business::domain::wishlist::services::CartService;

use crate::config::app_config::AppConfig;
use crate::config::database_config;
use crate::config::storage_config::{StorageBackend, StorageConfig};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
    /// Kept so the server can flush the wishlist on shutdown.
    pub session: Arc<WishlistSession>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());

        let repository = build_repository(&config.storage).await?;
        let cart = Arc::new(CartServiceHttp::new(StorefrontClient::new(
            config.storefront.base_url.clone(),
            config.storefront.api_key.clone(),
        )?));

        let backend = config.storage.backend.to_string();
        Ok(Self::from_parts(repository, cart, logger, &backend).await)
    }

    /// Wires the session, use cases and APIs around already-built adapters.
    pub async fn from_parts(
        repository: Arc<dyn WishlistRepository>,
        cart: Arc<dyn CartService>,
        logger: Arc<dyn Logger>,
        storage_label: &str,
    ) -> Self {
        let session = Arc::new(WishlistSession::open(repository, logger.clone()).await);

        let add_use_case = Arc::new(AddToWishlistUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveFromWishlistUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let move_to_cart_use_case = Arc::new(MoveToCartUseCaseImpl {
            session: session.clone(),
            cart,
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearWishlistUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let is_in_wishlist_use_case = Arc::new(IsInWishlistUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_count_use_case = Arc::new(GetItemCountUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetWishlistUseCaseImpl {
            session: session.clone(),
            logger,
        });

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            add_use_case,
            remove_use_case,
            move_to_cart_use_case,
            clear_use_case,
            is_in_wishlist_use_case,
            get_count_use_case,
            get_all_use_case,
        );

        Self {
            health_api: crate::api::health::routes::Api::new(storage_label),
            wishlist_api,
            session,
        }
    }
}

async fn build_repository(storage: &StorageConfig) -> anyhow::Result<Arc<dyn WishlistRepository>> {
    let repository: Arc<dyn WishlistRepository> = match storage.backend {
        StorageBackend::File => Arc::new(WishlistRepositoryFile::new(
            &storage.dir,
            &storage.namespace,
        )),
        StorageBackend::Postgres => {
            let url = storage
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
            let pool = database_config::init_database(url, &storage.migrations_path).await?;
            Arc::new(WishlistRepositoryPostgres::new(
                pool,
                storage.namespace.clone(),
            ))
        }
        StorageBackend::Memory => {
            Arc::new(WishlistRepositoryInMemory::new(storage.namespace.clone()))
        }
    };

    tracing::info!(
        backend = %storage.backend,
        namespace = %storage.namespace,
        "wishlist storage ready"
    );
    Ok(repository)
}
