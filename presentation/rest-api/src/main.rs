use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Wishlist service entry point
///
/// - config/: Server, CORS, storage and storefront settings
/// - setup/: Dependency injection and server lifecycle
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (before the filter reads RUST_LOG)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies (opens the wishlist session)
    let container = DependencyContainer::new(&config).await?;

    // 5. Run server until shutdown, then flush
    Server::run(config, container).await?;

    Ok(())
}
