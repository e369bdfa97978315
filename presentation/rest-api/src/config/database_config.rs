use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

/// Connect to PostgreSQL and apply migrations for the `client_storage` table
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(database_url: &str, migrations_path: &str) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(database_url.to_string())).await?;
    run_migrations(&pool, migrations_path).await?;
    Ok(pool)
}
