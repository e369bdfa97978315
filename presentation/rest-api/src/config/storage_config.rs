use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail};

/// Where the wishlist record is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Postgres,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("Invalid storage backend: {}", other)),
        }
    }
}

/// Wishlist storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub namespace: String,
    pub dir: PathBuf,
    pub database_url: Option<String>,
    pub migrations_path: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - WISHLIST_STORAGE_BACKEND: "file", "postgres" or "memory" (default: "file")
    /// - WISHLIST_NAMESPACE: Record key (default: "wishlist-storage")
    /// - WISHLIST_STORAGE_DIR: Directory for the file backend (default: "./data")
    /// - DATABASE_URL: PostgreSQL connection string (required for "postgres")
    /// - DATABASE_MIGRATIONS_PATH: Migrations directory (default: "./migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let backend = match lookup("WISHLIST_STORAGE_BACKEND") {
            Some(raw) => raw.parse::<StorageBackend>().map_err(|e| anyhow!(e))?,
            None => StorageBackend::File,
        };

        let namespace = lookup("WISHLIST_NAMESPACE")
            .filter(|ns| !ns.trim().is_empty())
            .unwrap_or_else(|| "wishlist-storage".to_string());
        let dir = PathBuf::from(lookup("WISHLIST_STORAGE_DIR").unwrap_or_else(|| "./data".to_string()));
        let database_url = lookup("DATABASE_URL");
        let migrations_path =
            lookup("DATABASE_MIGRATIONS_PATH").unwrap_or_else(|| "./migrations".to_string());

        if backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when WISHLIST_STORAGE_BACKEND=postgres");
        }

        Ok(Self {
            backend,
            namespace,
            dir,
            database_url,
            migrations_path,
        })
    }
}
