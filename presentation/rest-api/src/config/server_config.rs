use std::env;
use std::time::Duration;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    /// Grace period for in-flight requests once a shutdown signal arrives
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - SHUTDOWN_TIMEOUT_SECS: Graceful shutdown timeout (default: 10)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
        let shutdown_timeout = parse_timeout(env::var("SHUTDOWN_TIMEOUT_SECS").ok());

        Self {
            ip,
            port,
            shutdown_timeout,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_timeout(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(10);
    Duration::from_secs(secs)
}
