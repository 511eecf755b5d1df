//! Server configuration
//!
//! Listen address, environment name and static asset location, read from
//! the process environment with defaults for local development.

use std::path::PathBuf;

/// Environment name that hides fault details from clients
pub const PRODUCTION: &str = "production";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host the listener binds to
    pub bind_addr: String,

    /// Port the listener binds to
    pub port: u16,

    /// Deployment environment name (e.g., "development", "production")
    pub environment: String,

    /// Directory holding the dashboard's static assets
    pub static_dir: PathBuf,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            environment: environment.into(),
            static_dir: default_static_dir(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables:
    /// - PORT (optional, default: 3000)
    /// - BIND_ADDR (optional, default: 0.0.0.0)
    /// - APP_ENV (optional, default: development)
    /// - STATIC_DIR (optional, default: `public`, resolved against the working directory)
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => 3000,
        };

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());

        Ok(Self {
            bind_addr,
            port,
            environment,
            static_dir,
        })
    }

    /// Whether fault details must be hidden from clients
    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.environment.is_empty() {
            anyhow::bail!("environment cannot be empty");
        }

        if !self.static_dir.is_dir() {
            anyhow::bail!(
                "static_dir {} is not a directory",
                self.static_dir.display()
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("development")
    }
}

/// Relative to the working directory, so a deployed binary finds the
/// `public/` directory shipped next to where it is started.
fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}
