// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    default_author_id: i64,
    page_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite:pressroom.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_page_size() -> u32 {
    20
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let default_author_id = env::var("DEFAULT_AUTHOR_ID")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(1);

        if default_author_id <= 0 {
            return Err(ConfigError::Invalid(
                "DEFAULT_AUTHOR_ID must be positive".into(),
            ));
        }

        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(default_page_size);

        Ok(Self {
            database_url,
            listen_addr,
            default_author_id,
            page_size,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Principal attributed to articles created over HTTP while no
    /// authentication context exists.
    pub fn default_author_id(&self) -> i64 {
        self.default_author_id
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
