//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_PUBLIC_DIR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_VIEWS_DIR, INDEX_PAGE,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Static assets served for unmatched paths
    pub public_dir: PathBuf,
    /// Location of the landing page
    pub views_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            views_dir: PathBuf::from(DEFAULT_VIEWS_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            server_host: env::var("HOST").unwrap_or(defaults.server_host),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            views_dir: env::var("VIEWS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.views_dir),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Path of the landing page served at `/`.
    pub fn index_page(&self) -> PathBuf {
        self.views_dir.join(INDEX_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_listens_on_port_3000() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_index_page_lives_in_views_dir() {
        let config = Config {
            views_dir: PathBuf::from("/srv/views"),
            ..Config::default()
        };
        assert_eq!(config.index_page(), PathBuf::from("/srv/views/index.html"));
    }
}
