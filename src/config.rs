// config.rs - Server configuration from the environment
//
// `.env` is loaded first (if present), then individual variables are read.
// Site address and asset paths come from leptos_config, not from here.

use std::env;
use std::path::PathBuf;

/// Environment variable naming a JSON catalog file
pub const CATALOG_PATH_VAR: &str = "CATALOG_PATH";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Catalog file to serve; the built-in sample catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load `.env` and read the configuration
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }
}
