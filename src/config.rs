//! Runtime configuration loaded from environment variables.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Catalog configuration.
///
/// All fields have defaults suitable for local use; override them through the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Capacity of the item store's request channel (default: `32`).
    pub store_buffer: usize,
    /// Tracing filter used when `RUST_LOG` is unset (default: `info`).
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `CATALOG_STORE_BUFFER` | `32`    |
    /// | `CATALOG_LOG`          | `info`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_buffer = match lookup("CATALOG_STORE_BUFFER") {
            None => defaults.store_buffer,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "CATALOG_STORE_BUFFER",
                        value,
                    })
                }
            },
        };

        let log_filter = lookup("CATALOG_LOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            store_buffer,
            log_filter,
        })
    }
}
