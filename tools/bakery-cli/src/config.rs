//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bakery_cart::CartConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart tunables.
    #[serde(default)]
    pub cart: CartConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; defaults to the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .cart
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = CliConfig::parse("bakery.toml", "").unwrap();
        assert_eq!(config.cart, CartConfig::default());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_toml_overrides() {
        let config = CliConfig::parse(
            "bakery.toml",
            r#"
            [cart]
            max_quantity = 5
            currency = "EUR"

            [storage]
            data_dir = "/tmp/bakery"
            "#,
        )
        .unwrap();

        assert_eq!(config.cart.max_quantity, 5);
        assert_eq!(config.cart.storage_key, "cartItems");
        assert_eq!(config.cart.currency, bakery_cart::Currency::EUR);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/bakery")));
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse("bakery.json", r#"{"cart": {"notice_ttl_ms": 1000}}"#).unwrap();
        assert_eq!(config.cart.notice_ttl_ms, 1000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = CliConfig::parse("bakery.toml", "[cart]\nmax_quantity = 0\n").unwrap_err();
        assert!(format!("{:#}", err).contains("max_quantity"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.toml");
        std::fs::write(&path, "[cart]\nstorage_key = \"shop\"\n").unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.cart.storage_key, "shop");
    }
}
