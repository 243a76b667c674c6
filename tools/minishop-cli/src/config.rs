//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use minishop_commerce::catalog::{Catalog, Item};
use minishop_commerce::{Currency, Money};
use minishop_sdk::Storefront;
use serde::{Deserialize, Serialize};

/// Names searched for when no `--config` is given, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["minishop.toml", ".minishop.toml", "minishop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Store-wide settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Items offered for sale.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Build the catalog described by `[[catalog.items]]`.
    pub fn build_catalog(&self) -> Result<Catalog> {
        let currency = self.store.currency;
        let items = self
            .catalog
            .items
            .iter()
            .map(|item| Item::new(item.id, item.name.clone(), Money::new(item.price, currency)));
        Catalog::new(items).context("Invalid catalog configuration")
    }

    /// A fresh storefront over the configured catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        Ok(Storefront::new(self.build_catalog()?, self.store.currency))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Store-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Currency for prices and totals.
    #[serde(default)]
    pub currency: Currency,

    /// Payment method used when none is given.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,

    /// Session name for the CLI's cart.
    #[serde(default = "default_session")]
    pub session: String,
}

fn default_payment_method() -> String {
    "Credit Card".to_string()
}

fn default_session() -> String {
    "cli".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            payment_method: default_payment_method(),
            session: default_session(),
        }
    }
}

/// The configured catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items: (1..=3u64)
                .map(|n| ItemConfig {
                    id: n,
                    name: format!("Product {n}"),
                    price: n as i64 * 1000,
                })
                .collect(),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemConfig {
    pub id: u64,
    pub name: String,
    /// Price in minor units (cents).
    pub price: i64,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Level for minishop crates; `RUST_LOG` overrides it.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

/// Generate a default minishop.toml config file.
pub fn generate_default_config() -> String {
    r#"# minishop configuration

[store]
currency = "USD"
payment_method = "Credit Card"
session = "cli"

# Prices are in minor units (cents).
[[catalog.items]]
id = 1
name = "Product 1"
price = 1000

[[catalog.items]]
id = 2
name = "Product 2"
price = 2000

[[catalog.items]]
id = 3
name = "Product 3"
price = 3000

[logging]
format = "compact"
level = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, ShopConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let parsed: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.store.payment_method, "Credit Card");
        assert_eq!(parsed.catalog.items.len(), 3);
        assert_eq!(parsed.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_build_catalog_uses_store_currency() {
        let config: ShopConfig = toml::from_str(
            r#"
            [store]
            currency = "EUR"

            [[catalog.items]]
            id = 7
            name = "Teapot"
            price = 1250
            "#,
        )
        .unwrap();

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].price.display(), "\u{20ac}12.50");
    }

    #[test]
    fn test_build_catalog_rejects_duplicates() {
        let config: ShopConfig = toml::from_str(
            r#"
            [[catalog.items]]
            id = 1
            name = "A"
            price = 100

            [[catalog.items]]
            id = 1
            name = "B"
            price = 200
            "#,
        )
        .unwrap();

        assert!(config.build_catalog().is_err());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minishop.json");
        let mut config = ShopConfig::default();
        config.store.payment_method = "PayPal".to_string();

        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(ShopConfig::load(&path).unwrap(), config);
    }
}
