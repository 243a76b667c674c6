//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Username to register and log in with.
    #[arg(long, default_value = "JohnDoe")]
    pub username: String,

    /// Password to register and log in with.
    #[arg(long, default_value = "password")]
    pub password: String,

    /// Payment method for the order (default: from config).
    #[arg(long)]
    pub payment_method: Option<String>,

    /// Query for the closing name search.
    #[arg(long, default_value = "2")]
    pub search: String,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show only the item with this id.
    #[arg(long)]
    pub id: Option<u64>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Case-sensitive substring of the item name.
    #[arg(default_value = "")]
    pub query: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
