//! minishop - command line front end for the in-memory storefront.
//!
//! Commands:
//! - `minishop demo` - Run the scripted register/cart/order walkthrough
//! - `minishop catalog` - List catalog items
//! - `minishop search` - Search the catalog by name
//! - `minishop config` - Manage configuration

mod commands;
mod config;
mod context;
mod logger;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, DemoArgs, SearchArgs};

/// minishop - Browse the catalog and walk through a purchase
#[derive(Parser)]
#[command(name = "minishop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted purchase walkthrough
    Demo(DemoArgs),

    /// List catalog items
    Catalog(CatalogArgs),

    /// Search the catalog by item name
    Search(SearchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    logger::init_logger(&ctx.config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
