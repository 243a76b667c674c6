//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Config file: {}", path.display())),
        None => ctx.output.info("No config file found; using defaults"),
    }

    ctx.output.section("store");
    ctx.output.kv("currency", ctx.config.store.currency.code());
    ctx.output.kv("payment_method", &ctx.config.store.payment_method);
    ctx.output.kv("session", &ctx.config.store.session);

    ctx.output.section("catalog");
    for item in &ctx.config.catalog.items {
        ctx.output
            .kv(&item.id.to_string(), format!("{} ({})", item.name, item.price));
    }

    ctx.output.section("logging");
    ctx.output.kv("format", format!("{:?}", ctx.config.logging.format).to_lowercase());
    ctx.output.kv("level", &ctx.config.logging.level);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json_line(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.info("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(err) = ctx.config.build_catalog() {
        errors.push(format!("{:#}", err));
    }
    if ctx.config.catalog.items.is_empty() {
        warnings.push("catalog.items is empty; nothing can be added to a cart".to_string());
    }
    if ctx.config.store.payment_method.trim().is_empty() {
        warnings.push("store.payment_method is blank".to_string());
    }
    if tracing_subscriber_level_invalid(&ctx.config.logging.level) {
        errors.push(format!("logging.level '{}' is not a level", ctx.config.logging.level));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn tracing_subscriber_level_invalid(level: &str) -> bool {
    level.parse::<tracing::Level>().is_err() && !level.eq_ignore_ascii_case("off")
}

fn get_config_value(config: &ShopConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "currency"] => Ok(config.store.currency.code().to_string()),
        ["store", "payment_method"] => Ok(config.store.payment_method.clone()),
        ["store", "session"] => Ok(config.store.session.clone()),
        ["catalog", "items"] => Ok(config.catalog.items.len().to_string()),
        ["logging", "level"] => Ok(config.logging.level.clone()),
        ["logging", "format"] => Ok(format!("{:?}", config.logging.format).to_lowercase()),
        _ => bail!("Unknown config key: {}", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = ShopConfig::default();
        assert_eq!(get_config_value(&config, "store.currency").unwrap(), "USD");
        assert_eq!(
            get_config_value(&config, "store.payment_method").unwrap(),
            "Credit Card"
        );
        assert_eq!(get_config_value(&config, "catalog.items").unwrap(), "3");
        assert_eq!(get_config_value(&config, "logging.format").unwrap(), "compact");
        assert!(get_config_value(&config, "store.nope").is_err());
    }

    fn in_dir(dir: &std::path::Path) -> Context {
        let mut ctx = Context::quiet(ShopConfig::default());
        ctx.cwd = dir.to_path_buf();
        ctx
    }

    #[test]
    fn test_init_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = in_dir(dir.path());

        init_config(false, &ctx).unwrap();
        let written = ShopConfig::load(&dir.path().join("minishop.toml")).unwrap();
        assert_eq!(written, ShopConfig::default());

        assert!(init_config(false, &ctx).is_err());
        assert!(init_config(true, &ctx).is_ok());
    }

    #[test]
    fn test_init_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = in_dir(&dir.path().join("missing"));

        let err = init_config(false, &ctx).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write config file"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut config = ShopConfig::default();
        config.catalog.items[1].id = 1;
        assert!(validate_config(&Context::quiet(config)).is_err());
        assert!(validate_config(&Context::quiet(ShopConfig::default())).is_ok());
    }

    #[test]
    fn test_level_validation() {
        assert!(!tracing_subscriber_level_invalid("info"));
        assert!(!tracing_subscriber_level_invalid("DEBUG"));
        assert!(!tracing_subscriber_level_invalid("off"));
        assert!(tracing_subscriber_level_invalid("loud"));
    }
}
